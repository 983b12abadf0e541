mod admin_redirect;
mod api;
mod config;
mod email_form;
mod landing;
mod navbar;
mod notices;
mod pagination;
mod position_banner;
mod query;
mod refer_panel;
mod referrals_table;
mod register_dialog;
mod register_form;
mod stores;
mod tables;
mod verify_alert;
mod verify_page;
mod waitlist_table;

use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

use crate::admin_redirect::AdminRedirect;
use crate::landing::Landing;
use crate::stores::{DialogStore, Notices, PositionStore, UserStore};
use crate::verify_page::VerifyPage;

#[derive(Route)]
enum AppRoutes {
    #[to("/")]
    Index,
    #[to("/verify")]
    Verify,
    #[to("/admin")]
    Admin,
    #[not_found]
    NotFound,
}

fn main() {
    sycamore::render(|cx| {
        provide_context(cx, UserStore::load());
        provide_context(cx, PositionStore::new());
        provide_context(cx, DialogStore::new());
        provide_context(cx, Notices::new());

        view! {
            cx,
            Router(
                integration=HistoryIntegration::new(),
                view=|cx, route: &ReadSignal<AppRoutes>| {
                    view! {
                        cx,
                        (match route.get().as_ref() {
                            AppRoutes::Index => view! {cx, Landing() },
                            AppRoutes::Verify => view! {cx, VerifyPage() },
                            AppRoutes::Admin => view! {cx, AdminRedirect() },
                            AppRoutes::NotFound => view! {cx,
                                section(class="hero is-fullheight"){
                                    div(class="hero-body"){
                                        div(class="container has-text-centered"){
                                            h1(class="title"){ "Page not found" }
                                            a(class="button is-primary mt-4", href="/"){ "Back home" }
                                        }
                                    }
                                }
                            },
                        })
                    }
                }
            )
        }
    })
}
