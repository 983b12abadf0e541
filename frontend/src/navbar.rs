use sycamore::prelude::*;

use crate::stores::{PositionStore, UserStore};

/// Brand bar. When an account is loaded it shows the display name with a
/// "Start over" action that resets the session back to anonymous.
#[component]
pub fn NavBar<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let positions = use_context::<PositionStore>(cx);

    let user = users.user().clone();
    let display_name = create_selector(cx, move || user.get().name.clone());
    let user = users.user().clone();
    let has_account = create_selector(cx, move || !user.get().is_anonymous());

    // Position is keyed to the loaded user, so it goes too.
    let reset = move |_| {
        users.reset();
        positions.clear();
    };

    view! {
        cx,
        nav(class="navbar", role="navigation"){
            div(class="navbar-brand"){
                a(class="navbar-item", href="/"){
                    strong{ "SpotHot" }
                }
            }
            div(class="navbar-end"){
                (if *has_account.get() {
                    view! {cx,
                        div(class="navbar-item has-dropdown is-hoverable"){
                            a(class="navbar-link", href="#"){
                                (display_name.get())
                            }
                            div(class="navbar-dropdown is-right"){
                                a(class="navbar-item", on:click=reset){
                                    "Start over"
                                }
                            }
                        }
                    }
                } else {
                    view! {cx, }
                })
            }
        }
    }
}
