use sycamore::prelude::*;

use crate::config;
use crate::stores::{Notices, UserStore};

/// Referral count and the invite link, with copy-to-clipboard.
#[component]
pub fn ReferPanel<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let notices = use_context::<Notices>(cx);

    let user = users.user().clone();
    let count = create_selector(cx, move || user.get().referral_count);
    let user = users.user().clone();
    let link = create_selector(cx, move || {
        format!("{}/?refCd={}", config::client_url(), user.get().referral_code)
    });

    let copy = move |_| {
        copy_to_clipboard(&link.get_untracked());
        notices.info("Referral link copied!");
    };

    view! {
        cx,
        div(class="box has-text-centered mb-5"){
            p(class="title is-4"){
                "You have " (count.get()) " referrals"
            }
            p(class="subtitle is-6"){
                "Invite more people to climb the global list!"
            }
            div(class="field has-addons is-justify-content-center"){
                div(class="control is-expanded"){
                    input(class="input", type="text", readonly=true, value=(link.get().to_string()))
                }
                div(class="control"){
                    button(class="button is-primary", on:click=copy){
                        "Copy"
                    }
                }
            }
        }
    }
}

fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}
