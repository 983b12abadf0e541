use sycamore::prelude::*;

use crate::stores::{PositionStore, UserStore};

/// "You are at position N" — hidden until a non-zero rank has been
/// loaded for the current account.
#[component]
pub fn PositionBanner<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let positions = use_context::<PositionStore>(cx);

    let user = users.user().clone();
    let position = positions.position().clone();
    let visible = create_selector(cx, move || {
        !user.get().is_anonymous() && *position.get() > 0
    });
    let position = positions.position().clone();
    let rank = create_selector(cx, move || position.get().to_string());

    view! {
        cx,
        (if *visible.get() {
            view! {cx,
                div(class="has-text-centered mt-6"){
                    p(class="title is-3"){
                        "🎉 Hurray! You are at position " (rank.get())
                    }
                    p(class="subtitle is-6 mt-2"){
                        "scroll down for more"
                    }
                }
            }
        } else {
            view! {cx, }
        })
    }
}
