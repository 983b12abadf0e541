use common::{validate, ApiError};
use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::landing;
use crate::stores::{DialogStore, Notices, PositionStore, UserStore};

/// The entry form: one email field. A known email loads the profile and
/// refreshes the rank; an unknown one hands the typed email over to the
/// registration dialog. Invalid input never reaches the network.
#[component]
pub fn EmailForm<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let positions = use_context::<PositionStore>(cx);
    let dialog = use_context::<DialogStore>(cx);
    let notices = use_context::<Notices>(cx);

    let email = create_signal(cx, users.current().email);
    let field_error = create_signal(cx, String::new());

    let submit = move |_| {
        let typed = email.get_untracked().trim().to_string();
        if let Err(err) = validate::email(&typed) {
            field_error.set(err.to_string());
            return;
        }
        field_error.set(String::new());
        spawn_local_scoped(cx, async move {
            match users.fetch_by_email(&typed).await {
                Ok(()) => landing::refresh_position(users, positions, notices).await,
                Err(ApiError::NotFound) => {
                    notices.danger("No account found for that email. Register to join!");
                    users.set_provisional_email(&typed);
                    dialog.set(true);
                }
                Err(err) => {
                    log!(format!("user lookup failed: {err}"));
                    notices.danger("An error occurred. Please try again later.");
                }
            }
        });
    };

    view! {
        cx,
        div(class="field has-addons is-justify-content-center"){
            div(class="control"){
                input(class="input", type="text", placeholder="Enter your email here", bind:value=email)
            }
            div(class="control"){
                button(class="button is-primary", on:click=submit){
                    "Continue"
                }
            }
        }
        (if field_error.get().is_empty() {
            view! {cx, }
        } else {
            view! {cx,
                p(class="help is-danger"){
                    (field_error.get())
                }
            }
        })
    }
}
