use common::ApiError;
use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::stores::{Notices, UserStore};

/// Banner shown while the loaded account is still unverified, with a
/// resend action. Resending never mutates state; the outcome is a
/// notice only.
#[component]
pub fn VerifyAlert<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let notices = use_context::<Notices>(cx);

    let user = users.user().clone();
    let visible = create_selector(cx, move || {
        let user = user.get();
        !user.is_anonymous() && !user.is_verified
    });

    let resend = move |_| {
        spawn_local_scoped(cx, async move {
            let email = users.current().email;
            match users.resend_verification(&email).await {
                Ok(()) => notices.info("Verification email sent!"),
                Err(ApiError::BadRequest(message)) => notices.danger(message),
                Err(err) => {
                    log!(format!("resend failed: {err}"));
                    notices.danger("Could not send the verification email. Please try again.");
                }
            }
        });
    };

    view! {
        cx,
        (if *visible.get() {
            view! {cx,
                div(class="notification is-warning is-light has-text-centered"){
                    strong{ "Verify your email! " }
                    "Please verify your email to continue. "
                    button(class="button is-small is-warning ml-3", on:click=resend){
                        "Resend mail"
                    }
                }
            }
        } else {
            view! {cx, }
        })
    }
}
