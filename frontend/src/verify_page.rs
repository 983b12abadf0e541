use common::ApiError;
use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};
use sycamore_router::navigate;

use crate::api;
use crate::navbar::NavBar;
use crate::query;

/// Standalone page behind the emailed link: submits `?code=` once and
/// shows the server's message verbatim, success or not. No store is
/// touched; the refreshed profile picks the new state up on the next
/// visit to the main page.
#[component]
pub fn VerifyPage<G: Html>(cx: Scope) -> View<G> {
    let message = create_signal(cx, String::from("Verifying..."));

    spawn_local_scoped(cx, async move {
        match query::verification_code(&query::current_search()) {
            None => message.set("Missing verification code".to_string()),
            Some(code) => match api::verify_email(&code).await {
                Ok(text) => message.set(text),
                Err(ApiError::BadRequest(text)) => message.set(text),
                Err(err) => {
                    log!(format!("verification failed: {err}"));
                    message.set("Verification failed. Please try again later.".to_string());
                }
            },
        }
    });

    view! {
        cx,
        NavBar()
        section(class="hero is-fullheight-with-navbar"){
            div(class="hero-body"){
                div(class="container has-text-centered"){
                    h1(class="title is-2"){
                        (message.get())
                    }
                    button(class="button is-primary mt-5", on:click=|_| navigate("/")){
                        "Return"
                    }
                }
            }
        }
    }
}
