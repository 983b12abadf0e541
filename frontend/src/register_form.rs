use common::{validate, ApiError};
use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::landing;
use crate::query;
use crate::stores::{DialogStore, Notices, PositionStore, UserStore};

/// Name, email and an optional referral code (pre-filled from `?refCd=`
/// on invite links). A 201 closes the dialog and announces the
/// verification email; a 400 shows the server's own validation message.
#[component]
pub fn RegisterForm<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let positions = use_context::<PositionStore>(cx);
    let dialog = use_context::<DialogStore>(cx);
    let notices = use_context::<Notices>(cx);

    let name = create_signal(cx, String::new());
    let email = create_signal(cx, users.current().email);
    let referral_code = create_signal(
        cx,
        query::referral_code(&query::current_search()).unwrap_or_default(),
    );
    let name_error = create_signal(cx, String::new());
    let email_error = create_signal(cx, String::new());

    // Keep the email field in step with the one typed into the lookup
    // form; the dialog opens right after a lookup miss.
    let user = users.user().clone();
    create_effect(cx, move || {
        email.set(user.get().email.clone());
    });

    let submit = move |_| {
        let typed_name = name.get_untracked().trim().to_string();
        let typed_email = email.get_untracked().trim().to_string();

        let mut blocked = false;
        match validate::name(&typed_name) {
            Ok(()) => name_error.set(String::new()),
            Err(err) => {
                name_error.set(err.to_string());
                blocked = true;
            }
        }
        match validate::email(&typed_email) {
            Ok(()) => email_error.set(String::new()),
            Err(err) => {
                email_error.set(err.to_string());
                blocked = true;
            }
        }
        if blocked {
            return;
        }

        spawn_local_scoped(cx, async move {
            let code = referral_code.get_untracked().trim().to_string();
            let code = (!code.is_empty()).then_some(code);
            match users.register(&typed_name, &typed_email, code.as_deref()).await {
                Ok(()) => {
                    dialog.set(false);
                    notices.info("Registered! A verification email is on its way.");
                    landing::refresh_position(users, positions, notices).await;
                }
                Err(ApiError::BadRequest(message)) => {
                    notices.danger(message);
                }
                Err(err) => {
                    log!(format!("registration failed: {err}"));
                    notices.danger("Registration failed. Please try again later.");
                }
            }
        });
    };

    view! {
        cx,
        div(class="field"){
            div(class="control"){
                input(class="input", type="text", placeholder="My name is...", bind:value=name)
            }
            (if name_error.get().is_empty() {
                view! {cx, }
            } else {
                view! {cx, p(class="help is-danger"){ (name_error.get()) } }
            })
        }
        div(class="field"){
            div(class="control"){
                input(class="input", type="text", placeholder="youremail@domain.com", bind:value=email)
            }
            (if email_error.get().is_empty() {
                view! {cx, }
            } else {
                view! {cx, p(class="help is-danger"){ (email_error.get()) } }
            })
        }
        div(class="field"){
            div(class="control"){
                input(class="input", type="text", placeholder="Referral code (optional)", bind:value=referral_code)
            }
        }
        button(class="button is-primary is-fullwidth mt-3", on:click=submit){
            "Register"
        }
    }
}
