use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::email_form::EmailForm;
use crate::navbar::NavBar;
use crate::notices::NoticeOverlay;
use crate::position_banner::PositionBanner;
use crate::register_dialog::RegisterDialog;
use crate::stores::{Notices, PositionStore, UserStore};
use crate::tables::RankedTables;
use crate::verify_alert::VerifyAlert;

/// The main page. Owns the session lifecycle: re-syncs a persisted
/// profile once at mount, and collapses to the anonymous sentinel when
/// the stored identity no longer resolves server-side.
#[component]
pub fn Landing<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let positions = use_context::<PositionStore>(cx);
    let notices = use_context::<Notices>(cx);

    spawn_local_scoped(cx, async move {
        sync_session(users, positions, notices).await;
    });

    view! {
        cx,
        NoticeOverlay()
        RegisterDialog()
        NavBar()
        section(class="hero is-medium"){
            div(class="hero-body has-text-centered"){
                VerifyAlert()
                p(class="title is-1 mt-5"){
                    "Join the waitlist!"
                }
                p(class="subtitle mt-2 mb-5"){
                    "Sign up with your email and invite friends to move up."
                }
                div(class="is-flex is-justify-content-center"){
                    EmailForm()
                }
                PositionBanner()
            }
        }
        RankedTables()
    }
}

/// Refresh a restored profile against the server. The client never
/// advances the verification state itself; it only reflects what the
/// server reports here. A failed refresh means the stored identity is
/// gone, so the session resets instead of keeping a stale profile.
pub async fn sync_session(users: &UserStore, positions: &PositionStore, notices: &Notices) {
    if users.current().is_anonymous() {
        return;
    }
    match users.refresh().await {
        Ok(()) => refresh_position(users, positions, notices).await,
        Err(err) => {
            log!(format!("profile refresh failed: {err}"));
            notices.danger("Could not load your profile. Please sign in again.");
            users.reset();
            positions.clear();
        }
    }
}

/// Re-fetch the rank for the loaded account. Called explicitly after
/// every operation that may change the user id or verification flag.
pub async fn refresh_position(users: &UserStore, positions: &PositionStore, notices: &Notices) {
    let user = users.current();
    if user.is_anonymous() {
        return;
    }
    if let Err(err) = positions.fetch(user.id).await {
        log!(format!("position fetch failed: {err}"));
        notices.danger("Could not fetch your waitlist position. Please try again!");
    }
}
