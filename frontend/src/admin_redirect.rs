use gloo_console::log;
use sycamore::prelude::*;

use crate::config;

/// `/admin/` renders nothing; it only forwards the browser to the admin
/// panel next to the configured API base.
#[component]
pub fn AdminRedirect<G: Html>(cx: Scope) -> View<G> {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(&config::admin_url()) {
            log!(format!("admin redirect failed: {err:?}"));
        }
    }
    view! { cx, }
}
