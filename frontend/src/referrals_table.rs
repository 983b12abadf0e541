use common::paging;
use common::user::ANONYMOUS_ID;
use common::wire::ReferralEntry;
use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::api;
use crate::pagination::Pagination;
use crate::refer_panel::ReferPanel;
use crate::stores::{Notices, UserStore};

/// The signed-in user's referrals: invite panel on top, one page of
/// referees with their verification state underneath.
#[component]
pub fn ReferralsPanel<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);
    let notices = use_context::<Notices>(cx);

    let page = create_signal(cx, 1u32);
    let total_pages = create_signal(cx, 0u32);
    let rows = create_signal(cx, Vec::<ReferralEntry>::new());

    create_effect(cx, move || {
        let current = *page.get();
        let user_id = users.current().id;
        spawn_local_scoped(cx, async move {
            // The tab is only reachable with an account loaded; a reset
            // mid-flight just makes this a no-op.
            if user_id == ANONYMOUS_ID {
                return;
            }
            match api::referrals(user_id, current).await {
                Ok(listing) => {
                    total_pages.set(listing.total_pages);
                    rows.set(listing.results);
                }
                Err(err) => {
                    log!(format!("referrals fetch failed: {err}"));
                    notices.danger("Could not load your referrals. Please try again!");
                }
            }
        });
    });

    let numbered = create_memo(cx, move || {
        let current = *page.get();
        rows.get()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, entry)| (paging::row_number(current, index), entry))
            .collect::<Vec<_>>()
    });
    let empty = create_selector(cx, move || rows.get().is_empty());

    view! {
        cx,
        ReferPanel()
        table(class="table is-fullwidth is-striped is-hoverable"){
            thead{
                tr{
                    th(class="has-text-centered"){ "S. No." }
                    th(class="has-text-centered"){ "User" }
                    th(class="has-text-centered"){ "Verification" }
                }
            }
            tbody{
                (if *empty.get() {
                    view! {cx,
                        tr{
                            td(class="has-text-centered", colspan="3"){
                                strong{ "No entries yet!" }
                            }
                        }
                    }
                } else {
                    view! {cx,
                        Indexed(
                            iterable=numbered,
                            view=|cx, (serial, entry)| {
                                let name = entry.referee.name;
                                let status = if entry.referee.is_verified {
                                    "Verified"
                                } else {
                                    "Not Verified"
                                };
                                view! {cx,
                                    tr{
                                        td(class="has-text-centered"){ (serial) }
                                        td(class="has-text-centered"){ (name.clone()) }
                                        td(class="has-text-centered"){ strong{ (status) } }
                                    }
                                }
                            }
                        )
                    }
                })
            }
        }
        Pagination(page=page, total_pages=total_pages)
    }
}
