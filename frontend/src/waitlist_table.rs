use common::paging;
use common::wire::WaitlistEntry;
use gloo_console::log;
use sycamore::{futures::spawn_local_scoped, prelude::*};

use crate::api;
use crate::pagination::Pagination;
use crate::stores::Notices;

/// The global ranked listing: one server page at a time, serial numbers
/// computed from the page index, windowed page strip underneath.
#[component]
pub fn GlobalTable<G: Html>(cx: Scope) -> View<G> {
    let notices = use_context::<Notices>(cx);

    let page = create_signal(cx, 1u32);
    let total_pages = create_signal(cx, 0u32);
    let rows = create_signal(cx, Vec::<WaitlistEntry>::new());

    create_effect(cx, move || {
        let current = *page.get();
        spawn_local_scoped(cx, async move {
            match api::global_waitlist(current).await {
                Ok(listing) => {
                    total_pages.set(listing.total_pages);
                    rows.set(listing.results);
                }
                Err(err) => {
                    log!(format!("global waitlist fetch failed: {err}"));
                    notices.danger("Could not load the waitlist. Please try again!");
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
        table(class="table is-fullwidth is-striped is-hoverable"){
            thead{
                tr{
                    th(class="has-text-centered"){ "S. No." }
                    th(class="has-text-centered"){ "Position" }
                    th(class="has-text-centered"){ "User" }
                }
            }
            tbody{
                (if *empty.get() {
                    view! {cx,
                        tr{
                            td(class="has-text-centered", colspan="3"){
                                strong{ "No entries yet" }
                            }
                        }
                    }
                } else {
                    view! {cx,
                        Indexed(
                            iterable=numbered,
                            view=|cx, (serial, entry)| {
                                let name = entry.user;
                                view! {cx,
                                    tr{
                                        td(class="has-text-centered"){ (serial) }
                                        td(class="has-text-centered"){ strong{ (entry.position) } }
                                        td(class="has-text-centered"){ (name.clone()) }
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
