use common::paging;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct PaginationProps<'a> {
    pub page: &'a Signal<u32>,
    pub total_pages: &'a ReadSignal<u32>,
}

/// Windowed page strip: at most three page links around the current
/// page, with Previous/Next clamped so no out-of-range page is ever
/// requested.
#[component]
pub fn Pagination<'a, G: Html>(cx: Scope<'a>, props: PaginationProps<'a>) -> View<G> {
    let page = props.page;
    let total_pages = props.total_pages;
    let links = create_memo(cx, move || paging::window(*total_pages.get(), *page.get()));

    view! {
        cx,
        nav(class="pagination is-centered mt-4", role="navigation"){
            a(class="pagination-previous", on:click=move |_| {
                page.set(paging::prev(*page.get_untracked()));
            }){
                "Previous"
            }
            a(class="pagination-next", on:click=move |_| {
                page.set(paging::next(*page.get_untracked(), *total_pages.get_untracked()));
            }){
                "Next"
            }
            ul(class="pagination-list"){
                Indexed(
                    iterable=links,
                    view=move |cx, number| view! {cx,
                        li{
                            a(
                                class=(
                                    if *page.get() == number {
                                        "pagination-link is-current"
                                    } else {
                                        "pagination-link"
                                    }
                                ),
                                on:click=move |_| page.set(number)
                            ){
                                (number)
                            }
                        }
                    }
                )
            }
        }
    }
}
