use sycamore::prelude::*;

use crate::stores::{Notices, Tone};

/// Fixed overlay rendering the notification store, newest at the bottom,
/// each with its own dismiss button.
#[component]
pub fn NoticeOverlay<G: Html>(cx: Scope) -> View<G> {
    let notices = use_context::<Notices>(cx);
    let items_signal = notices.items().clone();
    let items = create_memo(cx, move || (*items_signal.get()).clone());

    view! {
        cx,
        div(class="notice-overlay"){
            Indexed(
                iterable=items,
                view=move |cx, notice| {
                    let id = notice.id;
                    let class = match notice.tone {
                        Tone::Info => "notification is-success is-light",
                        Tone::Danger => "notification is-danger is-light",
                    };
                    let text = notice.text;
                    view! {cx,
                        div(class=class){
                            button(class="delete", on:click=move |_| notices.dismiss(id)){}
                            (text.clone())
                        }
                    }
                }
            )
        }
    }
}
