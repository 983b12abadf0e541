use sycamore::prelude::*;

use crate::register_form::RegisterForm;
use crate::stores::DialogStore;

/// Modal hosting the registration form. Opened by a lookup miss, closed
/// by a successful registration, the background click or the corner
/// button.
#[component]
pub fn RegisterDialog<G: Html>(cx: Scope) -> View<G> {
    let dialog = use_context::<DialogStore>(cx);
    let open = dialog.register_open().clone();
    let active = create_selector(cx, move || *open.get());

    view! {
        cx,
        div(class=(
                if *active.get() {
                    "modal is-active"
                } else {
                    "modal"
                }
            )
        ){
            div(class="modal-background", on:click=|_| dialog.set(false)){}
            div(class="modal-card"){
                header(class="modal-card-head"){
                    p(class="modal-card-title"){ "Register" }
                    button(class="delete", on:click=|_| dialog.set(false)){}
                }
                section(class="modal-card-body"){
                    p(class="mb-4"){ "Register to get started" }
                    RegisterForm()
                }
            }
        }
    }
}
