use sycamore::prelude::*;

use crate::referrals_table::ReferralsPanel;
use crate::stores::UserStore;
use crate::waitlist_table::GlobalTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Global,
    Referrals,
}

/// Tabbed section under the fold: the global list for everyone, the
/// referrals tab only once an account is loaded. A reset while the
/// referrals tab is open falls back to the global list.
#[component]
pub fn RankedTables<G: Html>(cx: Scope) -> View<G> {
    let users = use_context::<UserStore>(cx);

    let active = create_signal(cx, Tab::Global);
    let user = users.user().clone();
    let has_account = create_selector(cx, move || !user.get().is_anonymous());
    let shown = create_selector(cx, move || match (*active.get(), *has_account.get()) {
        (Tab::Referrals, true) => Tab::Referrals,
        _ => Tab::Global,
    });

    view! {
        cx,
        section(class="section"){
            div(class="container"){
                div(class="tabs is-centered is-boxed"){
                    ul{
                        li(class=(
                            if *shown.get() == Tab::Global {
                                "is-active"
                            } else {
                                ""
                            }
                        )){
                            a(on:click=|_| active.set(Tab::Global)){ "Global List" }
                        }
                        (if *has_account.get() {
                            view! {cx,
                                li(class=(
                                    if *shown.get() == Tab::Referrals {
                                        "is-active"
                                    } else {
                                        ""
                                    }
                                )){
                                    a(on:click=|_| active.set(Tab::Referrals)){ "My Referrals" }
                                }
                            }
                        } else {
                            view! {cx, }
                        })
                    }
                }
                (match *shown.get() {
                    Tab::Global => view! {cx, GlobalTable() },
                    Tab::Referrals => view! {cx, ReferralsPanel() },
                })
            }
        }
    }
}
