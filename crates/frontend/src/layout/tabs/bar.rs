//! Полоса переключения табов.

use super::context::TabsContext;
use super::keys::{self, TabDef};
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: TabDef) -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    let is_active = Memo::new(move |_| tabs.is_active(tab.key));

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        tabs.activate(tab.key);
    };

    view! {
        <a href="#" class="tab" class:active=is_active data-tab=tab.key on:click=on_click>
            {tab.label}
        </a>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav id="tabs" class="tabs-bar">
            {keys::DECLARED_TABS
                .iter()
                .copied()
                .map(|tab| view! { <TabButton tab=tab /> })
                .collect_view()}
        </nav>
    }
}
