//! TabPane component - wrapper для отображения контента таба
//!
//! Управляет видимостью через CSS class `hidden`; сам контент
//! создаётся один раз и живёт до конца сессии страницы.

use super::context::TabsContext;
use leptos::prelude::*;

#[component]
pub fn TabPane(tab_key: &'static str, children: Children) -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    // Check if this pane's tab is active - this closure will be reactive
    let is_active = move || tabs.is_active(tab_key);

    view! {
        <div
            class="tab-pane"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {children()}
        </div>
    }
}
