//! Application Shell - корневой layout приложения
//!
//! Содержит `AppShell`: шапка, полоса табов и панели контента.
//! Панели создаются один раз при монтировании; переключение табов
//! только скрывает/показывает их.

use crate::layout::tabs::registry::render_pane_content;
use crate::layout::tabs::{keys, TabBar, TabPane};
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Backtest Workbench"</h1>
            </header>
            <TabBar />
            <main class="app-main">
                {keys::DECLARED_TABS
                    .iter()
                    .map(|tab| {
                        view! {
                            <TabPane tab_key=tab.key>
                                {render_pane_content(tab.key)}
                            </TabPane>
                        }
                    })
                    .collect_view()}
            </main>
        </div>
    }
}
