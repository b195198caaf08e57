//! Tab content registry - единственный источник правды для маппинга tab key → View.

use super::keys;
use crate::chart::{default_source, ChartPane};
use crate::pages::{LoadPage, PositionsPage, ReportPage};
use leptos::logging::log;
use leptos::prelude::*;

/// Возвращает View контента для данного ключа таба.
pub fn render_pane_content(key: &'static str) -> AnyView {
    match key {
        keys::TAB_LOAD => view! { <LoadPage /> }.into_any(),
        keys::TAB_REPORT => view! { <ReportPage /> }.into_any(),
        keys::TAB_POSITIONS => view! { <PositionsPage /> }.into_any(),
        keys::TAB_CHART => view! { <ChartPane source=default_source() /> }.into_any(),
        _ => {
            log!("⚠️ Unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
