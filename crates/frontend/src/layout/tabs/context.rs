//! TabsContext - активный таб и его персистентность.

use super::keys;
use crate::shared::storage;
use leptos::logging::warn;
use leptos::prelude::*;

/// Глобальный контекст переключения табов.
///
/// Ровно один таб активен в любой момент; видимость панелей и подсветка
/// кнопок выводятся из одного сигнала. Выбор переживает перезагрузку
/// страницы через localStorage.
#[derive(Clone, Copy)]
pub struct TabsContext {
    pub active: RwSignal<String>,
}

impl TabsContext {
    /// Restore the persisted selection, falling back to the default tab.
    pub fn restore() -> Self {
        let saved = storage::load_active_tab();
        let initial = keys::resolve_startup_tab(saved.as_deref());
        Self {
            active: RwSignal::new(initial.to_string()),
        }
    }

    /// Activate the named tab and persist the selection.
    ///
    /// Unknown keys are a logged no-op and never disturb the current
    /// selection. Re-activating the already active tab skips the signal
    /// write (no spurious effect re-runs) and overwrites the stored value
    /// with itself.
    pub fn activate(&self, key: &str) {
        if !keys::is_known_tab(key) {
            warn!("activate: unknown tab key '{}'", key);
            return;
        }
        if self.active.with_untracked(|active| active != key) {
            self.active.set(key.to_string());
        }
        storage::save_active_tab(key);
    }

    /// Reactive check used by panes and tab buttons.
    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }
}
