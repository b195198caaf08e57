//! Объявленный набор табов - единственный источник правды для ключей
//! и заголовков. Набор фиксирован на этапе компиляции.

pub const TAB_LOAD: &str = "load";
pub const TAB_REPORT: &str = "report";
pub const TAB_POSITIONS: &str = "positions";
pub const TAB_CHART: &str = "chart";

/// Таб, который показывается, когда ничего валидного не сохранено.
pub const DEFAULT_TAB: &str = TAB_LOAD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDef {
    pub key: &'static str,
    pub label: &'static str,
}

/// Порядок элементов определяет порядок кнопок в полосе табов.
pub const DECLARED_TABS: &[TabDef] = &[
    TabDef { key: TAB_LOAD, label: "Загрузка данных" },
    TabDef { key: TAB_REPORT, label: "Отчёт" },
    TabDef { key: TAB_POSITIONS, label: "Закрытые позиции" },
    TabDef { key: TAB_CHART, label: "График" },
];

pub fn is_known_tab(key: &str) -> bool {
    DECLARED_TABS.iter().any(|tab| tab.key == key)
}

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &str {
    DECLARED_TABS
        .iter()
        .find(|tab| tab.key == key)
        .map(|tab| tab.label)
        .unwrap_or(key)
}

/// Resolve the tab to show at startup from the persisted selection.
///
/// Unknown and absent values both fall back to the default tab.
pub fn resolve_startup_tab(saved: Option<&str>) -> &'static str {
    saved
        .and_then(|key| DECLARED_TABS.iter().find(|tab| tab.key == key))
        .map(|tab| tab.key)
        .unwrap_or(DEFAULT_TAB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_startup_tab_persisted() {
        assert_eq!(resolve_startup_tab(Some("chart")), "chart");
        assert_eq!(resolve_startup_tab(Some("report")), "report");
        assert_eq!(resolve_startup_tab(Some("load")), "load");
    }

    #[test]
    fn test_resolve_startup_tab_absent_is_default() {
        assert_eq!(resolve_startup_tab(None), "load");
    }

    #[test]
    fn test_resolve_startup_tab_unknown_is_default() {
        assert_eq!(resolve_startup_tab(Some("settings")), "load");
        assert_eq!(resolve_startup_tab(Some("")), "load");
    }

    #[test]
    fn test_is_known_tab() {
        assert!(is_known_tab("load"));
        assert!(is_known_tab("positions"));
        assert!(is_known_tab("chart"));
        assert!(!is_known_tab("unknown"));
    }

    #[test]
    fn test_label_fallback_is_key() {
        assert_eq!(tab_label_for_key("chart"), "График");
        assert_eq!(tab_label_for_key("nope"), "nope");
    }
}
