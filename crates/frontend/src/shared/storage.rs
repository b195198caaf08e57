use web_sys::window;

const ACTIVE_TAB_KEY: &str = "activeTab";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the active tab selection to localStorage
pub fn save_active_tab(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACTIVE_TAB_KEY, key);
    }
}

/// Get the persisted tab selection from localStorage
pub fn load_active_tab() -> Option<String> {
    get_local_storage()?.get_item(ACTIVE_TAB_KEY).ok()?
}
