use crate::app_shell::AppShell;
use crate::layout::tabs::TabsContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Restore the persisted tab selection before anything renders,
    // then provide it to the whole app via context.
    provide_context(TabsContext::restore());

    view! {
        <AppShell />
    }
}
