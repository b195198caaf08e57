//! Панель графика.
//!
//! ChartSession создаётся лениво при первом показе таба графика;
//! каждый следующий показ только ресайзит поверхность. Сигналом
//! видимости служит активный таб из TabsContext.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::tabs::{keys, TabsContext};

use super::data::ChartDataSource;
use super::session::ChartSession;

#[component]
pub fn ChartPane(source: ChartDataSource) -> impl IntoView {
    let tabs = leptos::context::use_context::<TabsContext>()
        .expect("TabsContext context not found");

    let container_ref = NodeRef::<Div>::new();
    let session = Rc::new(RefCell::new(ChartSession::new()));

    Effect::new(move |_| {
        if !tabs.is_active(keys::TAB_CHART) {
            return;
        }
        let Some(container) = container_ref.get() else {
            return;
        };

        if session.borrow().is_initialized() {
            // Subsequent activations: the width may have changed while hidden.
            if let Err(e) = session.borrow().on_container_visible(&container) {
                log!("Failed to resize chart: {}", e);
            }
            return;
        }

        // First activation: create the surface, then load data into it.
        // The session latch is taken here, so a repeated activation can
        // neither re-create the surface nor re-fetch.
        if let Err(e) = session.borrow_mut().initialize(&container) {
            log!("Failed to initialize chart: {}", e);
            return;
        }

        let session = Rc::clone(&session);
        let source = source.clone();
        spawn_local(async move {
            match source.load().await {
                Ok(data) => {
                    if let Err(e) = session.borrow().apply_data(&data) {
                        log!("Failed to bind chart data: {}", e);
                    }
                }
                Err(e) => {
                    // Chart stays empty; no retry.
                    log!("Failed to load chart data: {}", e);
                }
            }
        });
    });

    view! { <div class="chart-container" node_ref=container_ref></div> }
}
