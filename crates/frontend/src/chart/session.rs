//! ChartSession - владение поверхностью графика.
//!
//! Одна поверхность на контейнер: поле `handles` служит one-shot latch,
//! после первого `initialize` повторные вызовы - no-op.

use web_sys::HtmlElement;

use super::bindings::{self, ChartApi, SeriesApi};
use super::data::ChartData;
use super::options::{ChartOptions, ResizeOptions, SeriesDefinition};

/// JS-handles созданной поверхности.
struct ChartHandles {
    chart: ChartApi,
    candles: SeriesApi,
}

pub struct ChartSession {
    handles: Option<ChartHandles>,
}

impl ChartSession {
    pub fn new() -> Self {
        Self { handles: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.handles.is_some()
    }

    /// Create the chart surface and its candlestick series.
    ///
    /// Width follows the container, height is fixed. No-op when the
    /// surface already exists.
    pub fn initialize(&mut self, container: &HtmlElement) -> Result<(), String> {
        if self.handles.is_some() {
            return Ok(());
        }

        let options = to_js(&ChartOptions::for_width(container.client_width()))?;
        let chart = bindings::create_chart(container, &options)
            .map_err(|e| format!("createChart failed: {:?}", e))?;
        let candles = chart.add_series(&to_js(&SeriesDefinition::candlestick())?);

        self.handles = Some(ChartHandles { chart, candles });
        Ok(())
    }

    /// Bind loaded data to the series.
    ///
    /// Adds the auxiliary line series only when the overlay is non-empty.
    /// No-op while the surface does not exist.
    pub fn apply_data(&self, data: &ChartData) -> Result<(), String> {
        let Some(handles) = &self.handles else {
            return Ok(());
        };

        handles.candles.set_data(&to_js(&data.ohlc)?);
        if !data.sma.is_empty() {
            let line = handles.chart.add_series(&to_js(&SeriesDefinition::line())?);
            line.set_data(&to_js(&data.sma)?);
        }
        handles.chart.time_scale().fit_content();
        Ok(())
    }

    /// Re-apply the container's current width and re-fit the visible range.
    ///
    /// Safe to call repeatedly and before `initialize`: no-op while no
    /// surface exists.
    pub fn on_container_visible(&self, container: &HtmlElement) -> Result<(), String> {
        let Some(handles) = &self.handles else {
            return Ok(());
        };

        let resize = to_js(&ResizeOptions { width: container.client_width() })?;
        handles.chart.apply_options(&resize);
        handles.chart.time_scale().fit_content();
        Ok(())
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<wasm_bindgen::JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| format!("Failed to serialize options: {}", e))
}
