//! Биндинги к standalone-сборке Lightweight Charts.
//!
//! Библиотека подключается скриптом в index.html и доступна через глобал
//! `LightweightCharts`; здесь объявлено ровно то подмножество API,
//! которым пользуется ChartSession.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// Chart surface handle (`IChartApi`).
    pub type ChartApi;

    /// Series handle (`ISeriesApi`).
    pub type SeriesApi;

    /// Time scale handle (`ITimeScaleApi`).
    pub type TimeScaleApi;

    // Throws when the standalone script is not loaded
    #[wasm_bindgen(catch, js_namespace = LightweightCharts, js_name = createChart)]
    pub fn create_chart(container: &HtmlElement, options: &JsValue) -> Result<ChartApi, JsValue>;

    #[wasm_bindgen(method, js_name = addSeries)]
    pub fn add_series(this: &ChartApi, options: &JsValue) -> SeriesApi;

    #[wasm_bindgen(method, js_name = applyOptions)]
    pub fn apply_options(this: &ChartApi, options: &JsValue);

    #[wasm_bindgen(method, js_name = timeScale)]
    pub fn time_scale(this: &ChartApi) -> TimeScaleApi;

    #[wasm_bindgen(method, js_name = setData)]
    pub fn set_data(this: &SeriesApi, data: &JsValue);

    #[wasm_bindgen(method, js_name = fitContent)]
    pub fn fit_content(this: &TimeScaleApi);
}
