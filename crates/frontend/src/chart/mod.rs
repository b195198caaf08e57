//! Charting widget wrapper поверх Lightweight Charts.
//!
//! Содержит:
//! - `bindings` - wasm-bindgen биндинги к глобалу `LightweightCharts`
//! - `options` - опции поверхности и серий (serde → JS)
//! - `data` - источники данных графика (static / remote)
//! - `api` - HTTP-клиент `GET /ohlc`
//! - `session` - ChartSession: one-shot инициализация и ресайз
//! - `component` - Leptos-компонент панели графика

pub mod api;
pub mod bindings;
pub mod component;
pub mod data;
pub mod options;
pub mod session;

pub use component::ChartPane;
pub use data::{default_source, demo_candles, ChartData, ChartDataSource};
