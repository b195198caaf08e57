//! Опции поверхности графика и определений серий.
//!
//! Структуры сериализуются в JS-объекты через serde-wasm-bindgen;
//! форма полей повторяет то, что ожидает Lightweight Charts.

use serde::Serialize;

/// Фиксированная высота поверхности графика, px.
pub const CHART_HEIGHT: i32 = 500;

// Light theme of the chart surface. Presentation values only.
const BACKGROUND_COLOR: &str = "#ffffff";
const TEXT_COLOR: &str = "#222";
const GRID_LINE_COLOR: &str = "#eee";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub layout: LayoutOptions,
    pub grid: GridOptions,
}

impl ChartOptions {
    /// Surface options for the given container width.
    pub fn for_width(width: i32) -> Self {
        Self {
            width,
            height: CHART_HEIGHT,
            layout: LayoutOptions {
                background: BackgroundOptions { color: BACKGROUND_COLOR },
                text_color: TEXT_COLOR,
            },
            grid: GridOptions {
                vert_lines: GridLineOptions { color: GRID_LINE_COLOR },
                horz_lines: GridLineOptions { color: GRID_LINE_COLOR },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub background: BackgroundOptions,
    pub text_color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackgroundOptions {
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub vert_lines: GridLineOptions,
    pub horz_lines: GridLineOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridLineOptions {
    pub color: &'static str,
}

/// Series definition passed to `addSeries`.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl SeriesDefinition {
    pub fn candlestick() -> Self {
        Self { kind: "Candlestick" }
    }

    pub fn line() -> Self {
        Self { kind: "Line" }
    }
}

/// Width-only options re-applied when the container becomes visible.
#[derive(Debug, Clone, Serialize)]
pub struct ResizeOptions {
    pub width: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_options_shape() {
        let value = serde_json::to_value(ChartOptions::for_width(640)).unwrap();
        assert_eq!(value["width"], 640);
        assert_eq!(value["height"], 500);
        assert_eq!(value["layout"]["background"]["color"], "#ffffff");
        assert_eq!(value["layout"]["textColor"], "#222");
        assert_eq!(value["grid"]["vertLines"]["color"], "#eee");
        assert_eq!(value["grid"]["horzLines"]["color"], "#eee");
    }

    #[test]
    fn test_series_definitions() {
        let candles = serde_json::to_value(SeriesDefinition::candlestick()).unwrap();
        assert_eq!(candles["type"], "Candlestick");
        let line = serde_json::to_value(SeriesDefinition::line()).unwrap();
        assert_eq!(line["type"], "Line");
    }

    #[test]
    fn test_resize_options_shape() {
        let value = serde_json::to_value(ResizeOptions { width: 320 }).unwrap();
        assert_eq!(value, serde_json::json!({"width": 320}));
    }
}
