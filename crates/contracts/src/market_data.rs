//! Типы рыночных данных, разделяемые с бэкендом `/ohlc`.

use serde::{Deserialize, Serialize};

/// Одна свеча OHLC. `time` — UNIX timestamp в секундах.
///
/// Времена серии должны монотонно не убывать — этого требует отрисовка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Точка вспомогательной серии (SMA).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: i64,
    pub value: f64,
}

/// Тело ответа `GET /ohlc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcHistoryResponse {
    pub ohlc: Vec<OhlcPoint>,
    pub sma: Vec<SeriesPoint>,
}

/// Период, которым строится вспомогательная серия SMA.
pub const SMA_PERIOD: usize = 5;

/// Simple moving average over closes.
///
/// Each output point is stamped with the time of its window's last candle;
/// leading incomplete windows produce no points, so the result's time domain
/// is a suffix of the input's. Values are rounded to 2 decimal places.
pub fn simple_moving_average(points: &[OhlcPoint], period: usize) -> Vec<SeriesPoint> {
    if period == 0 || points.len() < period {
        return Vec::new();
    }
    points
        .windows(period)
        .map(|window| {
            let sum: f64 = window.iter().map(|p| p.close).sum();
            SeriesPoint {
                time: window[period - 1].time,
                value: round2(sum / period as f64),
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, close: f64) -> OhlcPoint {
        OhlcPoint {
            time,
            open: close,
            high: close,
            low: close,
            close,
        }
    }

    #[test]
    fn test_sma_window_alignment() {
        let points: Vec<OhlcPoint> = (0..7).map(|i| candle(i * 60, (i + 1) as f64)).collect();
        let sma = simple_moving_average(&points, 5);

        // 7 candles, period 5 -> 3 windows; each stamped with the window's last time
        assert_eq!(sma.len(), 3);
        assert_eq!(sma[0], SeriesPoint { time: 240, value: 3.0 });
        assert_eq!(sma[1], SeriesPoint { time: 300, value: 4.0 });
        assert_eq!(sma[2], SeriesPoint { time: 360, value: 5.0 });
    }

    #[test]
    fn test_sma_rounds_to_two_decimals() {
        let points = vec![candle(0, 1.0), candle(60, 2.0), candle(120, 2.0)];
        let sma = simple_moving_average(&points, 3);
        assert_eq!(sma, vec![SeriesPoint { time: 120, value: 1.67 }]);
    }

    #[test]
    fn test_sma_short_input_is_empty() {
        let points: Vec<OhlcPoint> = (0..4).map(|i| candle(i, 100.0)).collect();
        assert!(simple_moving_average(&points, 5).is_empty());
        assert!(simple_moving_average(&[], 5).is_empty());
        assert!(simple_moving_average(&points, 0).is_empty());
    }

    #[test]
    fn test_response_deserializes_documented_shape() {
        let body = r#"{
            "ohlc": [
                {"time": 1704067200, "open": 100.0, "high": 105.0, "low": 98.0, "close": 102.0},
                {"time": 1704153600, "open": 102.0, "high": 108.0, "low": 101.0, "close": 107.0}
            ],
            "sma": [
                {"time": 1704153600, "value": 104.5}
            ]
        }"#;
        let response: OhlcHistoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.ohlc.len(), 2);
        assert_eq!(response.ohlc[0].time, 1704067200);
        assert_eq!(response.ohlc[1].close, 107.0);
        assert_eq!(response.sma, vec![SeriesPoint { time: 1704153600, value: 104.5 }]);
    }

    #[test]
    fn test_point_roundtrip_keeps_field_names() {
        let value = serde_json::to_value(candle(42, 10.0)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"time": 42, "open": 10.0, "high": 10.0, "low": 10.0, "close": 10.0})
        );
    }
}
