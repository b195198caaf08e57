//! Источники данных графика.

use contracts::market_data::{simple_moving_average, OhlcPoint, SeriesPoint, SMA_PERIOD};

use super::api;

/// Данные, попадающие в серии графика.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub ohlc: Vec<OhlcPoint>,
    pub sma: Vec<SeriesPoint>,
}

/// Откуда график берёт свои серии.
#[derive(Debug, Clone)]
pub enum ChartDataSource {
    /// Встроенный литеральный набор свечей (демо-режим).
    Static(Vec<OhlcPoint>),
    /// `GET url` → `OhlcHistoryResponse`.
    Remote { url: String },
}

impl ChartDataSource {
    /// Load the series for this source.
    ///
    /// The static variant never fails; the remote variant surfaces network
    /// and parse failures as the error string.
    pub async fn load(&self) -> Result<ChartData, String> {
        match self {
            ChartDataSource::Static(points) => Ok(ChartData::from_candles(points.clone())),
            ChartDataSource::Remote { url } => {
                let response = api::fetch_ohlc(url).await?;
                Ok(ChartData {
                    ohlc: response.ohlc,
                    sma: response.sma,
                })
            }
        }
    }
}

impl ChartData {
    /// Series data for an embedded candle set.
    ///
    /// Candles pass through untransformed; the SMA overlay is derived
    /// locally with the same windowing the backend applies. Fewer candles
    /// than the period mean no overlay.
    pub fn from_candles(ohlc: Vec<OhlcPoint>) -> Self {
        let sma = simple_moving_average(&ohlc, SMA_PERIOD);
        Self { ohlc, sma }
    }
}

/// Default wiring: the remote endpoint.
pub fn default_source() -> ChartDataSource {
    ChartDataSource::Remote {
        url: api::OHLC_ENDPOINT.to_string(),
    }
}

/// Демо-свечи: четыре дневных бара, январь 2024.
pub fn demo_candles() -> Vec<OhlcPoint> {
    vec![
        OhlcPoint { time: 1_704_067_200, open: 100.0, high: 105.0, low: 98.0, close: 102.0 },
        OhlcPoint { time: 1_704_153_600, open: 102.0, high: 108.0, low: 101.0, close: 107.0 },
        OhlcPoint { time: 1_704_240_000, open: 107.0, high: 110.0, low: 103.0, close: 104.0 },
        OhlcPoint { time: 1_704_326_400, open: 104.0, high: 106.0, low: 99.0, close: 100.0 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_candles_pass_through_untransformed() {
        let candles = demo_candles();
        let data = ChartData::from_candles(candles.clone());
        assert_eq!(data.ohlc, candles);
    }

    #[test]
    fn test_demo_set_has_no_sma_overlay() {
        // 4 candles < period 5: no auxiliary series
        let data = ChartData::from_candles(demo_candles());
        assert!(data.sma.is_empty());
    }

    #[test]
    fn test_demo_times_strictly_increase() {
        let candles = demo_candles();
        assert!(candles.windows(2).all(|pair| pair[0].time < pair[1].time));
    }

    #[test]
    fn test_longer_static_set_gets_overlay() {
        let mut candles = demo_candles();
        candles.push(OhlcPoint { time: 1_704_412_800, open: 100.0, high: 103.0, low: 99.0, close: 101.0 });
        candles.push(OhlcPoint { time: 1_704_499_200, open: 101.0, high: 104.0, low: 100.0, close: 103.0 });

        let data = ChartData::from_candles(candles.clone());
        assert_eq!(data.sma.len(), 2);
        // Overlay time domain is a suffix of the candle time domain
        assert_eq!(data.sma[0].time, candles[4].time);
        assert_eq!(data.sma[1].time, candles[5].time);
        assert_eq!(data.sma[0].value, 102.8);
        assert_eq!(data.sma[1].value, 103.0);
    }
}
