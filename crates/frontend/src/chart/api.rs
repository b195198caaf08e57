//! HTTP-клиент эндпоинта истории свечей.

use contracts::market_data::OhlcHistoryResponse;
use gloo_net::http::Request;

/// Endpoint serving the candle history with its SMA overlay.
pub const OHLC_ENDPOINT: &str = "/ohlc";

/// Fetch the OHLC history from the backend.
pub async fn fetch_ohlc(url: &str) -> Result<OhlcHistoryResponse, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("Request failed: HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
