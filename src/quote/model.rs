use serde::{Deserialize, Serialize};

/// Full quote snapshot from `quote`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: Option<String>,
    pub price: f64,
    pub change_percentage: Option<f64>,
    pub change: Option<f64>,
    pub volume: Option<u64>,
    pub day_low: Option<f64>,
    pub day_high: Option<f64>,
    pub year_high: Option<f64>,
    pub year_low: Option<f64>,
    pub market_cap: Option<f64>,
    #[serde(rename = "priceAvg50")]
    pub price_avg_50: Option<f64>,
    #[serde(rename = "priceAvg200")]
    pub price_avg_200: Option<f64>,
    pub exchange: Option<String>,
    pub open: Option<f64>,
    pub previous_close: Option<f64>,
    /// Unix seconds.
    pub timestamp: Option<i64>,
}

/// Compact quote from `quote-short`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteShort {
    pub symbol: String,
    pub price: f64,
    pub change: Option<f64>,
    pub volume: Option<u64>,
}
