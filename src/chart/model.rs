use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One end-of-day point from `historical-price-eod/light`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EodLight {
    pub symbol: String,
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
}

/// One intraday bar from `historical-chart/{interval}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradayBar {
    /// Exchange-local timestamp as sent, e.g. `2024-01-02 15:59:00`.
    pub date: String,
    pub open: f64,
    pub low: f64,
    pub high: f64,
    pub close: f64,
    pub volume: u64,
}
