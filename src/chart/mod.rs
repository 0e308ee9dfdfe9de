//! Historical end-of-day and intraday price series.

mod model;

pub use model::{EodLight, IntradayBar};

use chrono::NaiveDate;

use crate::core::{Endpoint, FmpClient, FmpError, QueryParams, validate_choice};

/// Bar sizes accepted by `historical-chart/{interval}`.
pub const INTRADAY_INTERVALS: &[&str] = &["1min", "5min", "15min", "30min", "1hour", "4hour"];

/// Fetch the light end-of-day series (date, price, volume) for `symbol`.
///
/// `from` and `to` are only sent when given.
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn historical_price_eod_light(
    client: &FmpClient,
    symbol: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<Vec<EodLight>, FmpError> {
    let params = QueryParams::new()
        .push("symbol", symbol)
        .push_opt("from", from)
        .push_opt("to", to);
    client
        .get_json(&Endpoint::new("historical-price-eod/light"), params)
        .await?
        .into_records()
}

/// A builder for intraday bars of a single symbol.
pub struct HistoricalChartBuilder<'a> {
    client: &'a FmpClient,
    symbol: String,
    interval: String,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl<'a> HistoricalChartBuilder<'a> {
    /// Creates a builder for `symbol` with 5-minute bars.
    pub fn new(client: &'a FmpClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            interval: "5min".to_string(),
            from: None,
            to: None,
        }
    }

    /// Sets the bar size; one of [`INTRADAY_INTERVALS`]. Checked when fetching.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    /// First day to include.
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Last day to include.
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Fetches the bars.
    ///
    /// # Errors
    /// [`FmpError::InvalidParameter`] before any request when the interval is unknown.
    #[tracing::instrument(skip(self), err(level = "warn"), fields(symbol = %self.symbol, interval = %self.interval))]
    pub async fn fetch(self) -> Result<Vec<IntradayBar>, FmpError> {
        validate_choice("interval", &self.interval, INTRADAY_INTERVALS)?;

        let params = QueryParams::new()
            .push("symbol", &self.symbol)
            .push_opt("from", self.from)
            .push_opt("to", self.to);
        let endpoint = Endpoint::new(format!("historical-chart/{}", self.interval));
        self.client.get_json(&endpoint, params).await?.into_records()
    }
}
