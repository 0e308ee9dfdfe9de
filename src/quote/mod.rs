//! Real-time quote snapshots.

mod model;

pub use model::{Quote, QuoteShort};

use crate::core::{Endpoint, FmpClient, FmpError, QueryParams};

/// Fetch the full quote for `symbol` (stocks, ETFs, indices, commodities, forex, crypto).
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn quote(client: &FmpClient, symbol: &str) -> Result<Vec<Quote>, FmpError> {
    client
        .get_json(&Endpoint::new("quote"), QueryParams::new().push("symbol", symbol))
        .await?
        .into_records()
}

/// Fetch the compact quote (price, change, volume) for `symbol`.
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn quote_short(client: &FmpClient, symbol: &str) -> Result<Vec<QuoteShort>, FmpError> {
    client
        .get_json(
            &Endpoint::new("quote-short"),
            QueryParams::new().push("symbol", symbol),
        )
        .await?
        .into_records()
}
