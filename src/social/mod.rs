//! Social sentiment, served from the legacy v4 API.

use crate::core::{Decoded, Endpoint, FmpClient, FmpError, QueryParams, validate_choice};

pub const TREND_TYPES: &[&str] = &["bullish", "bearish"];
pub const SOURCES: &[&str] = &["twitter", "stocktwits"];

/// Fetch trending symbols by social sentiment. Filters are only sent when given.
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn trending_sentiment(
    client: &FmpClient,
    trend: Option<&str>,
    source: Option<&str>,
) -> Result<Decoded, FmpError> {
    if let Some(t) = trend {
        validate_choice("type", t, TREND_TYPES)?;
    }
    if let Some(s) = source {
        validate_choice("source", s, SOURCES)?;
    }
    let params = QueryParams::new()
        .push_opt("type", trend)
        .push_opt("source", source);
    client
        .get_json(&Endpoint::v4("social-sentiments/trending"), params)
        .await
}
