//! Company profile data.

mod model;

pub use model::CompanyProfile;

use crate::core::{Endpoint, FmpClient, FmpError, QueryParams};

/// Fetch the company profile for `symbol`.
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn profile(client: &FmpClient, symbol: &str) -> Result<Vec<CompanyProfile>, FmpError> {
    client
        .get_json(&Endpoint::new("profile"), QueryParams::new().push("symbol", symbol))
        .await?
        .into_records()
}
