//! Index membership.

mod model;

pub use model::IndexConstituent;

use crate::core::{Endpoint, FmpClient, FmpError, QueryParams, validate_choice};

/// Indexes with a published constituent list.
pub const INDEXES: &[&str] = &["sp500", "nasdaq", "dowjones"];

/// Fetch the current constituents of `index` (one of [`INDEXES`]).
///
/// # Errors
/// [`FmpError::InvalidParameter`] before any request when the index is unknown.
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn index_constituents(
    client: &FmpClient,
    index: &str,
) -> Result<Vec<IndexConstituent>, FmpError> {
    validate_choice("index", index, INDEXES)?;
    client
        .get_json(
            &Endpoint::new(format!("{index}-constituent")),
            QueryParams::new(),
        )
        .await?
        .into_records()
}
