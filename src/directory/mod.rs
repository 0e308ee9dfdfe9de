//! Symbol directories.

use crate::core::{Decoded, Endpoint, FmpClient, FmpError, QueryParams};

/// Fetch the full stock list as CSV. Rows are keyed by the CSV header and every cell is a string.
#[tracing::instrument(skip(client), err(level = "warn"))]
pub async fn stock_list_csv(client: &FmpClient) -> Result<Decoded, FmpError> {
    client
        .get_json(
            &Endpoint::new("stock-list"),
            QueryParams::new().push("datatype", "csv"),
        )
        .await
}
