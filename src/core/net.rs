use reqwest::StatusCode;
use url::Url;

use crate::core::{FmpClient, FmpError, request::redacted};

/// A response as received: status, final URL, and the raw body bytes.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) url: Url,
    pub(crate) body: Vec<u8>,
}

/// Issues exactly one GET. Transport failures are logged and returned as [`FmpError::Http`].
pub(crate) async fn get(client: &FmpClient, url: Url) -> Result<RawResponse, FmpError> {
    let shown = redacted(&url);

    let resp = match client.http().get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(url = %shown, error = %e, "request failed");
            return Err(e.into());
        }
    };

    let status = resp.status();
    let url = resp.url().clone();
    let body = match resp.bytes().await {
        Ok(b) => b.to_vec(),
        Err(e) => {
            tracing::error!(url = %shown, error = %e, "reading response body failed");
            return Err(e.into());
        }
    };

    tracing::debug!(url = %shown, status = status.as_u16(), bytes = body.len(), "response received");

    Ok(RawResponse { status, url, body })
}
