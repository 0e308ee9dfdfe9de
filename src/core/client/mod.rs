//! Public client surface + builder.
//! Defaults (base URLs, timeouts, UA) live in `constants`.

mod constants;

pub use constants::{API_KEY_ENV, BASE_URL_STABLE, BASE_URL_V4, CONNECT_TIMEOUT, READ_TIMEOUT};

use crate::core::{
    FmpError,
    request::{ApiVersion, Endpoint, QueryParams},
    response::{self, Decoded},
};
use constants::USER_AGENT;
use reqwest::Client;
use std::fmt;
use url::Url;

/// Handle to the API: an HTTP client, the API key and the two base URLs.
///
/// Cloning is cheap. The client holds no mutable state; every call issues one request.
#[derive(Clone)]
pub struct FmpClient {
    http: Client,
    api_key: String,
    base_stable: Url,
    base_v4: Url,
}

impl fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpClient")
            .field("api_key", &"***")
            .field("base_stable", &self.base_stable.as_str())
            .field("base_v4", &self.base_v4.as_str())
            .finish_non_exhaustive()
    }
}

impl FmpClient {
    /// Create a new builder.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /// A client with default endpoints and the given key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FmpError> {
        Self::builder().api_key(api_key).build()
    }

    /// A client keyed from the `FMP_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, FmpError> {
        let key = std::env::var(API_KEY_ENV).map_err(|_| FmpError::MissingApiKey)?;
        Self::new(key)
    }

    /// Base URL for an API version.
    pub fn base_url(&self, version: ApiVersion) -> &Url {
        match version {
            ApiVersion::V4 => &self.base_v4,
            ApiVersion::Stable => &self.base_stable,
        }
    }

    /// Fetches a JSON endpoint, or a CSV one when `params` carries `datatype=csv`.
    ///
    /// # Errors
    /// [`FmpError::PremiumEndpoint`] on HTTP 402, [`FmpError::Api`] / [`FmpError::Status`] on
    /// other error statuses, [`FmpError::Http`] on transport failure, and decode errors for
    /// malformed bodies.
    pub async fn get_json(
        &self,
        endpoint: &Endpoint,
        params: QueryParams,
    ) -> Result<Decoded, FmpError> {
        response::fetch_json(self, endpoint, params).await
    }

    /// Downloads a binary document from the stable API.
    ///
    /// Returns `None` on any failure (transport or status) instead of an error.
    pub async fn get_binary(&self, path: &str, params: QueryParams) -> Option<Vec<u8>> {
        response::fetch_binary(self, path, params).await
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FmpClientBuilder {
    api_key: Option<String>,
    user_agent: Option<String>,
    base_stable: Option<Url>,
    base_v4: Option<Url>,
}

impl FmpClientBuilder {
    /// Set the API key sent as the `apikey` query parameter.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the stable API base (e.g., `https://financialmodelingprep.com/stable/`).
    pub fn base_stable(mut self, url: Url) -> Self {
        self.base_stable = Some(url);
        self
    }

    /// Override the v4 API base (e.g., `https://financialmodelingprep.com/api/v4/`).
    pub fn base_v4(mut self, url: Url) -> Self {
        self.base_v4 = Some(url);
        self
    }

    pub fn build(self) -> Result<FmpClient, FmpError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(FmpError::MissingApiKey)?;

        let base_stable = with_trailing_slash(match self.base_stable {
            Some(u) => u,
            None => Url::parse(BASE_URL_STABLE)?,
        });
        let base_v4 = with_trailing_slash(match self.base_v4 {
            Some(u) => u,
            None => Url::parse(BASE_URL_V4)?,
        });

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;

        Ok(FmpClient {
            http,
            api_key,
            base_stable,
            base_v4,
        })
    }
}

/// `Url::join` drops the last segment of a base without a trailing slash.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
