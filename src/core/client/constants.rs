//! Centralized constants for default endpoints, timeouts and UA.

use std::time::Duration;

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("fmp-rs/", env!("CARGO_PKG_VERSION"));

/// Base URL for the current ("stable") API generation. Every version tag except `v4` lands here.
pub const BASE_URL_STABLE: &str = "https://financialmodelingprep.com/stable/";

/// Base URL for the legacy v4 API.
pub const BASE_URL_V4: &str = "https://financialmodelingprep.com/api/v4/";

/// Fixed TCP connect timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed read timeout applied to each read of the response.
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted by [`FmpClient::from_env`](super::FmpClient::from_env).
pub const API_KEY_ENV: &str = "FMP_API_KEY";
