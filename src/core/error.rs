use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FmpError {
    /// The HTTP request itself failed (timeout, refused connection, redirect loop, body read).
    ///
    /// These are passed through untouched and never retried.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A base URL or resource path could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A resource path resolved outside the configured base URL.
    #[error("path '{path}' resolves outside the configured base URL")]
    PathOutsideBase {
        /// The rejected path as given.
        path: String,
    },

    /// The endpoint requires a higher subscription tier (HTTP 402).
    #[error("Premium endpoint: subscription upgrade required for {url}")]
    PremiumEndpoint {
        /// The URL that was refused, with the API key redacted.
        url: String,
    },

    /// The API reported an application-level error message.
    #[error("API error (status {status}): {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The upstream `"Error Message"` text.
        message: String,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// The server returned an error status without a readable error message.
    #[error("API request failed with status code {status}: {reason}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for the status.
        reason: String,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// A successful response carried malformed JSON, or JSON that did not fit the requested record type.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV response body was not valid UTF-8.
    #[error("CSV body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A CSV response body could not be parsed.
    #[error("CSV decoding error: {0}")]
    Csv(#[from] csv::Error),

    /// A parameter value is not one the endpoint accepts. Raised before any request is sent.
    #[error("invalid {name} '{value}': must be one of {}", .allowed.join(", "))]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Every value the endpoint accepts.
        allowed: &'static [&'static str],
    },

    /// No API key was configured.
    #[error("missing API key: set FMP_API_KEY or call FmpClientBuilder::api_key")]
    MissingApiKey,
}

impl FmpError {
    /// True when the endpoint is paywalled; callers usually skip rather than fail.
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::PremiumEndpoint { .. })
    }

    /// True when the request timed out at the transport level.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// True when the connection could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect())
    }

    /// The HTTP status carried by upstream error variants, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::PremiumEndpoint { .. } => Some(402),
            Self::Api { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
