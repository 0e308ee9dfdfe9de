//! Response classification and body decoding for the JSON/CSV and binary pipelines.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::{
    FmpClient, FmpError, net,
    net::RawResponse,
    request::{ApiVersion, Endpoint, QueryParams, build_url, redacted},
    shape::Shape,
};

/// Key the API uses to report application-level errors inside a JSON body.
pub const ERROR_MESSAGE_KEY: &str = "Error Message";

/// The decoded body of a JSON or CSV endpoint.
///
/// Holds whatever the API returned without schema coercion: usually an array or an object, and
/// any other non-null JSON value unchanged. Empty bodies, `{}` and `null` arrive here as an empty
/// array.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded(Value);

impl Decoded {
    /// An empty list.
    pub fn empty() -> Self {
        Self(Value::Array(Vec::new()))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// True for `[]`, `{}` and `null`.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Tags the body for normalization.
    pub fn into_shape<R>(self) -> Shape<R> {
        Shape::from_value(self.0)
    }

    /// Deserializes the body into typed records.
    ///
    /// An array yields one record per element, a lone object yields a single record, and an empty
    /// body yields none.
    pub fn into_records<T: DeserializeOwned>(self) -> Result<Vec<T>, FmpError> {
        match self.0 {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|v| serde_json::from_value(v).map_err(FmpError::from))
                .collect(),
            Value::Object(obj) if obj.is_empty() => Ok(Vec::new()),
            other => Ok(vec![serde_json::from_value(other)?]),
        }
    }
}

impl From<Value> for Decoded {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

/// Interprets a raw response.
///
/// Order: 402 → premium, other non-2xx → API/status error, empty body → `[]`, CSV when asked
/// for, otherwise JSON (with `{}` and `null` → `[]`).
pub(crate) fn classify(raw: RawResponse, wants_csv: bool) -> Result<Decoded, FmpError> {
    let status = raw.status;

    if status == StatusCode::PAYMENT_REQUIRED {
        return Err(FmpError::PremiumEndpoint {
            url: redacted(&raw.url),
        });
    }

    if !status.is_success() {
        return Err(error_from_body(status, &raw));
    }

    if raw.body.is_empty() {
        tracing::warn!(url = %redacted(&raw.url), "response has no data; returning empty list");
        return Ok(Decoded::empty());
    }

    if wants_csv {
        return decode_csv(&raw.body).map(Decoded);
    }

    let value = decode_json(&raw.body)?;
    if value.is_null() {
        tracing::warn!(url = %redacted(&raw.url), "response is null; returning empty list");
        return Ok(Decoded::empty());
    }
    if let Value::Object(obj) = &value {
        if obj.is_empty() {
            tracing::warn!(url = %redacted(&raw.url), "response is an empty object; returning empty list");
            return Ok(Decoded::empty());
        }
        if let Some(message) = error_message(obj) {
            return Err(FmpError::Api {
                status: status.as_u16(),
                message,
                url: redacted(&raw.url),
            });
        }
    }
    Ok(Decoded(value))
}

fn error_message(obj: &Map<String, Value>) -> Option<String> {
    match obj.get(ERROR_MESSAGE_KEY)? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Builds the error for a non-2xx, non-402 response. Never fails on an undecodable body.
fn error_from_body(status: StatusCode, raw: &RawResponse) -> FmpError {
    let url = redacted(&raw.url);
    let message = std::str::from_utf8(&raw.body)
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(text).ok())
        .and_then(|v| match v {
            Value::Object(obj) => error_message(&obj),
            _ => None,
        });

    match message {
        Some(message) => {
            tracing::error!(url = %url, status = status.as_u16(), %message, "API returned an error");
            FmpError::Api {
                status: status.as_u16(),
                message,
                url,
            }
        }
        None => {
            tracing::error!(url = %url, status = status.as_u16(), "API request failed");
            FmpError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url,
            }
        }
    }
}

/// Parses a JSON body as-is.
pub fn decode_json(body: &[u8]) -> Result<Value, FmpError> {
    Ok(serde_json::from_slice(body)?)
}

/// Parses a CSV body into an array of objects keyed by the header row.
///
/// Cells stay strings. Missing trailing cells become `null`; surplus cells are dropped.
pub fn decode_csv(body: &[u8]) -> Result<Value, FmpError> {
    let text = std::str::from_utf8(body).inspect_err(|e| {
        tracing::error!(error = %e, "CSV body is not valid UTF-8");
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let cell = record
                    .get(i)
                    .map_or(Value::Null, |c| Value::String(c.to_string()));
                (h.to_string(), cell)
            })
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}

/// The JSON/CSV pipeline: build URL, one GET, classify, decode.
///
/// The API key is appended as `apikey` after the caller's parameters.
pub(crate) async fn fetch_json(
    client: &FmpClient,
    endpoint: &Endpoint,
    params: QueryParams,
) -> Result<Decoded, FmpError> {
    let mut params = params;
    params.set("apikey", client.api_key());
    let wants_csv = params.wants_csv();

    let base = client.base_url(endpoint.api_version());
    let url = build_url(base, endpoint.path(), &params)?;
    tracing::debug!(path = endpoint.path(), version = %endpoint.api_version(), "GET");

    let raw = net::get(client, url).await?;
    classify(raw, wants_csv)
}

/// The binary pipeline used by document exports. Best effort: any failure is logged and
/// yields `None`; a successful empty body yields `Some(vec![])`.
pub(crate) async fn fetch_binary(
    client: &FmpClient,
    path: &str,
    params: QueryParams,
) -> Option<Vec<u8>> {
    let mut params = params;
    params.set("apikey", client.api_key());

    let url = match build_url(client.base_url(ApiVersion::Stable), path, &params) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(path, error = %e, "could not build download URL");
            return None;
        }
    };

    let raw = match net::get(client, url).await {
        Ok(raw) => raw,
        // already logged by the transport
        Err(_) => return None,
    };

    if !raw.status.is_success() {
        tracing::error!(
            url = %redacted(&raw.url),
            status = raw.status.as_u16(),
            "download failed"
        );
        return None;
    }

    if raw.body.is_empty() {
        tracing::warn!(url = %redacted(&raw.url), "download has no data");
    }
    Some(raw.body)
}
