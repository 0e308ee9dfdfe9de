//! URL composition: API version selection, ordered query parameters, and the final `Url`.

use std::fmt;

use chrono::NaiveDate;
use url::Url;

use crate::core::FmpError;

/// Which API generation (and therefore which base URL) an endpoint lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// The current API. Also the fallback for every unrecognised tag.
    #[default]
    Stable,
    /// The legacy v4 API.
    V4,
}

impl ApiVersion {
    /// Maps a version tag to a base URL selector.
    ///
    /// Only `"v4"` is special; `"stable"`, `"v3"`, and anything else resolve to [`ApiVersion::Stable`].
    pub fn parse(tag: &str) -> Self {
        match tag {
            "v4" => Self::V4,
            _ => Self::Stable,
        }
    }

    /// The canonical tag for this version.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::V4 => "v4",
        }
    }
}

impl From<&str> for ApiVersion {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource path plus the API version it is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    version: ApiVersion,
}

impl Endpoint {
    /// An endpoint on the stable API.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: ApiVersion::Stable,
        }
    }

    /// An endpoint on the legacy v4 API.
    pub fn v4(path: impl Into<String>) -> Self {
        Self::new(path).version(ApiVersion::V4)
    }

    /// Sets the version from a tag or an [`ApiVersion`].
    pub fn version(mut self, version: impl Into<ApiVersion>) -> Self {
        self.version = version.into();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn api_version(&self) -> ApiVersion {
        self.version
    }
}

/// A single query-string value, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryValue(String);

impl QueryValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&String> for QueryValue {
    fn from(v: &String) -> Self {
        Self(v.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        Self(if v { "true" } else { "false" }.to_string())
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(v: NaiveDate) -> Self {
        Self(v.format("%Y-%m-%d").to_string())
    }
}

macro_rules! query_value_from_display {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(v: $t) -> Self {
                Self(v.to_string())
            }
        })*
    };
}

query_value_from_display!(i32, i64, u16, u32, u64, usize, f64);

/// Ordered query parameters.
///
/// Optional parameters are added with [`QueryParams::push_opt`]; a `None` leaves the key out of the
/// query string entirely instead of sending it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. Re-setting a key replaces its value but keeps its original position.
    ///
    /// A value that renders empty removes the key instead.
    pub fn push(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` only when `value` is present and non-empty.
    pub fn push_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        if value.as_str().is_empty() {
            self.pairs.retain(|(k, _)| *k != key);
            return;
        }
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether the caller asked for a CSV body (`datatype=csv`).
    pub fn wants_csv(&self) -> bool {
        self.get("datatype") == Some("csv")
    }
}

/// Joins `path` onto `base` and appends `params` URL-encoded, in insertion order.
///
/// `base` must end with `/` for its last segment to be kept; a leading `/` on `path` is ignored.
/// Paths that resolve outside `base` (another host, `../`) are rejected.
pub fn build_url(base: &Url, path: &str, params: &QueryParams) -> Result<Url, FmpError> {
    let mut url = base.join(path.trim_start_matches('/'))?;
    if url.origin() != base.origin() || !url.path().starts_with(base.path()) {
        return Err(FmpError::PathOutsideBase {
            path: path.to_string(),
        });
    }
    if !params.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params.iter() {
            qp.append_pair(k, v);
        }
    }
    Ok(url)
}

/// Renders `url` for logs and error messages with the API key masked.
pub(crate) fn redacted(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

/// Checks `value` against the closed set an endpoint accepts.
pub fn validate_choice(
    name: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), FmpError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(FmpError::InvalidParameter {
            name,
            value: value.to_string(),
            allowed,
        })
    }
}
