//! Shape normalization: turns any decoded body, typed or not, into one ordered list of rows.
//!
//! Bodies come back as a single object, a list, typed records, or nothing at all. [`Shape`] tags
//! which one it is at the decode boundary so callers match on it instead of probing at runtime,
//! and [`Shape::into_rows`] flattens every case into `Vec<Row>`.

use serde::Serialize;
use serde_json::{Map, Value};

/// A plain field mapping.
pub type Row = Map<String, Value>;

/// Key used when a value that is not a mapping has to be wrapped into a row.
pub const VALUE_KEY: &str = "value";

/// One element of a sequence that may mix typed records and untyped JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<R> {
    Record(R),
    Raw(Value),
}

/// A decoded body, tagged by shape. `R` is the typed-record type, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<R = Value> {
    /// No data.
    Empty,
    /// A single typed record.
    Record(R),
    /// A list of typed records.
    RecordList(Vec<R>),
    /// A list as decoded; elements may be typed records or untyped JSON.
    RawList(Vec<Item<R>>),
    /// Any other untyped value (a lone object, a scalar).
    RawValue(Value),
}

impl<R> Shape<R> {
    /// Tags an untyped JSON value: `null` is empty, arrays become a raw list.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Array(items) => Self::RawList(items.into_iter().map(Item::Raw).collect()),
            other => Self::RawValue(other),
        }
    }

    /// `None` is empty; otherwise a single record.
    pub fn from_option(record: Option<R>) -> Self {
        record.map_or(Self::Empty, Self::Record)
    }
}

impl<R> From<Vec<R>> for Shape<R> {
    fn from(records: Vec<R>) -> Self {
        Self::RecordList(records)
    }
}

impl<R: Serialize> Shape<R> {
    /// Flattens into rows. Never fails: anything that is not a mapping is wrapped as
    /// `{"value": ...}`.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Empty => Vec::new(),
            Self::Record(r) => vec![record_row(&r)],
            Self::RecordList(rs) => rs.iter().map(record_row).collect(),
            Self::RawList(items) => items.into_iter().map(item_row).collect(),
            Self::RawValue(Value::Null) => Vec::new(),
            Self::RawValue(Value::Array(items)) => items.into_iter().map(value_row).collect(),
            Self::RawValue(v) => vec![value_row(v)],
        }
    }
}

/// Free-function form of [`Shape::into_rows`].
pub fn normalize<R: Serialize>(shape: Shape<R>) -> Vec<Row> {
    shape.into_rows()
}

fn item_row<R: Serialize>(item: Item<R>) -> Row {
    match item {
        Item::Record(r) => record_row(&r),
        Item::Raw(v) => value_row(v),
    }
}

fn record_row<R: Serialize>(record: &R) -> Row {
    match serde_json::to_value(record) {
        Ok(v) => value_row(v),
        Err(e) => {
            tracing::warn!(error = %e, "record could not be serialized; wrapping null");
            wrap(Value::Null)
        }
    }
}

fn value_row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => wrap(other),
    }
}

fn wrap(value: Value) -> Row {
    let mut row = Row::new();
    row.insert(VALUE_KEY.to_string(), value);
    row
}
