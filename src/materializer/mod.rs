//! Materialization of loosely-typed payloads into typed records.
//!
//! A source is either JSON text or an already-parsed `serde_json::Value`.
//! Text that is not JSON is the only failure; everything else produces a
//! best-effort record where missing or mistyped fields are absent.

pub mod shape;

pub use shape::{FieldShape, FieldSpec};

use crate::shared::RecordError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Input to materialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Source<'a> {
    /// JSON-encoded text, parsed before materializing.
    Text(&'a str),
    /// An already-parsed value.
    Value(Value),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text.as_str())
    }
}

impl From<Value> for Source<'static> {
    fn from(value: Value) -> Self {
        Source::Value(value)
    }
}

impl Source<'_> {
    /// Resolves the source into a JSON value, parsing text on the way.
    pub fn into_value(self, record: &'static str) -> Result<Value, RecordError> {
        match self {
            Source::Text(text) => {
                serde_json::from_str(text).map_err(|source| RecordError::Parse { record, source })
            }
            Source::Value(value) => Ok(value),
        }
    }
}

/// A named record shape produced by the backend.
///
/// Implementors declare every field as `Option<T>` and decode it through the
/// helper in [`shape`] matching its declared [`FieldShape`].
pub trait Record: Serialize + DeserializeOwned + Default + fmt::Debug {
    /// Backend type name, used in diagnostics and errors.
    const NAME: &'static str;

    /// Wire name and declared shape of every field, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Materializes a record from text or a parsed value.
    fn create_from<'a>(source: impl Into<Source<'a>>) -> Result<Self, RecordError> {
        materialize(source)
    }
}

/// Materializes a single record.
///
/// # Errors
/// Returns [`RecordError::Parse`] when textual input is not well-formed JSON.
pub fn materialize<'a, T: Record>(source: impl Into<Source<'a>>) -> Result<T, RecordError> {
    let value = source.into().into_value(T::NAME)?;
    Ok(from_value_lenient(value))
}

/// Materializes a top-level ordered sequence of records.
///
/// Elements that are not mappings are skipped. A source that is not a
/// sequence at all yields an empty list.
///
/// # Errors
/// Returns [`RecordError::Parse`] when textual input is not well-formed JSON.
pub fn materialize_sequence<'a, T: Record>(
    source: impl Into<Source<'a>>,
) -> Result<Vec<T>, RecordError> {
    match source.into().into_value(T::NAME)? {
        Value::Array(items) => Ok(shape::collect_records(items)),
        Value::Null => Ok(Vec::new()),
        other => {
            tracing::debug!(
                record = T::NAME,
                found = shape::value_kind(&other),
                "expected a sequence of records; nothing to materialize"
            );
            Ok(Vec::new())
        }
    }
}

/// Builds a record from a parsed value without ever failing.
///
/// Non-mapping values produce a record with every field absent.
pub(crate) fn from_value_lenient<T: Record>(value: Value) -> T {
    if !value.is_object() {
        tracing::debug!(
            record = T::NAME,
            found = shape::value_kind(&value),
            "source is not a mapping; all fields absent"
        );
        return T::default();
    }

    match serde_json::from_value(value) {
        Ok(record) => record,
        Err(err) => {
            tracing::debug!(record = T::NAME, error = %err, "tolerating malformed record");
            T::default()
        }
    }
}
