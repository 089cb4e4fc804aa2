//! Declared field shapes and the serde helpers that materialize them.
//!
//! Each record field names its shape up front (scalar, nested record,
//! sequence of records, dictionary of records, or opaque value) and is
//! decoded through the matching helper below via `deserialize_with`.
//! The helpers never fail: a value that does not fit the declared shape
//! leaves the field absent and emits a debug event.

use super::{from_value_lenient, Record};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// The declared shape of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Integer or string assigned verbatim.
    Scalar,
    /// Passed through untouched as a JSON value.
    Opaque,
    /// A single nested record.
    Record(&'static [FieldSpec]),
    /// An ordered sequence of nested records.
    Sequence(&'static [FieldSpec]),
    /// Named nested records keyed by their original keys.
    Map(&'static [FieldSpec]),
}

/// Name and shape of a record field, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: FieldShape,
}

impl FieldSpec {
    pub const fn scalar(name: &'static str) -> Self {
        Self {
            name,
            shape: FieldShape::Scalar,
        }
    }

    pub const fn opaque(name: &'static str) -> Self {
        Self {
            name,
            shape: FieldShape::Opaque,
        }
    }

    pub const fn record(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            name,
            shape: FieldShape::Record(fields),
        }
    }

    pub const fn sequence(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            name,
            shape: FieldShape::Sequence(fields),
        }
    }

    pub const fn map(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self {
            name,
            shape: FieldShape::Map(fields),
        }
    }

    /// Field table of the nested record, if this field holds records.
    pub fn nested_fields(&self) -> Option<&'static [FieldSpec]> {
        match self.shape {
            FieldShape::Record(fields) | FieldShape::Sequence(fields) | FieldShape::Map(fields) => {
                Some(fields)
            }
            FieldShape::Scalar | FieldShape::Opaque => None,
        }
    }
}

/// Short name of a JSON value's type for diagnostics.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Scalar field: copied as-is when the primitive type matches.
pub fn scalar<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }

    match T::deserialize(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::debug!(
                expected = std::any::type_name::<T>(),
                found = value_kind(&raw),
                error = %err,
                "tolerating mistyped scalar; field left absent"
            );
            Ok(None)
        }
    }
}

/// Opaque field: any non-null value is kept unconverted.
pub fn opaque<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok((!raw.is_null()).then_some(raw))
}

/// Single nested record.
pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Record,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => None,
        Value::Object(_) => Some(from_value_lenient(raw)),
        other => {
            tracing::debug!(
                record = T::NAME,
                found = value_kind(&other),
                "expected a nested record; field left absent"
            );
            None
        }
    })
}

/// Ordered sequence of nested records.
pub fn sequence<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Record,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => None,
        Value::Array(items) => Some(collect_records(items)),
        other => {
            tracing::debug!(
                record = T::NAME,
                found = value_kind(&other),
                "expected a sequence of records; field left absent"
            );
            None
        }
    })
}

/// Dictionary of named records, rebuilt under their original keys.
pub fn map<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Record,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => None,
        Value::Object(entries) => Some(
            entries
                .into_iter()
                .filter_map(|(key, value)| {
                    if value.is_object() {
                        Some((key, from_value_lenient(value)))
                    } else {
                        tracing::debug!(
                            record = T::NAME,
                            key = %key,
                            found = value_kind(&value),
                            "skipping map entry that is not a mapping"
                        );
                        None
                    }
                })
                .collect(),
        ),
        other => {
            tracing::debug!(
                record = T::NAME,
                found = value_kind(&other),
                "expected a map of records; field left absent"
            );
            None
        }
    })
}

/// Materializes every mapping element in order; other elements are skipped.
pub(crate) fn collect_records<T: Record>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if item.is_object() {
                Some(from_value_lenient(item))
            } else {
                tracing::debug!(
                    record = T::NAME,
                    index,
                    found = value_kind(&item),
                    "skipping sequence element that is not a mapping"
                );
                None
            }
        })
        .collect()
}
