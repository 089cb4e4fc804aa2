use crate::materializer::shape::scalar;
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// A released version of a portal product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Release date as sent by the portal (`YYYY-MM-DD`), not parsed.
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Release {
    const NAME: &'static str = "Release";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("id"),
        FieldSpec::scalar("version"),
        FieldSpec::scalar("release_date"),
        FieldSpec::scalar("description"),
    ];
}
