use crate::materializer::shape::scalar;
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// A product listed on the download portal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Product {
    const NAME: &'static str = "Product";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("id"),
        FieldSpec::scalar("slug"),
        FieldSpec::scalar("name"),
        FieldSpec::scalar("description"),
    ];
}
