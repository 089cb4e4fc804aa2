use crate::materializer::shape::scalar;
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// A downloadable file belonging to a release.
///
/// `md5` and `sha256` are carried as sent; nothing here verifies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFile {
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub aws_object_key: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl ProductFile {
    /// Last path segment of `aws_object_key`, the file name on disk.
    pub fn object_file_name(&self) -> Option<&str> {
        self.aws_object_key
            .as_deref()
            .and_then(|key| key.rsplit('/').next())
            .filter(|name| !name.is_empty())
    }
}

impl Record for ProductFile {
    const NAME: &'static str = "ProductFile";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("id"),
        FieldSpec::scalar("name"),
        FieldSpec::scalar("aws_object_key"),
        FieldSpec::scalar("file_type"),
        FieldSpec::scalar("file_version"),
        FieldSpec::scalar("md5"),
        FieldSpec::scalar("sha256"),
    ];
}
