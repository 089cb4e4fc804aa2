//! Event payloads the backend pushes to the UI while downloads run.
//!
//! Wire keys are camelCase (`fileID`, `totalSize`, `modelName`).

use crate::materializer::shape::scalar;
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// `download-progress`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadProgress {
    #[serde(
        rename = "fileID",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_id: Option<i64>,
    /// Percentage, 0 to 100.
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Total size in bytes; only sent once the size is known.
    #[serde(
        rename = "totalSize",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_size: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Record for DownloadProgress {
    const NAME: &'static str = "DownloadProgress";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("fileID"),
        FieldSpec::scalar("progress"),
        FieldSpec::scalar("totalSize"),
        FieldSpec::scalar("status"),
    ];
}

/// `download-complete`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadComplete {
    #[serde(
        rename = "fileID",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_id: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Record for DownloadComplete {
    const NAME: &'static str = "DownloadComplete";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::scalar("fileID"), FieldSpec::scalar("path")];
}

/// `download-cancelled`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadCancelled {
    #[serde(
        rename = "fileID",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_id: Option<i64>,
}

impl Record for DownloadCancelled {
    const NAME: &'static str = "DownloadCancelled";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::scalar("fileID")];
}

/// `ai-model-status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelStatus {
    #[serde(
        rename = "modelName",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_name: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl Record for ModelStatus {
    const NAME: &'static str = "ModelStatus";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("modelName"),
        FieldSpec::scalar("status"),
        FieldSpec::scalar("progress"),
    ];
}

/// `ai-model-complete`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelComplete {
    #[serde(
        rename = "modelName",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_name: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Record for ModelComplete {
    const NAME: &'static str = "ModelComplete";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::scalar("modelName"), FieldSpec::scalar("path")];
}

/// `ai-model-cancelled`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCancelled {
    #[serde(
        rename = "modelName",
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_name: Option<String>,
}

impl Record for ModelCancelled {
    const NAME: &'static str = "ModelCancelled";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::scalar("modelName")];
}
