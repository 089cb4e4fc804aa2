use super::*;
use crate::materializer::{materialize, materialize_sequence, FieldSpec, Record, Source};
use crate::shared::RecordError;
use serde_json::Value;

/// Every record shape the crate knows how to materialize.
///
/// Used where the target shape is only known at runtime, such as the CLI's
/// `--kind` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Release,
    Dependency,
    DependencySpecifier,
    ProductRef,
    Eula,
    Product,
    ProductFile,
    ProductList,
    ReleaseList,
    ReleaseDetail,
    ProductFileList,
    DependencyList,
    DependencySpecifierList,
    DownloadProgress,
    DownloadComplete,
    DownloadCancelled,
    ModelStatus,
    ModelComplete,
    ModelCancelled,
}

/// Binds `$ty` to the record type behind `$kind` and evaluates `$body`.
macro_rules! with_record_type {
    ($kind:expr, $ty:ident => $body:expr) => {
        match $kind {
            RecordKind::Release => {
                type $ty = Release;
                $body
            }
            RecordKind::Dependency => {
                type $ty = Dependency;
                $body
            }
            RecordKind::DependencySpecifier => {
                type $ty = DependencySpecifier;
                $body
            }
            RecordKind::ProductRef => {
                type $ty = ProductRef;
                $body
            }
            RecordKind::Eula => {
                type $ty = Eula;
                $body
            }
            RecordKind::Product => {
                type $ty = Product;
                $body
            }
            RecordKind::ProductFile => {
                type $ty = ProductFile;
                $body
            }
            RecordKind::ProductList => {
                type $ty = ProductList;
                $body
            }
            RecordKind::ReleaseList => {
                type $ty = ReleaseList;
                $body
            }
            RecordKind::ReleaseDetail => {
                type $ty = ReleaseDetail;
                $body
            }
            RecordKind::ProductFileList => {
                type $ty = ProductFileList;
                $body
            }
            RecordKind::DependencyList => {
                type $ty = DependencyList;
                $body
            }
            RecordKind::DependencySpecifierList => {
                type $ty = DependencySpecifierList;
                $body
            }
            RecordKind::DownloadProgress => {
                type $ty = DownloadProgress;
                $body
            }
            RecordKind::DownloadComplete => {
                type $ty = DownloadComplete;
                $body
            }
            RecordKind::DownloadCancelled => {
                type $ty = DownloadCancelled;
                $body
            }
            RecordKind::ModelStatus => {
                type $ty = ModelStatus;
                $body
            }
            RecordKind::ModelComplete => {
                type $ty = ModelComplete;
                $body
            }
            RecordKind::ModelCancelled => {
                type $ty = ModelCancelled;
                $body
            }
        }
    };
}

impl RecordKind {
    pub const ALL: [RecordKind; 19] = [
        RecordKind::Release,
        RecordKind::Dependency,
        RecordKind::DependencySpecifier,
        RecordKind::ProductRef,
        RecordKind::Eula,
        RecordKind::Product,
        RecordKind::ProductFile,
        RecordKind::ProductList,
        RecordKind::ReleaseList,
        RecordKind::ReleaseDetail,
        RecordKind::ProductFileList,
        RecordKind::DependencyList,
        RecordKind::DependencySpecifierList,
        RecordKind::DownloadProgress,
        RecordKind::DownloadComplete,
        RecordKind::DownloadCancelled,
        RecordKind::ModelStatus,
        RecordKind::ModelComplete,
        RecordKind::ModelCancelled,
    ];

    /// Command-line name; for events this is also the emitted event name.
    pub fn slug(&self) -> &'static str {
        match self {
            RecordKind::Release => "release",
            RecordKind::Dependency => "dependency",
            RecordKind::DependencySpecifier => "dependency-specifier",
            RecordKind::ProductRef => "product-ref",
            RecordKind::Eula => "eula",
            RecordKind::Product => "product",
            RecordKind::ProductFile => "product-file",
            RecordKind::ProductList => "product-list",
            RecordKind::ReleaseList => "release-list",
            RecordKind::ReleaseDetail => "release-detail",
            RecordKind::ProductFileList => "product-file-list",
            RecordKind::DependencyList => "dependency-list",
            RecordKind::DependencySpecifierList => "dependency-specifier-list",
            RecordKind::DownloadProgress => "download-progress",
            RecordKind::DownloadComplete => "download-complete",
            RecordKind::DownloadCancelled => "download-cancelled",
            RecordKind::ModelStatus => "ai-model-status",
            RecordKind::ModelComplete => "ai-model-complete",
            RecordKind::ModelCancelled => "ai-model-cancelled",
        }
    }

    /// Backend type name of the record.
    pub fn name(&self) -> &'static str {
        with_record_type!(self, T => T::NAME)
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        with_record_type!(self, T => T::FIELDS)
    }

    /// Materializes `source` as this kind and returns the normalized JSON of
    /// each record: one entry, or one per element when `sequence` is set.
    ///
    /// # Errors
    /// Returns [`RecordError::Parse`] for text that is not JSON.
    pub fn materialize<'a>(
        &self,
        source: impl Into<Source<'a>>,
        sequence: bool,
    ) -> Result<Vec<Value>, RecordError> {
        let source = source.into();
        with_record_type!(self, T => encode_all::<T>(source, sequence))
    }
}

fn encode_all<T: Record>(source: Source<'_>, sequence: bool) -> Result<Vec<Value>, RecordError> {
    let records: Vec<T> = if sequence {
        materialize_sequence(source)?
    } else {
        vec![materialize(source)?]
    };

    records
        .iter()
        .map(|record| {
            serde_json::to_value(record).map_err(|source| RecordError::Encode {
                record: T::NAME,
                source,
            })
        })
        .collect()
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    /// Accepts the slug or the backend type name, ignoring case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        RecordKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.slug()) == wanted || normalize(kind.name()) == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid record kind: {}. Run with --list-kinds to see the supported kinds",
                    s
                )
            })
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materializer::FieldShape;
    use serde_json::json;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_from_str_slug() {
        assert_eq!(
            RecordKind::from_str("product-file").unwrap(),
            RecordKind::ProductFile
        );
        assert_eq!(
            RecordKind::from_str("ai-model-status").unwrap(),
            RecordKind::ModelStatus
        );
        assert_eq!(
            RecordKind::from_str("ai-model-cancelled").unwrap(),
            RecordKind::ModelCancelled
        );
    }

    #[test]
    fn test_from_str_type_name() {
        assert_eq!(
            RecordKind::from_str("DependencySpecifier").unwrap(),
            RecordKind::DependencySpecifier
        );
        assert_eq!(RecordKind::from_str("EULA").unwrap(), RecordKind::Eula);
        assert_eq!(
            RecordKind::from_str("product_file").unwrap(),
            RecordKind::ProductFile
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let error = RecordKind::from_str("stemcell").unwrap_err();
        assert!(error.contains("Invalid record kind"));
        assert!(error.contains("stemcell"));
        assert!(error.contains("--list-kinds"));
    }

    #[test]
    fn test_from_str_empty() {
        assert!(RecordKind::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_slugs_and_names_unique() {
        let slugs: HashSet<_> = RecordKind::ALL.iter().map(|k| k.slug()).collect();
        let names: HashSet<_> = RecordKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(slugs.len(), RecordKind::ALL.len());
        assert_eq!(names.len(), RecordKind::ALL.len());
    }

    fn is_numeric(name: &str) -> bool {
        name.ends_with("id") || name.ends_with("ID") || name == "totalSize"
    }

    /// A payload that supplies every declared field, nested ones included.
    fn full_payload(fields: &[FieldSpec]) -> Value {
        let mut source = serde_json::Map::new();
        for field in fields {
            let value = match field.shape {
                FieldShape::Scalar if field.name == "progress" => json!(12.5),
                FieldShape::Scalar if is_numeric(field.name) => json!(1),
                FieldShape::Scalar => json!("x"),
                FieldShape::Opaque => json!({"id": 5, "slug": "foo", "name": "Foo"}),
                FieldShape::Record(nested) => full_payload(nested),
                FieldShape::Sequence(nested) => json!([full_payload(nested)]),
                FieldShape::Map(nested) => json!({"only": full_payload(nested)}),
            };
            source.insert(field.name.to_string(), value);
        }
        Value::Object(source)
    }

    #[test]
    fn test_fields_match_serialized_keys() {
        for kind in RecordKind::ALL {
            let records = kind.materialize(full_payload(kind.fields()), false).unwrap();
            let encoded = records[0].as_object().unwrap();
            let mut keys: Vec<_> = encoded.keys().map(String::as_str).collect();
            let mut declared: Vec<_> = kind.fields().iter().map(|f| f.name).collect();
            keys.sort_unstable();
            declared.sort_unstable();
            assert_eq!(keys, declared, "field table mismatch for {}", kind.name());
        }
    }

    #[test]
    fn test_full_payload_survives_field_for_field() {
        for kind in RecordKind::ALL {
            let payload = full_payload(kind.fields());
            let records = kind.materialize(payload.clone(), false).unwrap();
            assert_eq!(records, vec![payload], "{} dropped a field", kind.name());
        }
    }

    #[test]
    fn test_text_and_value_sources_agree() {
        for kind in RecordKind::ALL {
            let payload = full_payload(kind.fields());
            let text = payload.to_string();

            let from_text = kind.materialize(text.as_str(), false).unwrap();
            let from_value = kind.materialize(payload, false).unwrap();
            assert_eq!(from_text, from_value, "sources disagree for {}", kind.name());
        }
    }

    #[test]
    fn test_text_and_value_sources_agree_for_sequences() {
        for kind in RecordKind::ALL {
            let payload = json!([full_payload(kind.fields()), 7, {}]);
            let text = payload.to_string();

            let from_text = kind.materialize(text.as_str(), true).unwrap();
            let from_value = kind.materialize(payload, true).unwrap();
            assert_eq!(from_text.len(), 2);
            assert_eq!(from_text, from_value, "sources disagree for {}", kind.name());
        }
    }

    #[test]
    fn test_materialize_single() {
        let records = RecordKind::Release
            .materialize(r#"{"id":1,"version":"1.0","junk":true}"#, false)
            .unwrap();
        assert_eq!(records, vec![json!({"id": 1, "version": "1.0"})]);
    }

    #[test]
    fn test_materialize_sequence() {
        let records = RecordKind::Product
            .materialize(r#"[{"id":1},{"id":2}]"#, true)
            .unwrap();
        assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_materialize_parse_error() {
        for kind in RecordKind::ALL {
            let err = kind.materialize("not json", false).unwrap_err();
            assert!(err.is_parse(), "{} accepted invalid JSON", kind.name());
        }
    }
}
