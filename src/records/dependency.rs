use super::Release;
use crate::materializer::shape::record;
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// A release another release depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    #[serde(deserialize_with = "record", skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
}

impl Record for Dependency {
    const NAME: &'static str = "Dependency";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::record("release", Release::FIELDS)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dependency_materializes_nested_release() {
        let dependency = Dependency::create_from(json!({
            "release": {
                "id": 1,
                "version": "1.0",
                "release_date": "2020-01-01",
                "description": "x"
            }
        }))
        .unwrap();

        assert_eq!(
            dependency.release,
            Some(Release {
                id: Some(1),
                version: Some("1.0".to_string()),
                release_date: Some("2020-01-01".to_string()),
                description: Some("x".to_string()),
            })
        );
    }

    #[test]
    fn test_dependency_without_release() {
        let dependency = Dependency::create_from(json!({})).unwrap();
        assert_eq!(dependency.release, None);
    }

    #[test]
    fn test_dependency_null_release() {
        let dependency = Dependency::create_from(r#"{"release":null}"#).unwrap();
        assert_eq!(dependency.release, None);
    }

    #[test]
    fn test_dependency_release_with_product_extra() {
        // The portal nests a product under the release; it is not part of the shape.
        let dependency = Dependency::create_from(
            r#"{"release":{"id":12,"version":"1.915","product":{"id":3,"slug":"stemcells"}}}"#,
        )
        .unwrap();
        let release = dependency.release.unwrap();
        assert_eq!(release.id, Some(12));
        assert_eq!(release.version.as_deref(), Some("1.915"));
    }

    #[test]
    fn test_dependency_parse_error() {
        assert!(Dependency::create_from("{release:").unwrap_err().is_parse());
    }

    #[test]
    fn test_dependency_fields() {
        assert_eq!(Dependency::FIELDS.len(), 1);
        assert_eq!(Dependency::FIELDS[0].nested_fields(), Some(Release::FIELDS));
    }
}
