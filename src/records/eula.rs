use crate::materializer::shape::scalar;
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// End user license agreement attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eula {
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Agreement body, usually HTML.
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Record for Eula {
    const NAME: &'static str = "EULA";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("id"),
        FieldSpec::scalar("slug"),
        FieldSpec::scalar("name"),
        FieldSpec::scalar("content"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eula_all_fields() {
        let eula = Eula::create_from(
            r#"{"id":120,"slug":"vmware-eula","name":"VMware EULA","content":"<p>terms</p>"}"#,
        )
        .unwrap();
        assert_eq!(eula.id, Some(120));
        assert_eq!(eula.slug.as_deref(), Some("vmware-eula"));
        assert_eq!(eula.name.as_deref(), Some("VMware EULA"));
        assert_eq!(eula.content.as_deref(), Some("<p>terms</p>"));
    }

    #[test]
    fn test_eula_partial() {
        let eula = Eula::create_from(r#"{"slug":"vmware-eula"}"#).unwrap();
        assert_eq!(eula.id, None);
        assert_eq!(eula.content, None);
    }

    #[test]
    fn test_eula_parse_error_names_record() {
        let err = Eula::create_from("<html>").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("EULA"));
    }
}
