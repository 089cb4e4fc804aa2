use crate::materializer::shape::{opaque, scalar};
use crate::materializer::{materialize, FieldSpec, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A version constraint a release places on another product.
///
/// `product` is kept as the raw JSON value the backend sent so it can be
/// handed back byte-for-byte; [`DependencySpecifier::product_ref`] gives a
/// typed view of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencySpecifier {
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Constraint expression such as `~> 1.2`.
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub specifier: Option<String>,
    #[serde(deserialize_with = "opaque", skip_serializing_if = "Option::is_none")]
    pub product: Option<Value>,
}

impl DependencySpecifier {
    /// Typed view of `product`. `None` when the value is absent or not a mapping.
    pub fn product_ref(&self) -> Option<ProductRef> {
        let product = self.product.as_ref().filter(|value| value.is_object())?;
        materialize(product.clone()).ok()
    }
}

impl Record for DependencySpecifier {
    const NAME: &'static str = "DependencySpecifier";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("id"),
        FieldSpec::scalar("specifier"),
        FieldSpec::opaque("product"),
    ];
}

/// The product a dependency specifier points at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRef {
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "scalar", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Record for ProductRef {
    const NAME: &'static str = "ProductRef";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("id"),
        FieldSpec::scalar("slug"),
        FieldSpec::scalar("name"),
    ];
}
