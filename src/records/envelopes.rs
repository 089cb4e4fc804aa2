//! Response envelopes returned by the portal's release endpoints.
//!
//! Each envelope wraps one record or a list of records under a single key.

use super::{Dependency, DependencySpecifier, Eula, Product, ProductFile, Release};
use crate::materializer::shape::{record, sequence};
use crate::materializer::{FieldSpec, Record};
use serde::{Deserialize, Serialize};

/// `GET /api/v2/products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductList {
    #[serde(deserialize_with = "sequence", skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl Record for ProductList {
    const NAME: &'static str = "ProductList";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::sequence("products", Product::FIELDS)];
}

/// `GET /api/v2/products/{slug}/releases`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseList {
    #[serde(deserialize_with = "sequence", skip_serializing_if = "Option::is_none")]
    pub releases: Option<Vec<Release>>,
}

impl ReleaseList {
    /// Looks up a release by id.
    pub fn find(&self, release_id: i64) -> Option<&Release> {
        self.releases
            .as_deref()?
            .iter()
            .find(|release| release.id == Some(release_id))
    }
}

impl Record for ReleaseList {
    const NAME: &'static str = "ReleaseList";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::sequence("releases", Release::FIELDS)];
}

/// `GET /api/v2/products/{slug}/releases/{id}`, reduced to its EULA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDetail {
    #[serde(deserialize_with = "record", skip_serializing_if = "Option::is_none")]
    pub eula: Option<Eula>,
}

impl Record for ReleaseDetail {
    const NAME: &'static str = "ReleaseDetail";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::record("eula", Eula::FIELDS)];
}

/// `GET /api/v2/products/{slug}/releases/{id}/product_files`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFileList {
    #[serde(deserialize_with = "sequence", skip_serializing_if = "Option::is_none")]
    pub product_files: Option<Vec<ProductFile>>,
}

impl ProductFileList {
    /// Looks up a file by id.
    pub fn find(&self, file_id: i64) -> Option<&ProductFile> {
        self.product_files
            .as_deref()?
            .iter()
            .find(|file| file.id == Some(file_id))
    }
}

impl Record for ProductFileList {
    const NAME: &'static str = "ProductFileList";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::sequence("product_files", ProductFile::FIELDS)];
}

/// `GET /api/v2/products/{slug}/releases/{id}/dependencies`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyList {
    #[serde(deserialize_with = "sequence", skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
}

impl Record for DependencyList {
    const NAME: &'static str = "DependencyList";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::sequence("dependencies", Dependency::FIELDS)];
}

/// `GET /api/v2/products/{slug}/releases/{id}/dependency_specifiers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencySpecifierList {
    #[serde(deserialize_with = "sequence", skip_serializing_if = "Option::is_none")]
    pub dependency_specifiers: Option<Vec<DependencySpecifier>>,
}

impl Record for DependencySpecifierList {
    const NAME: &'static str = "DependencySpecifierList";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::sequence(
        "dependency_specifiers",
        DependencySpecifier::FIELDS,
    )];
}
