//! Record shapes produced by the download-portal backend
//!
//! Every field is optional: a key missing from the payload is `None`,
//! never a default value.

mod dependency;
mod dependency_specifier;
mod envelopes;
mod eula;
mod events;
mod kind;
mod product;
mod product_file;
mod release;

pub use dependency::Dependency;
pub use dependency_specifier::{DependencySpecifier, ProductRef};
pub use envelopes::{
    DependencyList, DependencySpecifierList, ProductFileList, ProductList, ReleaseDetail,
    ReleaseList,
};
pub use eula::Eula;
pub use events::{
    DownloadCancelled, DownloadComplete, DownloadProgress, ModelCancelled, ModelComplete,
    ModelStatus,
};
pub use kind::RecordKind;
pub use product::Product;
pub use product_file::ProductFile;
pub use release::Release;
