//! tanzu-records - typed records for download-portal backend payloads
//!
//! This library turns loosely-typed JSON (HTTP response bodies, event
//! payloads) into typed records. Every record declares its field shapes up
//! front; a value that does not fit its declared shape is left absent
//! instead of failing the whole payload.
//!
//! # Architecture
//!
//! - **Materializer** (`materializer`): the `Record` trait, declared field shapes
//!   and the tolerant conversion from JSON
//! - **Records** (`records`): the backend's record shapes, envelopes and events
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types
//!
//! # Example
//!
//! ```
//! use tanzu_records::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let dependency = Dependency::create_from(r#"{"release":{"id":1,"version":"1.0"}}"#)?;
//! let release = dependency.release.unwrap_or_default();
//! assert_eq!(release.id, Some(1));
//! assert_eq!(release.version.as_deref(), Some("1.0"));
//! assert_eq!(release.release_date, None);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod materializer;
pub mod ports;
pub mod records;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        MaterializeRequest, MaterializeResponse, OutputFormat, PayloadInput,
    };
    pub use crate::application::use_cases::MaterializePayloadUseCase;
    pub use crate::materializer::{
        materialize, materialize_sequence, FieldShape, FieldSpec, Record, Source,
    };
    pub use crate::ports::outbound::{OutputPresenter, PayloadReader, RecordFormatter};
    pub use crate::records::{
        Dependency, DependencyList, DependencySpecifier, DependencySpecifierList,
        DownloadCancelled, DownloadComplete, DownloadProgress, Eula, ModelCancelled,
        ModelComplete, ModelStatus, Product, ProductFile, ProductFileList, ProductList,
        ProductRef, RecordKind, Release, ReleaseDetail, ReleaseList,
    };
    pub use crate::shared::{ExitCode, RecordError, Result};
}
