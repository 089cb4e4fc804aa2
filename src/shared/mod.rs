/// Shared error types and result alias
pub mod error;
pub mod result;

pub use error::{AppError, ExitCode, RecordError};
pub use result::Result;
