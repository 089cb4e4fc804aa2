use crate::application::dto::MaterializeResponse;
use crate::shared::Result;

/// RecordFormatter port for rendering materialized records
pub trait RecordFormatter {
    /// Formats the records of a materialize response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &MaterializeResponse) -> Result<String>;
}
