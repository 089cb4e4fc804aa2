use crate::application::dto::PayloadInput;
use crate::shared::Result;

/// PayloadReader port for loading raw payload text
///
/// This port abstracts where a backend payload comes from (a file,
/// stdin, or an inline argument) so the use case only sees text.
pub trait PayloadReader {
    /// Reads the full payload text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The payload file does not exist or is not a regular file
    /// - The file exceeds the payload size limit
    /// - Reading stdin or the file fails
    fn read_payload(&self, input: &PayloadInput) -> Result<String>;
}
