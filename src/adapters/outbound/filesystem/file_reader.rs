use crate::application::dto::PayloadInput;
use crate::ports::outbound::PayloadReader;
use crate::shared::error::AppError;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Largest payload accepted from a file or stdin (32 MiB)
const MAX_PAYLOAD_SIZE: u64 = 32 * 1024 * 1024;

/// FileSystemReader adapter for loading payload text
///
/// Implements the PayloadReader port for payload files, stdin and inline
/// text. Files must be regular, non-symlink files under the size limit.
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_PAYLOAD_SIZE,
        }
    }

    /// Reader with a custom size limit in bytes.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    fn safe_read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() && fs::symlink_metadata(path).is_err() {
            return Err(AppError::PayloadNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path, or pass '-' to read the payload from stdin."
                    .to_string(),
            }
            .into());
        }

        let metadata = fs::symlink_metadata(path).map_err(|e| AppError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(AppError::SecurityError {
                path: path.to_path_buf(),
                reason: "Payload path is a symbolic link".to_string(),
                hint: "Pass the path of the target file instead".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(AppError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        if metadata.len() > self.max_size {
            return Err(AppError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "Payload is too large ({} bytes). Maximum allowed size is {} bytes.",
                    metadata.len(),
                    self.max_size
                ),
                hint: "Split the payload into smaller files".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            AppError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_stdin(&self) -> Result<String> {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .take(self.max_size + 1)
            .read_to_string(&mut buffer)
            .context("Failed to read payload from stdin")?;

        if buffer.len() as u64 > self.max_size {
            anyhow::bail!(
                "Payload on stdin exceeds the maximum allowed size of {} bytes",
                self.max_size
            );
        }
        Ok(buffer)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadReader for FileSystemReader {
    fn read_payload(&self, input: &PayloadInput) -> Result<String> {
        match input {
            PayloadInput::Inline(text) => Ok(text.clone()),
            PayloadInput::File(path) => self.safe_read_file(path),
            PayloadInput::Stdin => self.read_stdin(),
        }
    }
}
