//! Source input module

pub mod reader;

pub use reader::{SourceError, SourceInput, SourceMetadata, SourceReader};

/// Read a file with default preferences
pub fn read_path(file_path: &str) -> Result<SourceInput, SourceError> {
    SourceReader::new().read_path(file_path)
}

/// Read stdin with default preferences
pub fn read_stdin() -> Result<SourceInput, SourceError> {
    SourceReader::new().read_stdin()
}
