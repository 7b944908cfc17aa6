//! Validated source input loading
//!
//! Reads the raw character stream from a file path or stdin, enforcing the
//! compile-time size and line-count limits before the scanner sees it.
//! Empty input is valid: the scanner turns it into a lone EndOfInput token.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::constants::compile_time::source_input::{
    LARGE_INPUT_THRESHOLD, MAX_INPUT_SIZE, MAX_LINE_COUNT,
};
use crate::config::runtime::SourcePreferences;
use crate::log_debug;
use crate::log_success;
use crate::log_warning;
use crate::logging::codes::{self, Code};
use thiserror::Error;

// ============================================================================
// ERROR TYPES
// ============================================================================

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Input not found: {path}")]
    NotFound { path: String },

    #[error("Input too large: {size} bytes (max: {max_size})")]
    InputTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in input: {source_name}")]
    InvalidEncoding { source_name: String },

    #[error("I/O error reading input: {message}")]
    Io { message: String },

    #[error("Invalid input path: {path}")]
    InvalidPath { path: String },

    #[error("Input has too many lines: {lines} (max: {max_lines})")]
    TooManyLines { lines: usize, max_lines: usize },
}

impl SourceError {
    /// Map to the logging code registry
    pub fn error_code(&self) -> Code {
        match self {
            SourceError::NotFound { .. } => codes::source::INPUT_NOT_FOUND,
            SourceError::InputTooLarge { .. } => codes::source::INPUT_TOO_LARGE,
            SourceError::PermissionDenied { .. } => codes::source::PERMISSION_DENIED,
            SourceError::InvalidEncoding { .. } => codes::source::INVALID_ENCODING,
            SourceError::Io { .. } => codes::source::IO_ERROR,
            SourceError::InvalidPath { .. } => codes::source::INVALID_PATH,
            SourceError::TooManyLines { .. } => codes::source::TOO_MANY_LINES,
        }
    }
}

// ============================================================================
// INPUT TYPES
// ============================================================================

/// Metadata about a loaded input
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// File path, or None when the input came from stdin
    pub path: Option<PathBuf>,
    /// Size in bytes
    pub size: u64,
    /// Number of lines
    pub line_count: usize,
}

impl SourceMetadata {
    pub fn is_large_input(&self) -> bool {
        self.size > LARGE_INPUT_THRESHOLD
    }

    pub fn source_name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }

    pub fn human_readable_size(&self) -> String {
        if self.size < 1024 {
            format!("{} B", self.size)
        } else if self.size < 1024 * 1024 {
            format!("{:.1} KB", self.size as f64 / 1024.0)
        } else {
            format!("{:.1} MB", self.size as f64 / (1024.0 * 1024.0))
        }
    }
}

/// A validated input ready for scanning
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub text: String,
    pub metadata: SourceMetadata,
}

impl SourceInput {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

// ============================================================================
// READER
// ============================================================================

/// Reader with validation and optional performance logging
pub struct SourceReader {
    preferences: SourcePreferences,
}

impl SourceReader {
    pub fn new() -> Self {
        Self {
            preferences: SourcePreferences::default(),
        }
    }

    pub fn with_preferences(preferences: SourcePreferences) -> Self {
        Self { preferences }
    }

    /// Read and validate a file
    pub fn read_path(&self, file_path: &str) -> Result<SourceInput, SourceError> {
        let start_time = Instant::now();
        let path = Path::new(file_path);

        if !path.exists() {
            return Err(SourceError::NotFound {
                path: file_path.to_string(),
            });
        }
        if !path.is_file() {
            return Err(SourceError::InvalidPath {
                path: file_path.to_string(),
            });
        }

        let file_size = fs::metadata(path)
            .map_err(|e| SourceError::Io {
                message: e.to_string(),
            })?
            .len();

        // Size check before the read, so an oversized file is never loaded
        if file_size > MAX_INPUT_SIZE {
            return Err(SourceError::InputTooLarge {
                size: file_size,
                max_size: MAX_INPUT_SIZE,
            });
        }

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
                path: file_path.to_string(),
            },
            _ => SourceError::Io {
                message: e.to_string(),
            },
        })?;

        let text = String::from_utf8(bytes).map_err(|_| SourceError::InvalidEncoding {
            source_name: file_path.to_string(),
        })?;

        self.finish(text, Some(path.to_path_buf()), start_time)
    }

    /// Read and validate standard input
    pub fn read_stdin(&self) -> Result<SourceInput, SourceError> {
        let start_time = Instant::now();

        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => SourceError::InvalidEncoding {
                    source_name: "<stdin>".to_string(),
                },
                _ => SourceError::Io {
                    message: e.to_string(),
                },
            })?;

        let size = text.len() as u64;
        if size > MAX_INPUT_SIZE {
            return Err(SourceError::InputTooLarge {
                size,
                max_size: MAX_INPUT_SIZE,
            });
        }

        self.finish(text, None, start_time)
    }

    /// Shared validation and logging once the text is in memory
    fn finish(
        &self,
        text: String,
        path: Option<PathBuf>,
        start_time: Instant,
    ) -> Result<SourceInput, SourceError> {
        let line_count = text.lines().count();
        if line_count > MAX_LINE_COUNT {
            return Err(SourceError::TooManyLines {
                lines: line_count,
                max_lines: MAX_LINE_COUNT,
            });
        }

        let metadata = SourceMetadata {
            size: text.len() as u64,
            line_count,
            path,
        };

        if metadata.is_large_input() && self.preferences.warn_on_large_input {
            log_warning!("Input is unusually large",
                "source" => metadata.source_name(),
                "size" => metadata.human_readable_size()
            );
        }

        if self.preferences.enable_performance_logging {
            log_success!(codes::success::SOURCE_READ_SUCCESS, "Source input read",
                "source" => metadata.source_name(),
                "size_bytes" => metadata.size,
                "lines" => metadata.line_count,
                "duration_ms" => start_time.elapsed().as_secs_f64() * 1000.0
            );
        } else {
            log_debug!("Source input read", "source" => metadata.source_name());
        }

        Ok(SourceInput { text, metadata })
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}
