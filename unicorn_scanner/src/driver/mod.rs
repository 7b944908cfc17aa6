//! Token-code driver
//!
//! The consumer side of the scanner: pulls tokens one at a time and prints
//! each category's numeric code on its own line, finishing with the 0 code
//! of the EndOfInput sentinel. This is the whole observable output of the
//! binary; errors go to the logging system and stderr instead.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::log_success;
use crate::logging::codes;
use crate::scanner::{ScanError, Scanner};
use crate::source::{self, SourceError, SourceInput};
use thiserror::Error;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Failures of the whole drive, staged by origin
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Source input stage failed: {0}")]
    Source(#[from] SourceError),

    #[error("Lexical scan stage failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to write token codes: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// Logging code of the underlying stage error
    pub fn error_code(&self) -> codes::Code {
        match self {
            DriverError::Source(error) => error.error_code(),
            DriverError::Scan(error) => error.error_code(),
            DriverError::Output(_) => codes::system::INTERNAL_ERROR,
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Summary of one completed drive
#[derive(Debug, Clone)]
pub struct DriveReport {
    /// Tokens emitted, sentinel excluded
    pub tokens_emitted: usize,
    /// Lines seen in the input
    pub lines_seen: u32,
    pub duration: Duration,
}

// ============================================================================
// DRIVE LOOP
// ============================================================================

/// Pull tokens from a fresh scanner over `input` and write one numeric
/// category code per line, ending with the sentinel's 0.
pub fn drive<W: Write>(input: &SourceInput, out: &mut W) -> Result<DriveReport, DriverError> {
    let start_time = Instant::now();
    let mut scanner = Scanner::new(&input.text);
    let mut tokens_emitted = 0usize;

    loop {
        let token = scanner.next_token()?;
        writeln!(out, "{}", token.code())?;
        if token.is_end_of_input() {
            break;
        }
        tokens_emitted += 1;
    }
    out.flush()?;

    let report = DriveReport {
        tokens_emitted,
        lines_seen: scanner.line(),
        duration: start_time.elapsed(),
    };

    log_success!(codes::success::SCAN_COMPLETE, "Token stream drained",
        "source" => input.metadata.source_name(),
        "tokens" => report.tokens_emitted,
        "lines" => report.lines_seen,
        "duration_ms" => report.duration.as_secs_f64() * 1000.0
    );

    Ok(report)
}

/// Read a file and drive its token codes to stdout
pub fn run_file(file_path: &str) -> Result<DriveReport, DriverError> {
    let input = source::read_path(file_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    drive(&input, &mut out)
}

/// Read stdin and drive its token codes to stdout
pub fn run_stdin() -> Result<DriveReport, DriverError> {
    let input = source::read_stdin()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    drive(&input, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceMetadata;
    use assert_matches::assert_matches;

    fn input_from(text: &str) -> SourceInput {
        SourceInput {
            text: text.to_string(),
            metadata: SourceMetadata {
                path: None,
                size: text.len() as u64,
                line_count: text.lines().count(),
            },
        }
    }

    fn drive_to_string(text: &str) -> Result<(String, DriveReport), DriverError> {
        let input = input_from(text);
        let mut out = Vec::new();
        let report = drive(&input, &mut out)?;
        Ok((String::from_utf8(out).unwrap(), report))
    }

    #[test]
    fn test_mixed_input_code_sequence() {
        let (output, report) = drive_to_string("x1 42 \"hi\" +").unwrap();
        assert_eq!(output, "4\n3\n2\n1\n0\n");
        assert_eq!(report.tokens_emitted, 4);
    }

    #[test]
    fn test_empty_input_emits_only_sentinel() {
        let (output, report) = drive_to_string("").unwrap();
        assert_eq!(output, "0\n");
        assert_eq!(report.tokens_emitted, 0);
    }

    #[test]
    fn test_whitespace_only_input_emits_only_sentinel() {
        let (output, _) = drive_to_string("  \n\t \n").unwrap();
        assert_eq!(output, "0\n");
    }

    #[test]
    fn test_multiline_input_report() {
        let (output, report) = drive_to_string("a\nb\nc").unwrap();
        assert_eq!(output, "4\n4\n4\n0\n");
        assert_eq!(report.lines_seen, 3);
    }

    #[test]
    fn test_default_config_keeps_code_stream_clean() {
        // Default preferences suppress info events, so nothing but category
        // codes can reach stdout while the drive runs
        let service = crate::logging::service::create_configured_service();
        assert!(!service.should_log(crate::logging::LogLevel::Info));

        let (output, _) = drive_to_string("x1 42 \"hi\" +").unwrap();
        assert_eq!(output, "4\n3\n2\n1\n0\n");
    }

    #[test]
    fn test_scan_error_propagates() {
        let result = drive_to_string("ok #");
        assert_matches!(
            result,
            Err(DriverError::Scan(ScanError::InvalidCharacter { character: '#', .. }))
        );
    }

    #[test]
    fn test_partial_output_before_error() {
        let input = input_from("a + #");
        let mut out = Vec::new();
        let result = drive(&input, &mut out);

        assert!(result.is_err());
        // Codes already emitted stay emitted; the drive is fail-fast, not atomic
        assert_eq!(String::from_utf8(out).unwrap(), "4\n1\n");
    }

    #[test]
    fn test_missing_file_maps_to_source_stage() {
        let result = run_file("/nonexistent/input.uni");
        assert_matches!(result, Err(DriverError::Source(SourceError::NotFound { .. })));
    }

    #[test]
    fn test_error_code_passthrough() {
        let error = DriverError::Scan(ScanError::UnterminatedText { line: 1 });
        assert_eq!(error.error_code().as_str(), "E021");

        let error = DriverError::Source(SourceError::NotFound {
            path: "x".to_string(),
        });
        assert_eq!(error.error_code().as_str(), "E005");
    }
}
