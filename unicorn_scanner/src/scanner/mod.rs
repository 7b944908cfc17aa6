//! Lexical scanning module
//!
//! Public API over the pull-based `Scanner`. Most callers either drive the
//! scanner token by token (the driver does) or use `scan_source` to collect
//! the whole token stream at once.

pub mod scanner;

pub use scanner::{ScanError, ScanMetrics, Scanner};

use crate::config::constants::compile_time::scanner::{
    MAX_LEXEME_LENGTH, MAX_TEXT_SIZE, MAX_TOKEN_COUNT,
};
use crate::config::runtime::ScannerPreferences;
use crate::log_success;
use crate::logging::codes;
use crate::tokens::Token;

/// Create a scanner with default preferences
pub fn create_scanner(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

/// Create a scanner with explicit preferences
pub fn create_scanner_with_preferences(
    source: &str,
    preferences: ScannerPreferences,
) -> Scanner<'_> {
    Scanner::with_preferences(source, preferences)
}

/// Scan an entire source string into a token vector.
///
/// The EndOfInput sentinel is the last element on success. Fails fast on the
/// first lexical error.
pub fn scan_source(source: &str) -> Result<Vec<Token>, ScanError> {
    scan_source_with_preferences(source, ScannerPreferences::default())
}

/// Scan with explicit preferences
pub fn scan_source_with_preferences(
    source: &str,
    preferences: ScannerPreferences,
) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::with_preferences(source, preferences);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.next_token()?;
        let done = token.is_end_of_input();
        tokens.push(token);
        if done {
            break;
        }
    }

    log_success!(codes::success::SCAN_COMPLETE, "Source scanned",
        "tokens" => tokens.len(),
        "lines" => scanner.line()
    );

    Ok(tokens)
}

/// Compile-time scanner limits, exposed for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct ScannerLimits {
    pub max_lexeme_length: usize,
    pub max_text_size: usize,
    pub max_token_count: usize,
}

/// Get the active compile-time limits
pub fn get_scanner_limits() -> ScannerLimits {
    ScannerLimits {
        max_lexeme_length: MAX_LEXEME_LENGTH,
        max_text_size: MAX_TEXT_SIZE,
        max_token_count: MAX_TOKEN_COUNT,
    }
}

/// Sanity-check limits and code registry wiring at startup
pub fn validate_scanner_limits() -> Result<(), String> {
    if MAX_LEXEME_LENGTH == 0 {
        return Err("Maximum lexeme length cannot be zero".to_string());
    }
    if MAX_TEXT_SIZE <= MAX_LEXEME_LENGTH {
        return Err("Maximum text size must exceed maximum lexeme length".to_string());
    }
    if MAX_TOKEN_COUNT == 0 {
        return Err("Maximum token count cannot be zero".to_string());
    }

    for code in ["E020", "E021", "E022", "E023", "E024"] {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for scanner error code: {}", code));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenCategory;
    use assert_matches::assert_matches;

    #[test]
    fn test_scan_source_ends_with_sentinel() {
        let tokens = scan_source("a + 1").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.last().unwrap().is_end_of_input());
    }

    #[test]
    fn test_scan_source_empty_input() {
        let tokens = scan_source("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenCategory::EndOfInput);
    }

    #[test]
    fn test_scan_source_fails_fast() {
        let result = scan_source("good @ never_reached");
        assert_matches!(result, Err(ScanError::InvalidCharacter { character: '@', .. }));
    }

    #[test]
    fn test_create_scanner_starts_at_line_one() {
        let scanner = create_scanner("input");
        assert_eq!(scanner.line(), 1);
        assert!(!scanner.is_finished());
    }

    #[test]
    fn test_limits_validation_passes() {
        assert!(validate_scanner_limits().is_ok());
    }

    #[test]
    fn test_limits_accessor() {
        let limits = get_scanner_limits();
        assert_eq!(limits.max_lexeme_length, MAX_LEXEME_LENGTH);
        assert_eq!(limits.max_text_size, MAX_TEXT_SIZE);
        assert_eq!(limits.max_token_count, MAX_TOKEN_COUNT);
    }
}
