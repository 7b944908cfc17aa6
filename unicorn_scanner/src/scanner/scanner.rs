//! Lexical scanner for the Unicorn language
//!
//! `Scanner` owns the full scan state: the character cursor, the 1-based
//! line counter, and the scan phase. There is no shared or process-global
//! state; one scanner handles one input. Tokens are pulled one at a time
//! with `next_token()`, each call consuming exactly the characters of one
//! lexeme (plus any leading whitespace).

use std::iter::Peekable;
use std::str::CharIndices;

use crate::config::constants::compile_time::scanner::{
    MAX_LEXEME_LENGTH, MAX_TEXT_SIZE, MAX_TOKEN_COUNT,
};
use crate::config::runtime::ScannerPreferences;
use crate::log_debug;
use crate::log_error;
use crate::logging::codes::{self, Code};
use crate::tokens::{
    is_identifier_continue, is_identifier_start, is_symbol_char, Token, TokenCategory,
    TEXT_DELIMITER, TEXT_ESCAPE,
};
use crate::utils::{Position, Span};
use thiserror::Error;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Fatal lexical errors. The scanner does not recover: the first error moves
/// it to the Errored phase and every later call returns the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Invalid character '{character}' at line {line}")]
    InvalidCharacter { character: char, line: u32 },

    #[error("Unterminated text literal starting at line {line}")]
    UnterminatedText { line: u32 },

    #[error("Lexeme too long at line {line}: {length} bytes (max: {max})")]
    LexemeTooLong { length: usize, max: usize, line: u32 },

    #[error("Text literal too large at line {line}: {size} bytes (max: {max})")]
    TextTooLarge { size: usize, max: usize, line: u32 },

    #[error("Too many tokens: {count} (max: {max})")]
    TooManyTokens { count: usize, max: usize },
}

impl ScanError {
    /// Map to the logging code registry
    pub fn error_code(&self) -> Code {
        match self {
            ScanError::InvalidCharacter { .. } => codes::scanner::INVALID_CHARACTER,
            ScanError::UnterminatedText { .. } => codes::scanner::UNTERMINATED_TEXT,
            ScanError::LexemeTooLong { .. } => codes::scanner::LEXEME_TOO_LONG,
            ScanError::TextTooLarge { .. } => codes::scanner::TEXT_TOO_LARGE,
            ScanError::TooManyTokens { .. } => codes::scanner::TOO_MANY_TOKENS,
        }
    }

    /// Line the error was detected on, where one is known
    pub fn line(&self) -> Option<u32> {
        match self {
            ScanError::InvalidCharacter { line, .. }
            | ScanError::UnterminatedText { line }
            | ScanError::LexemeTooLong { line, .. }
            | ScanError::TextTooLarge { line, .. } => Some(*line),
            ScanError::TooManyTokens { .. } => None,
        }
    }
}

// ============================================================================
// SCAN PHASE
// ============================================================================

/// Scanner lifecycle. AtEnd and Errored are terminal: repeated calls keep
/// returning the sentinel or the stored error without consuming input.
#[derive(Debug, Clone, PartialEq)]
enum ScanPhase {
    Scanning,
    AtEnd,
    Errored(ScanError),
}

// ============================================================================
// METRICS
// ============================================================================

/// Token statistics collected during scanning
#[derive(Debug, Clone, Default)]
pub struct ScanMetrics {
    pub total_tokens: usize,
    pub symbol_tokens: usize,
    pub text_tokens: usize,
    pub number_tokens: usize,
    pub identifier_tokens: usize,
    pub invalid_characters: usize,
    pub max_lexeme_length: usize,
}

impl ScanMetrics {
    pub fn record_token(&mut self, token: &Token, preferences: &ScannerPreferences) {
        self.total_tokens += 1;

        match token.category {
            TokenCategory::Symbol => self.symbol_tokens += 1,
            TokenCategory::Text => self.text_tokens += 1,
            TokenCategory::Number => self.number_tokens += 1,
            TokenCategory::Identifier => self.identifier_tokens += 1,
            TokenCategory::EndOfInput => {}
        }

        if preferences.collect_detailed_metrics {
            self.max_lexeme_length = self.max_lexeme_length.max(token.lexeme.len());
        }

        if preferences.log_token_statistics {
            log_debug!("Token scanned",
                "category" => token.category,
                "lexeme_len" => token.lexeme.len(),
                "line" => token.line
            );
        }
    }

    pub fn record_invalid_character(&mut self) {
        self.invalid_characters += 1;
    }
}

// ============================================================================
// SCANNER
// ============================================================================

/// Pull-based lexical scanner over a borrowed source string.
pub struct Scanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: u32,
    line_start_offset: usize,
    phase: ScanPhase,
    tokens_produced: usize,
    metrics: ScanMetrics,
    preferences: ScannerPreferences,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_preferences(source, ScannerPreferences::default())
    }

    pub fn with_preferences(source: &'a str, preferences: ScannerPreferences) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            line_start_offset: 0,
            phase: ScanPhase::Scanning,
            tokens_produced: 0,
            metrics: ScanMetrics::default(),
            preferences,
        }
    }

    /// Current 1-based line number
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current cursor position. After an error this is where scanning stopped.
    pub fn position(&mut self) -> Position {
        let offset = self
            .chars
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len());
        let column = (offset - self.line_start_offset) as u32 + 1;
        Position::new(offset, self.line, column)
    }

    /// True once the scanner has reached a terminal phase
    pub fn is_finished(&self) -> bool {
        !matches!(self.phase, ScanPhase::Scanning)
    }

    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &ScannerPreferences {
        &self.preferences
    }

    /// Produce the next token.
    ///
    /// Returns the EndOfInput sentinel once input is exhausted and keeps
    /// returning it on further calls. After a failure the scanner is stuck:
    /// the same error comes back on every call.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        match &self.phase {
            ScanPhase::AtEnd => return Ok(Token::end_of_input(self.line)),
            ScanPhase::Errored(error) => return Err(error.clone()),
            ScanPhase::Scanning => {}
        }

        match self.scan_token() {
            Ok(token) => {
                if token.is_end_of_input() {
                    self.phase = ScanPhase::AtEnd;
                } else {
                    self.tokens_produced += 1;
                }
                self.metrics.record_token(&token, &self.preferences);
                Ok(token)
            }
            Err(error) => {
                if matches!(error, ScanError::InvalidCharacter { .. }) {
                    self.metrics.record_invalid_character();
                }
                self.report_error(&error);
                self.phase = ScanPhase::Errored(error.clone());
                Err(error)
            }
        }
    }

    fn report_error(&mut self, error: &ScanError) {
        let code = error.error_code();

        if self.preferences.include_position_in_errors {
            let error_span = Span::single(self.position());
            log_error!(code, "Lexical scan failed", span = error_span,
                "detail" => error,
                "tokens_produced" => self.tokens_produced
            );
        } else {
            log_error!(code, "Lexical scan failed",
                "detail" => error,
                "tokens_produced" => self.tokens_produced
            );
        }
    }

    // ------------------------------------------------------------------------
    // Token scanning
    // ------------------------------------------------------------------------

    fn scan_token(&mut self) -> Result<Token, ScanError> {
        self.skip_whitespace();

        let line = self.line;
        let (start, ch) = match self.chars.peek().copied() {
            Some(pair) => pair,
            None => return Ok(Token::end_of_input(line)),
        };

        if self.tokens_produced >= MAX_TOKEN_COUNT {
            return Err(ScanError::TooManyTokens {
                count: self.tokens_produced,
                max: MAX_TOKEN_COUNT,
            });
        }

        if is_identifier_start(ch) {
            self.chars.next();
            self.scan_identifier(start, line)
        } else if ch.is_ascii_digit() {
            self.chars.next();
            self.scan_number(start, line)
        } else if ch == TEXT_DELIMITER {
            self.chars.next();
            self.scan_text(start, line)
        } else if is_symbol_char(ch) {
            self.chars.next();
            let lexeme = self.lexeme_from(start);
            Ok(Token::new(TokenCategory::Symbol, lexeme, line))
        } else {
            Err(ScanError::InvalidCharacter {
                character: ch,
                line,
            })
        }
    }

    /// Skip whitespace, counting line terminators. CRLF counts as one line.
    fn skip_whitespace(&mut self) {
        while let Some(&(offset, ch)) = self.chars.peek() {
            match ch {
                ' ' | '\t' => {
                    self.chars.next();
                }
                '\n' | '\r' => {
                    self.chars.next();
                    self.advance_line_at(offset, ch);
                }
                _ => break,
            }
        }
    }

    /// Count a consumed line terminator at `offset`, folding the trailing
    /// '\n' of a CRLF pair into the same line break.
    fn advance_line_at(&mut self, offset: usize, ch: char) {
        let mut next_line_start = offset + 1;
        if ch == '\r' && matches!(self.chars.peek(), Some((_, '\n'))) {
            self.chars.next();
            next_line_start += 1;
        }
        self.line += 1;
        self.line_start_offset = next_line_start;
    }

    fn scan_identifier(&mut self, start: usize, line: u32) -> Result<Token, ScanError> {
        while let Some(&(_, ch)) = self.chars.peek() {
            if is_identifier_continue(ch) {
                self.chars.next();
            } else {
                break;
            }
        }

        let lexeme = self.lexeme_from(start);
        if lexeme.len() > MAX_LEXEME_LENGTH {
            return Err(ScanError::LexemeTooLong {
                length: lexeme.len(),
                max: MAX_LEXEME_LENGTH,
                line,
            });
        }

        Ok(Token::new(TokenCategory::Identifier, lexeme, line))
    }

    /// Digit run with at most one embedded decimal point. The point is only
    /// consumed when a digit follows, so `12.` scans as Number then Symbol.
    fn scan_number(&mut self, start: usize, line: u32) -> Result<Token, ScanError> {
        let mut has_decimal_point = false;

        while let Some(&(_, ch)) = self.chars.peek() {
            match ch {
                '0'..='9' => {
                    self.chars.next();
                }
                '.' if !has_decimal_point => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    if matches!(lookahead.peek(), Some((_, next)) if next.is_ascii_digit()) {
                        has_decimal_point = true;
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }

        let lexeme = self.lexeme_from(start);
        if lexeme.len() > MAX_LEXEME_LENGTH {
            return Err(ScanError::LexemeTooLong {
                length: lexeme.len(),
                max: MAX_LEXEME_LENGTH,
                line,
            });
        }

        Ok(Token::new(TokenCategory::Number, lexeme, line))
    }

    /// Double-quote delimited text. A backslash escapes the following
    /// character, so an escaped quote does not terminate the literal. The
    /// lexeme keeps delimiters and escape sequences verbatim.
    fn scan_text(&mut self, start: usize, line: u32) -> Result<Token, ScanError> {
        loop {
            match self.chars.next() {
                Some((offset, ch)) if ch == TEXT_DELIMITER => {
                    let size = offset - start + 1;
                    if size > MAX_TEXT_SIZE {
                        return Err(ScanError::TextTooLarge {
                            size,
                            max: MAX_TEXT_SIZE,
                            line,
                        });
                    }
                    let lexeme = self.lexeme_from(start);
                    return Ok(Token::new(TokenCategory::Text, lexeme, line));
                }
                Some((_, ch)) if ch == TEXT_ESCAPE => match self.chars.next() {
                    Some((offset, esc @ ('\n' | '\r'))) => self.advance_line_at(offset, esc),
                    Some(_) => {}
                    None => return Err(ScanError::UnterminatedText { line }),
                },
                Some((offset, ch @ ('\n' | '\r'))) => self.advance_line_at(offset, ch),
                Some(_) => {}
                None => return Err(ScanError::UnterminatedText { line }),
            }
        }
    }

    /// Exact consumed substring from `start` to the cursor
    fn lexeme_from(&mut self, start: usize) -> String {
        let end = self
            .chars
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len());
        self.source[start..end].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn categories(source: &str) -> Vec<TokenCategory> {
        let mut scanner = Scanner::new(source);
        let mut result = Vec::new();
        loop {
            let token = scanner.next_token().expect("unexpected scan error");
            let done = token.is_end_of_input();
            result.push(token.category);
            if done {
                break;
            }
        }
        result
    }

    #[test]
    fn test_empty_input_yields_end_of_input() {
        let mut scanner = Scanner::new("");
        let token = scanner.next_token().unwrap();
        assert!(token.is_end_of_input());
        assert_eq!(token.line, 1);
    }

    #[test]
    fn test_whitespace_only_input() {
        let mut scanner = Scanner::new("   \t  \n  ");
        let token = scanner.next_token().unwrap();
        assert!(token.is_end_of_input());
        assert_eq!(token.line, 2);
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().unwrap().category, TokenCategory::Identifier);

        for _ in 0..3 {
            let token = scanner.next_token().unwrap();
            assert!(token.is_end_of_input());
        }
        assert!(scanner.is_finished());
    }

    #[test]
    fn test_identifier_lexeme_preserved() {
        let mut scanner = Scanner::new("counter_1");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.category, TokenCategory::Identifier);
        assert_eq!(token.lexeme, "counter_1");
        assert_eq!(token.line, 1);
    }

    #[test]
    fn test_underscore_starts_identifier() {
        let mut scanner = Scanner::new("_private");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.category, TokenCategory::Identifier);
        assert_eq!(token.lexeme, "_private");
    }

    #[test]
    fn test_number_lexeme_preserved() {
        let mut scanner = Scanner::new("12345");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.category, TokenCategory::Number);
        assert_eq!(token.lexeme, "12345");
    }

    #[test]
    fn test_number_with_decimal_point() {
        let mut scanner = Scanner::new("3.14");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.category, TokenCategory::Number);
        assert_eq!(token.lexeme, "3.14");
    }

    #[test]
    fn test_trailing_dot_not_part_of_number() {
        let mut scanner = Scanner::new("12.");
        let number = scanner.next_token().unwrap();
        assert_eq!(number.category, TokenCategory::Number);
        assert_eq!(number.lexeme, "12");

        let dot = scanner.next_token().unwrap();
        assert_eq!(dot.category, TokenCategory::Symbol);
        assert_eq!(dot.lexeme, ".");
    }

    #[test]
    fn test_second_decimal_point_splits_token() {
        let mut scanner = Scanner::new("1.2.3");
        let first = scanner.next_token().unwrap();
        assert_eq!(first.lexeme, "1.2");

        let dot = scanner.next_token().unwrap();
        assert_eq!(dot.category, TokenCategory::Symbol);

        let second = scanner.next_token().unwrap();
        assert_eq!(second.lexeme, "3");
    }

    #[test]
    fn test_minus_is_separate_symbol() {
        let mut scanner = Scanner::new("-3");
        let minus = scanner.next_token().unwrap();
        assert_eq!(minus.category, TokenCategory::Symbol);
        assert_eq!(minus.lexeme, "-");

        let number = scanner.next_token().unwrap();
        assert_eq!(number.category, TokenCategory::Number);
        assert_eq!(number.lexeme, "3");
    }

    #[test]
    fn test_text_lexeme_includes_delimiters() {
        let mut scanner = Scanner::new("\"hello\"");
        let token = scanner.next_token().unwrap();
        assert_eq!(token.category, TokenCategory::Text);
        assert_eq!(token.lexeme, "\"hello\"");
    }

    #[test]
    fn test_text_with_escaped_quote() {
        let mut scanner = Scanner::new(r#""say \"hi\"""#);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.category, TokenCategory::Text);
        assert_eq!(token.lexeme, r#""say \"hi\"""#);
        assert!(scanner.next_token().unwrap().is_end_of_input());
    }

    #[test]
    fn test_unterminated_text_is_fatal() {
        let mut scanner = Scanner::new("\"never closed");
        let error = scanner.next_token().unwrap_err();
        assert_matches!(error, ScanError::UnterminatedText { line: 1 });
    }

    #[test]
    fn test_invalid_character_reports_line() {
        let mut scanner = Scanner::new("#");
        let error = scanner.next_token().unwrap_err();
        assert_eq!(
            error,
            ScanError::InvalidCharacter {
                character: '#',
                line: 1
            }
        );
    }

    #[test]
    fn test_errored_phase_is_terminal() {
        let mut scanner = Scanner::new("ok # more");
        assert!(scanner.next_token().is_ok());

        let first_error = scanner.next_token().unwrap_err();
        for _ in 0..3 {
            let repeat = scanner.next_token().unwrap_err();
            assert_eq!(repeat, first_error);
        }
        assert!(scanner.is_finished());
    }

    #[test]
    fn test_line_tracking_across_newlines() {
        let mut scanner = Scanner::new("a\nb");
        let a = scanner.next_token().unwrap();
        assert_eq!(a.line, 1);

        let b = scanner.next_token().unwrap();
        assert_eq!(b.line, 2);
    }

    #[test]
    fn test_crlf_counts_one_line() {
        let mut scanner = Scanner::new("a\r\nb\rc");
        assert_eq!(scanner.next_token().unwrap().line, 1);
        assert_eq!(scanner.next_token().unwrap().line, 2);
        assert_eq!(scanner.next_token().unwrap().line, 3);
    }

    #[test]
    fn test_carriage_return_inside_text_advances_line() {
        let mut scanner = Scanner::new("\"a\rb\" x");
        let text = scanner.next_token().unwrap();
        assert_eq!(text.category, TokenCategory::Text);
        assert_eq!(text.line, 1);
        assert_eq!(scanner.next_token().unwrap().line, 2);

        // CRLF inside a literal still counts one line
        let mut scanner = Scanner::new("\"a\r\nb\" x");
        assert_eq!(scanner.next_token().unwrap().line, 1);
        assert_eq!(scanner.next_token().unwrap().line, 2);
    }

    #[test]
    fn test_error_position_points_at_offending_character() {
        let mut scanner = Scanner::new("x\nlong #");
        scanner.next_token().unwrap();
        scanner.next_token().unwrap();

        let error = scanner.next_token().unwrap_err();
        assert_matches!(
            error,
            ScanError::InvalidCharacter {
                character: '#',
                line: 2
            }
        );

        let position = scanner.position();
        assert_eq!(position.line, 2);
        assert_eq!(position.column, 6);
        assert_eq!(position.offset, 7);
    }

    #[test]
    fn test_newline_inside_text_advances_line() {
        let mut scanner = Scanner::new("\"a\nb\" x");
        let text = scanner.next_token().unwrap();
        assert_eq!(text.category, TokenCategory::Text);
        assert_eq!(text.line, 1);

        let x = scanner.next_token().unwrap();
        assert_eq!(x.line, 2);
    }

    #[test]
    fn test_mixed_sequence_categories() {
        assert_eq!(
            categories("x1 42 \"hi\" +"),
            vec![
                TokenCategory::Identifier,
                TokenCategory::Number,
                TokenCategory::Text,
                TokenCategory::Symbol,
                TokenCategory::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_adjacent_tokens_without_whitespace() {
        assert_eq!(
            categories("foo(1,2)"),
            vec![
                TokenCategory::Identifier,
                TokenCategory::Symbol,
                TokenCategory::Number,
                TokenCategory::Symbol,
                TokenCategory::Number,
                TokenCategory::Symbol,
                TokenCategory::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_identifier_too_long_is_fatal() {
        let source = "a".repeat(MAX_LEXEME_LENGTH + 1);
        let mut scanner = Scanner::new(&source);
        let error = scanner.next_token().unwrap_err();
        assert_matches!(error, ScanError::LexemeTooLong { .. });
    }

    #[test]
    fn test_metrics_collection() {
        let mut scanner = Scanner::new("x 1 \"t\" ;");
        while !scanner.next_token().unwrap().is_end_of_input() {}

        let metrics = scanner.metrics();
        assert_eq!(metrics.identifier_tokens, 1);
        assert_eq!(metrics.number_tokens, 1);
        assert_eq!(metrics.text_tokens, 1);
        assert_eq!(metrics.symbol_tokens, 1);
        assert_eq!(metrics.total_tokens, 5);
    }

    #[test]
    fn test_error_code_mapping() {
        let error = ScanError::InvalidCharacter {
            character: '@',
            line: 3,
        };
        assert_eq!(error.error_code().as_str(), "E020");
        assert_eq!(error.line(), Some(3));

        let error = ScanError::UnterminatedText { line: 2 };
        assert_eq!(error.error_code().as_str(), "E021");
    }

    #[test]
    fn test_error_display() {
        let error = ScanError::InvalidCharacter {
            character: '#',
            line: 1,
        };
        let message = error.to_string();
        assert!(message.contains('#'));
        assert!(message.contains("line 1"));
    }
}
