//! Token types for the Unicorn scanner
//!
//! Tokens carry their classification, the exact consumed lexeme, and the
//! 1-based line the lexeme started on. Categories map to the stable numeric
//! codes emitted by the driver; the mapping lives in `TokenCategory::code`
//! and is part of the external contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of token classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Single recognized punctuation or operator character
    Symbol,
    /// Double-quote delimited text literal, delimiters included in the lexeme
    Text,
    /// Decimal digit run with at most one embedded decimal point
    Number,
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// End-of-input sentinel, produced once input is exhausted
    EndOfInput,
}

impl TokenCategory {
    /// Numeric wire code for this category.
    ///
    /// The encoding is fixed: 0 = EndOfInput, 1 = Symbol, 2 = Text,
    /// 3 = Number, 4 = Identifier. Consumers depend on these exact values,
    /// so the mapping is written out explicitly rather than derived from
    /// variant order.
    pub const fn code(&self) -> u8 {
        match self {
            TokenCategory::EndOfInput => 0,
            TokenCategory::Symbol => 1,
            TokenCategory::Text => 2,
            TokenCategory::Number => 3,
            TokenCategory::Identifier => 4,
        }
    }

    /// Reverse lookup from wire code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TokenCategory::EndOfInput),
            1 => Some(TokenCategory::Symbol),
            2 => Some(TokenCategory::Text),
            3 => Some(TokenCategory::Number),
            4 => Some(TokenCategory::Identifier),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Symbol => "Symbol",
            TokenCategory::Text => "Text",
            TokenCategory::Number => "Number",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::EndOfInput => "EndOfInput",
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, TokenCategory::EndOfInput)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified token with its lexeme and starting line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub category: TokenCategory,
    /// Exact substring consumed from the input (empty for EndOfInput)
    pub lexeme: String,
    /// 1-based line number where the lexeme starts
    pub line: u32,
}

impl Token {
    pub fn new(category: TokenCategory, lexeme: String, line: u32) -> Self {
        Self {
            category,
            lexeme,
            line,
        }
    }

    /// The end-of-input sentinel carries no lexeme.
    pub fn end_of_input(line: u32) -> Self {
        Self {
            category: TokenCategory::EndOfInput,
            lexeme: String::new(),
            line,
        }
    }

    /// Numeric wire code of this token's category
    pub fn code(&self) -> u8 {
        self.category.code()
    }

    pub fn is_end_of_input(&self) -> bool {
        self.category.is_end_of_input()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_input() {
            write!(f, "<EOF>@{}", self.line)
        } else {
            write!(f, "{}({:?})@{}", self.category, self.lexeme, self.line)
        }
    }
}

// ============================================================================
// CHARACTER CLASSIFICATION
// ============================================================================

/// Delimiter for Text literals
pub const TEXT_DELIMITER: char = '"';

/// Escape character inside Text literals
pub const TEXT_ESCAPE: char = '\\';

/// First character of an Identifier
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Continuation character of an Identifier
pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Recognized single-character Symbol set. Anything printable outside this
/// set (and outside the other token classes) is an invalid character.
pub fn is_symbol_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-'
            | '*'
            | '/'
            | '%'
            | '='
            | '<'
            | '>'
            | '!'
            | '&'
            | '|'
            | '^'
            | '~'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ','
            | ';'
            | ':'
            | '.'
            | '?'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(TokenCategory::EndOfInput.code(), 0);
        assert_eq!(TokenCategory::Symbol.code(), 1);
        assert_eq!(TokenCategory::Text.code(), 2);
        assert_eq!(TokenCategory::Number.code(), 3);
        assert_eq!(TokenCategory::Identifier.code(), 4);
    }

    #[test]
    fn test_code_round_trip() {
        for code in 0..=4u8 {
            let category = TokenCategory::from_code(code).unwrap();
            assert_eq!(category.code(), code);
        }
        assert_eq!(TokenCategory::from_code(5), None);
    }

    #[test]
    fn test_end_of_input_token() {
        let token = Token::end_of_input(7);
        assert!(token.is_end_of_input());
        assert_eq!(token.code(), 0);
        assert_eq!(token.lexeme, "");
        assert_eq!(token.line, 7);
    }

    #[test]
    fn test_token_code_matches_category() {
        let token = Token::new(TokenCategory::Identifier, "count".to_string(), 3);
        assert_eq!(token.code(), 4);
        assert_eq!(token.lexeme, "count");
    }

    #[test]
    fn test_identifier_classification() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(is_identifier_start('_'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_continue('1'));
        assert!(!is_identifier_continue('-'));
    }

    #[test]
    fn test_symbol_classification() {
        for ch in "+-*/%=<>!&|^~(){}[],;:.?".chars() {
            assert!(is_symbol_char(ch), "expected symbol: {}", ch);
        }
        assert!(!is_symbol_char('#'));
        assert!(!is_symbol_char('@'));
        assert!(!is_symbol_char('`'));
        assert!(!is_symbol_char('"'));
    }

    #[test]
    fn test_display_formatting() {
        let token = Token::new(TokenCategory::Number, "3.14".to_string(), 2);
        let display = format!("{}", token);
        assert!(display.contains("Number"));
        assert!(display.contains("3.14"));
    }

    #[test]
    fn test_serialization() {
        let token = Token::new(TokenCategory::Text, "\"hi\"".to_string(), 1);
        let json = serde_json::to_string(&token).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
