//! Token data model

pub mod token;

pub use token::{
    is_identifier_continue, is_identifier_start, is_symbol_char, Token, TokenCategory,
    TEXT_DELIMITER, TEXT_ESCAPE,
};
