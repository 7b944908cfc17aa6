//! Shared utilities for the Unicorn scanner

pub mod span;

pub use span::{Position, Span};
