//! Compile-time limits for the Unicorn scanner
//!
//! These bounds are fixed at build time and cannot be loosened through
//! runtime configuration. Runtime preferences (config::runtime) only tune
//! behavior within these limits.

/// Compile-time enforced limits
pub mod compile_time {
    /// Scanner limits
    pub mod scanner {
        /// Maximum length of an Identifier or Number lexeme in bytes
        pub const MAX_LEXEME_LENGTH: usize = 255;

        /// Maximum size of a Text literal in bytes, delimiters included
        pub const MAX_TEXT_SIZE: usize = 1_048_576; // 1MB

        /// Maximum number of tokens produced from a single input
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    /// Source input limits
    pub mod source_input {
        /// Maximum input size in bytes
        pub const MAX_INPUT_SIZE: u64 = 10_485_760; // 10MB

        /// Inputs above this size get flagged in metadata
        pub const LARGE_INPUT_THRESHOLD: u64 = 1_048_576; // 1MB

        /// Maximum number of lines in one input
        pub const MAX_LINE_COUNT: usize = 100_000;
    }

    /// Logging limits
    pub mod logging {
        /// Maximum buffered log events (memory logger)
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum length of a single log message in bytes
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
