// Internal modules
pub mod config;
pub mod driver;
#[macro_use]
pub mod logging;
pub mod scanner;
pub mod source;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use driver::{DriveReport, DriverError};
pub use scanner::{ScanError, Scanner};
pub use source::{SourceError, SourceInput};
pub use tokens::{Token, TokenCategory};
