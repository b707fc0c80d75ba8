//! Re-export error types from the shared kernel crate.

pub use words_shared_kernel::{ConfigError, ErrorContext, Result, ScanError, SinkError, WordsError};
