// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ConfigError, ErrorContext, Result, ScanError, SinkError, WordsError};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteOffset, TokenCount};
