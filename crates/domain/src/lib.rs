//! # Domain
//!
//! Pure building blocks of the token pipeline: the token model, the
//! wordlike classifier, the text transforms and the immutable run
//! configuration. Nothing in here performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod config;
pub mod model;
pub mod options;

pub use analysis::{is_wordlike, transforms};
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use model::Token;
pub use options::{StemLanguage, Transform};
