//! # words core
//!
//! Facade over the workspace crates: the binary only talks to this crate.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod error;

pub use bootstrap::{run_with_config, run_with_stemmers};
pub use words_domain::{PipelineConfig, PipelineConfigBuilder, StemLanguage, Transform};
pub use words_infra::{SegmenterOptions, SegmenterOptionsBuilder};
pub use words_usecase::RunSummary;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
