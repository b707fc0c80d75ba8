//! # Use Cases
//!
//! Application-level orchestration of the token pipeline.
//!
//! - [`chain`]: Resolving the configured transforms into an executable chain
//! - [`pipeline`]: The pull-driven driver (`Init → Scanning → Draining → Done`)
//! - [`output`]: Delimited and count-only sinks
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod chain;
pub mod dto;
pub mod output;
pub mod pipeline;

pub use chain::TransformChain;
pub use dto::RunSummary;
pub use output::{CountSink, DelimitedSink, OutputSink};
pub use pipeline::{Pipeline, PipelineState};
