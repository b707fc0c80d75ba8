//! # Ports
//!
//! Interface definitions for external capabilities.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`segmenter`]: Turning an input stream into successive token spans
//! - [`stemming`]: Language-specific stemming, looked up by language name
//! - [`sink`]: Writing surviving tokens (or their count) to the output
//!
//! These ports allow the pipeline to stay independent of a specific
//! segmentation or stemming algorithm.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod segmenter;
pub mod sink;
pub mod stemming;

pub use segmenter::TokenSource;
pub use sink::TokenSink;
pub use stemming::{Stemmer, StemmerLookup};
