// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod segmenter;
pub mod stemmers;

pub use segmenter::{SegmenterOptions, SegmenterOptionsBuilder, UnicodeWordSegmenter};
pub use stemmers::{SnowballStemmer, SnowballStemmers};
