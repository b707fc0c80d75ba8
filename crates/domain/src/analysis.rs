// crates/domain/src/analysis.rs
pub mod classifier;
pub mod transforms;

pub use classifier::is_wordlike;
