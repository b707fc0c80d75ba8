// crates/domain/src/config.rs
use derive_builder::Builder;
use words_shared_kernel::ConfigError;

use crate::options::Transform;

/// Immutable settings for one pipeline run.
///
/// Built once before any input is read and passed by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct PipelineConfig {
    /// Keep whitespace and punctuation tokens instead of only wordlike ones.
    #[builder(default)]
    pub include_all: bool,
    /// Applied left to right, in the order given.
    #[builder(default)]
    pub transforms: Vec<Transform>,
    /// Already unescaped bytes written between tokens.
    #[builder(default = "b\"\\n\".to_vec()")]
    pub delimiter: Vec<u8>,
    /// Report only the number of surviving tokens.
    #[builder(default)]
    pub count_only: bool,
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            include_all: false,
            transforms: Vec::new(),
            delimiter: b"\n".to_vec(),
            count_only: false,
        }
    }
}

impl PipelineConfigBuilder {
    /// Append one step to the end of the chain.
    pub fn transform(&mut self, transform: Transform) -> &mut Self {
        self.transforms.get_or_insert_with(Vec::new).push(transform);
        self
    }
}

impl From<PipelineConfigBuilderError> for ConfigError {
    fn from(err: PipelineConfigBuilderError) -> Self {
        Self::Incomplete(err.to_string())
    }
}
