use words_shared_kernel::TokenCount;

/// Totals for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tokens pulled from the segmenter, before filtering.
    pub scanned: TokenCount,
    /// Tokens that reached the sink.
    pub emitted: TokenCount,
    /// Input bytes consumed.
    pub bytes: u64,
}

impl RunSummary {
    /// Tokens dropped by the wordlike filter.
    pub fn filtered(&self) -> u64 {
        self.scanned.value() - self.emitted.value()
    }
}
