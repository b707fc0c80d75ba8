// crates/ports/src/sink.rs
use words_shared_kernel::{SinkError, TokenCount};

/// Consumes surviving tokens in input order.
pub trait TokenSink {
    fn accept(&mut self, token: &[u8]) -> Result<(), SinkError>;

    /// Called once after the last token. Returns how many tokens were accepted.
    fn finish(&mut self) -> Result<TokenCount, SinkError>;
}

impl<T: TokenSink + ?Sized> TokenSink for &mut T {
    fn accept(&mut self, token: &[u8]) -> Result<(), SinkError> {
        (**self).accept(token)
    }

    fn finish(&mut self) -> Result<TokenCount, SinkError> {
        (**self).finish()
    }
}
