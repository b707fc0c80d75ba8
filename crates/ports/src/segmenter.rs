// crates/ports/src/segmenter.rs
use words_shared_kernel::ScanError;

/// Produces successive token spans from an input stream.
///
/// Contract:
/// - returns `Ok(None)` once the input is exhausted, and keeps returning it;
/// - the returned spans, concatenated, equal every byte consumed so far;
/// - a span is never empty;
/// - memory stays bounded regardless of input size.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Option<&[u8]>, ScanError>;
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self) -> Result<Option<&[u8]>, ScanError> {
        (**self).next_token()
    }
}
