// crates/domain/src/model.rs
use std::borrow::Cow;

use words_shared_kernel::ByteOffset;

/// One segmentation unit.
///
/// Freshly scanned tokens borrow the segmenter's buffer; a transform that
/// changes the text replaces the bytes with an owned buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    bytes: Cow<'a, [u8]>,
    offset: ByteOffset,
}

impl<'a> Token<'a> {
    pub fn borrowed(bytes: &'a [u8], offset: ByteOffset) -> Self {
        Self { bytes: Cow::Borrowed(bytes), offset }
    }

    pub fn owned(bytes: Vec<u8>, offset: ByteOffset) -> Self {
        Self { bytes: Cow::Owned(bytes), offset }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Token text, if the bytes are valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Start position in the source stream. Transforms keep the original offset.
    #[inline]
    pub const fn offset(&self) -> ByteOffset {
        self.offset
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self.bytes, Cow::Owned(_))
    }

    /// Run a text transform over the token. Invalid UTF-8 passes through
    /// untouched; an unchanged result keeps the current bytes.
    #[must_use]
    pub fn map_text<F>(self, f: F) -> Token<'a>
    where
        F: for<'s> FnOnce(&'s str) -> Cow<'s, str>,
    {
        let replaced = match self.as_str() {
            Some(text) => match f(text) {
                Cow::Borrowed(out) if out == text => None,
                out => Some(out.into_owned()),
            },
            None => None,
        };
        match replaced {
            Some(s) => Token::owned(s.into_bytes(), self.offset),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_token_exposes_text_and_offset() {
        let token = Token::borrowed(b"hello", ByteOffset::new(7));
        assert_eq!(token.as_str(), Some("hello"));
        assert_eq!(token.len(), 5);
        assert_eq!(token.offset().value(), 7);
        assert!(!token.is_owned());
    }

    #[test]
    fn invalid_utf8_has_no_text() {
        let token = Token::borrowed(&[0xff, 0xfe], ByteOffset::default());
        assert_eq!(token.as_str(), None);
        assert_eq!(token.as_bytes(), &[0xff, 0xfe]);
    }

    #[test]
    fn map_text_replaces_bytes_but_keeps_offset() {
        let token = Token::borrowed(b"Dogs", ByteOffset::new(17));
        let token = token.map_text(|t| Cow::Owned(t.trim_end_matches('s').to_string()));
        assert!(token.is_owned());
        assert_eq!(token.as_bytes(), b"Dog");
        assert_eq!(token.offset().value(), 17);
    }

    #[test]
    fn map_text_accepts_borrowed_subslice() {
        let token = Token::borrowed(b"walking", ByteOffset::new(2));
        let token = token.map_text(|t| Cow::Borrowed(&t[..4]));
        assert_eq!(token.as_bytes(), b"walk");
        assert_eq!(token.offset().value(), 2);
    }

    #[test]
    fn map_text_keeps_bytes_when_unchanged() {
        let token = Token::borrowed(b"same", ByteOffset::default());
        let token = token.map_text(|t| Cow::Owned(t.to_string()));
        assert_eq!(token.as_bytes(), b"same");
    }

    #[test]
    fn map_text_skips_invalid_utf8() {
        let token = Token::borrowed(&[b'a', 0xc3], ByteOffset::default());
        let token = token.map_text(|t| Cow::Owned(t.to_uppercase()));
        assert!(!token.is_owned());
        assert_eq!(token.as_bytes(), &[b'a', 0xc3]);
    }
}
