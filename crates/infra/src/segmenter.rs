// crates/infra/src/segmenter.rs
//! Streaming UAX #29 word segmentation over any `Read`.
//!
//! `unicode-segmentation` only works on complete `&str`s, so the reader is
//! pulled into a bounded window and word bounds are computed over the valid
//! UTF-8 prefix of that window. A segment is handed out only once no later
//! input can merge it with what follows.

use std::collections::VecDeque;
use std::io::{ErrorKind, Read};
use std::ops::Range;

use derive_builder::Builder;
use log::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;
use words_ports::TokenSource;
use words_shared_kernel::ScanError;

pub const DEFAULT_INITIAL_BUFFER: usize = 8 * 1024;
pub const DEFAULT_MAX_BUFFER: usize = 1024 * 1024;

/// Word bound rules look at most two code points (ignoring Extend/Format)
/// past a boundary, so a segment followed by this many complete segments is
/// final.
const STABLE_LOOKAHEAD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct SegmenterOptions {
    #[builder(default = "DEFAULT_INITIAL_BUFFER")]
    pub initial_buffer: usize,
    /// Hard ceiling for the window; one token plus lookahead must fit.
    #[builder(default = "DEFAULT_MAX_BUFFER")]
    pub max_buffer: usize,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self { initial_buffer: DEFAULT_INITIAL_BUFFER, max_buffer: DEFAULT_MAX_BUFFER }
    }
}

/// Word-bound segmenter reading from `R` on demand.
pub struct UnicodeWordSegmenter<R: Read> {
    reader: R,
    buf: Vec<u8>,
    /// Start of the bytes not yet split into ready tokens.
    pos: usize,
    /// End of the bytes read so far.
    filled: usize,
    ready: VecDeque<Range<usize>>,
    eof: bool,
    max_buffer: usize,
}

impl<R: Read> UnicodeWordSegmenter<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, SegmenterOptions::default())
    }

    pub fn with_options(reader: R, options: SegmenterOptions) -> Self {
        let max_buffer = options.max_buffer.max(4);
        let initial = options.initial_buffer.clamp(4, max_buffer);
        Self {
            reader,
            buf: vec![0; initial],
            pos: 0,
            filled: 0,
            ready: VecDeque::new(),
            eof: false,
            max_buffer,
        }
    }

    /// Current window capacity, for tests and diagnostics.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Compact, grow if the pending run fills the window, then read once.
    fn fill(&mut self) -> Result<(), ScanError> {
        if self.pos > 0 {
            self.buf.copy_within(self.pos..self.filled, 0);
            self.filled -= self.pos;
            self.pos = 0;
        }

        if self.filled == self.buf.len() {
            if self.buf.len() >= self.max_buffer {
                return Err(ScanError::TokenTooLong { limit: self.max_buffer });
            }
            let grown = (self.buf.len() * 2).min(self.max_buffer);
            debug!("segmenter buffer grows {} -> {grown} bytes", self.buf.len());
            self.buf.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.filled..]) {
                Ok(0) => {
                    trace!("segmenter reached end of input");
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.filled += n;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(ScanError::Io(err)),
            }
        }
    }

    /// Queue every segment of the unsplit window that is known to be final.
    fn split_window(&mut self) {
        let base = self.pos;
        let window = &self.buf[base..self.filled];
        let mut cursor = 0;

        while cursor < window.len() {
            let rest = &window[cursor..];
            let (text, invalid) = valid_prefix(rest);

            if text.is_empty() {
                match invalid {
                    Invalid::Bytes(len) => {
                        self.ready.push_back(base + cursor..base + cursor + len);
                        cursor += len;
                        continue;
                    }
                    Invalid::Truncated if self.eof => {
                        self.ready.push_back(base + cursor..base + window.len());
                        cursor = window.len();
                        continue;
                    }
                    Invalid::Truncated | Invalid::None => break,
                }
            }

            // Text followed by an invalid sequence (or by nothing, at EOF)
            // cannot grow any further.
            let terminated = match invalid {
                Invalid::Bytes(_) => true,
                Invalid::Truncated | Invalid::None => self.eof,
            };

            let segments: Vec<&str> = text.split_word_bounds().collect();
            let stable =
                if terminated { segments.len() } else { segments.len().saturating_sub(STABLE_LOOKAHEAD) };

            for segment in &segments[..stable] {
                let start = base + cursor;
                cursor += segment.len();
                self.ready.push_back(start..base + cursor);
            }

            if stable < segments.len() {
                break;
            }
        }

        self.pos = base + cursor;
    }
}

impl<R: Read> TokenSource for UnicodeWordSegmenter<R> {
    fn next_token(&mut self) -> Result<Option<&[u8]>, ScanError> {
        loop {
            if let Some(range) = self.ready.pop_front() {
                return Ok(Some(&self.buf[range]));
            }
            if self.eof && self.pos == self.filled {
                return Ok(None);
            }
            self.fill()?;
            self.split_window();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invalid {
    /// The whole slice is valid.
    None,
    /// An invalid sequence of this many bytes follows the valid prefix.
    Bytes(usize),
    /// The slice ends in the middle of a multi-byte sequence.
    Truncated,
}

fn valid_prefix(bytes: &[u8]) -> (&str, Invalid) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text, Invalid::None),
        Err(err) => {
            let (valid, _) = bytes.split_at(err.valid_up_to());
            let text = std::str::from_utf8(valid).unwrap_or_default();
            let invalid = err.error_len().map_or(Invalid::Truncated, Invalid::Bytes);
            (text, invalid)
        }
    }
}
