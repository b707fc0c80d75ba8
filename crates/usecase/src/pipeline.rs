use log::{debug, trace};
use words_domain::{PipelineConfig, Token, is_wordlike};
use words_ports::{StemmerLookup, TokenSink, TokenSource};
use words_shared_kernel::{ByteOffset, Result, TokenCount, WordsError};

use crate::{chain::TransformChain, dto::RunSummary};

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Configuration resolved, nothing read yet.
    Init,
    Scanning,
    Draining,
    /// Terminal, after success or failure.
    Done,
}

/// Segmenter → wordlike filter → transform chain → sink, one token at a time.
pub struct Pipeline<'c> {
    config: &'c PipelineConfig,
    chain: TransformChain,
    state: PipelineState,
}

impl<'c> Pipeline<'c> {
    /// Validate the configuration and resolve the transform chain.
    ///
    /// Nothing is read and nothing is written here, so a bad stemmer
    /// language is reported even for empty input.
    ///
    /// # Errors
    /// Returns [`WordsError::Config`] when a stemmer language is unknown.
    pub fn new(config: &'c PipelineConfig, stemmers: &dyn StemmerLookup) -> Result<Self> {
        let chain = TransformChain::resolve(&config.transforms, stemmers)?;
        Ok(Self { config, chain, state: PipelineState::Init })
    }

    /// `Done` once [`run`](Self::run) has returned, whatever the outcome.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Drive the run to completion.
    ///
    /// On a scan or sink error the run stops immediately; whatever was
    /// already written stays written. Running a `Done` pipeline again starts
    /// a fresh pass with the same resolved chain.
    ///
    /// # Errors
    /// Returns [`WordsError::Scan`] or [`WordsError::Sink`].
    pub fn run<S, K>(&mut self, source: &mut S, sink: &mut K) -> Result<RunSummary>
    where
        S: TokenSource + ?Sized,
        K: TokenSink + ?Sized,
    {
        self.transition(PipelineState::Scanning);

        let filter = !self.config.include_all;
        let mut offset = ByteOffset::default();
        let mut scanned = TokenCount::zero();

        loop {
            let bytes = match source.next_token() {
                Ok(Some(bytes)) => bytes,
                Ok(None) => break,
                Err(err) => return Err(self.abort(err)),
            };
            let token = Token::borrowed(bytes, offset);
            offset = offset.advance(bytes.len());
            scanned.increment();

            if filter && !is_wordlike(token.as_bytes()) {
                continue;
            }

            let token = self.chain.apply(token);
            if let Err(err) = sink.accept(token.as_bytes()) {
                return Err(self.abort(err));
            }
        }

        self.transition(PipelineState::Draining);
        let emitted = match sink.finish() {
            Ok(emitted) => emitted,
            Err(err) => return Err(self.abort(err)),
        };
        self.transition(PipelineState::Done);

        let summary = RunSummary { scanned, emitted, bytes: offset.value() };
        debug!(
            "run finished: {} bytes, {} tokens scanned, {} emitted",
            summary.bytes, summary.scanned, summary.emitted
        );
        Ok(summary)
    }

    fn abort(&mut self, err: impl Into<WordsError>) -> WordsError {
        let err = err.into();
        debug!("run aborted in {:?}: {err}", self.state);
        self.transition(PipelineState::Done);
        err
    }

    fn transition(&mut self, next: PipelineState) {
        trace!("pipeline {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
