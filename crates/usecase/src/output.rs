use std::io::Write;

use words_domain::PipelineConfig;
use words_ports::TokenSink;
use words_shared_kernel::{SinkError, TokenCount};

/// Writes tokens separated by a delimiter. No leading or trailing delimiter.
#[derive(Debug)]
pub struct DelimitedSink<W: Write> {
    writer: W,
    delimiter: Vec<u8>,
    count: TokenCount,
}

impl<W: Write> DelimitedSink<W> {
    pub fn new(writer: W, delimiter: impl Into<Vec<u8>>) -> Self {
        Self { writer, delimiter: delimiter.into(), count: TokenCount::zero() }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenSink for DelimitedSink<W> {
    fn accept(&mut self, token: &[u8]) -> Result<(), SinkError> {
        if !self.count.is_zero() {
            self.writer.write_all(&self.delimiter).map_err(|source| SinkError::Write { source })?;
        }
        self.writer.write_all(token).map_err(|source| SinkError::Write { source })?;
        self.count.increment();
        Ok(())
    }

    fn finish(&mut self) -> Result<TokenCount, SinkError> {
        self.writer.flush().map_err(|source| SinkError::Flush { source })?;
        Ok(self.count)
    }
}

/// Counts tokens and writes only the final decimal total.
#[derive(Debug)]
pub struct CountSink<W: Write> {
    writer: W,
    count: TokenCount,
}

impl<W: Write> CountSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: TokenCount::zero() }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenSink for CountSink<W> {
    fn accept(&mut self, _token: &[u8]) -> Result<(), SinkError> {
        self.count.increment();
        Ok(())
    }

    fn finish(&mut self) -> Result<TokenCount, SinkError> {
        write!(self.writer, "{}", self.count).map_err(|source| SinkError::Write { source })?;
        self.writer.flush().map_err(|source| SinkError::Flush { source })?;
        Ok(self.count)
    }
}

/// The sink selected by [`PipelineConfig::count_only`].
#[derive(Debug)]
pub enum OutputSink<W: Write> {
    Delimited(DelimitedSink<W>),
    Count(CountSink<W>),
}

impl<W: Write> OutputSink<W> {
    pub fn from_config(config: &PipelineConfig, writer: W) -> Self {
        if config.count_only {
            Self::Count(CountSink::new(writer))
        } else {
            Self::Delimited(DelimitedSink::new(writer, config.delimiter.clone()))
        }
    }

    pub fn into_inner(self) -> W {
        match self {
            Self::Delimited(sink) => sink.into_inner(),
            Self::Count(sink) => sink.into_inner(),
        }
    }
}

impl<W: Write> TokenSink for OutputSink<W> {
    fn accept(&mut self, token: &[u8]) -> Result<(), SinkError> {
        match self {
            Self::Delimited(sink) => sink.accept(token),
            Self::Count(sink) => sink.accept(token),
        }
    }

    fn finish(&mut self) -> Result<TokenCount, SinkError> {
        match self {
            Self::Delimited(sink) => sink.finish(),
            Self::Count(sink) => sink.finish(),
        }
    }
}
