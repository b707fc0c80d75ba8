// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WordsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WordsError>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Output error: {0}")]
    Sink(#[from] SinkError),
}

impl WordsError {
    /// Innermost error, skipping any context layers.
    pub fn root(&self) -> &WordsError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the output side was closed by the reader (e.g. `words | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self.root(),
            Self::Sink(SinkError::Write { source }) | Self::Sink(SinkError::Flush { source })
                if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}

pub type Result<T> = std::result::Result<T, WordsError>;

/// Errors detected before any input is consumed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown stemmer language '{language}' (supported: {supported})")]
    UnknownStemmer { language: String, supported: String },

    #[error("couldn't parse delimiter {raw:?}: {reason}")]
    InvalidDelimiter { raw: String, reason: String },

    #[error("incomplete configuration: {0}")]
    Incomplete(String),
}

/// Errors raised while pulling tokens out of the input.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("token exceeds the {limit} byte buffer limit")]
    TokenTooLong { limit: usize },
}

/// Errors raised while writing tokens to the output.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to flush output: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<WordsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WordsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WordsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
