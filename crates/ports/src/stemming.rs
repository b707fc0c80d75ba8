// crates/ports/src/stemming.rs
use std::borrow::Cow;

/// Reduces a word to its stem for one fixed language.
pub trait Stemmer {
    /// Returns `Cow::Borrowed` when the word is already a stem.
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;

    /// Language identifier, for logging.
    fn language(&self) -> &str;
}

/// Resolves stemmers over a fixed, closed set of language names.
pub trait StemmerLookup {
    /// `None` for a language outside the supported set.
    fn lookup(&self, language: &str) -> Option<Box<dyn Stemmer>>;

    /// Supported language names, for error messages.
    fn supported(&self) -> Vec<String>;
}
