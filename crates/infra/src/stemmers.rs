// crates/infra/src/stemmers.rs
use std::borrow::Cow;

use log::debug;
use rust_stemmers::Algorithm;
use words_domain::StemLanguage;
use words_ports::{Stemmer, StemmerLookup};

/// Snowball stemmers from `rust-stemmers`, keyed by [`StemLanguage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowballStemmers;

impl StemmerLookup for SnowballStemmers {
    fn lookup(&self, language: &str) -> Option<Box<dyn Stemmer>> {
        let language = StemLanguage::lookup(language)?;
        debug!("using snowball stemmer for {language}");
        Some(Box::new(SnowballStemmer::new(language)))
    }

    fn supported(&self) -> Vec<String> {
        StemLanguage::ALL.iter().map(|lang| lang.as_str().to_string()).collect()
    }
}

pub struct SnowballStemmer {
    language: StemLanguage,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: StemLanguage) -> Self {
        Self { language, inner: rust_stemmers::Stemmer::create(algorithm(language)) }
    }
}

impl Stemmer for SnowballStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }

    fn language(&self) -> &str {
        self.language.as_str()
    }
}

const fn algorithm(language: StemLanguage) -> Algorithm {
    match language {
        StemLanguage::Arabic => Algorithm::Arabic,
        StemLanguage::Danish => Algorithm::Danish,
        StemLanguage::Dutch => Algorithm::Dutch,
        StemLanguage::English => Algorithm::English,
        StemLanguage::Finnish => Algorithm::Finnish,
        StemLanguage::French => Algorithm::French,
        StemLanguage::German => Algorithm::German,
        StemLanguage::Greek => Algorithm::Greek,
        StemLanguage::Hungarian => Algorithm::Hungarian,
        StemLanguage::Italian => Algorithm::Italian,
        StemLanguage::Norwegian => Algorithm::Norwegian,
        StemLanguage::Portuguese => Algorithm::Portuguese,
        StemLanguage::Romanian => Algorithm::Romanian,
        StemLanguage::Russian => Algorithm::Russian,
        StemLanguage::Spanish => Algorithm::Spanish,
        StemLanguage::Swedish => Algorithm::Swedish,
        StemLanguage::Tamil => Algorithm::Tamil,
        StemLanguage::Turkish => Algorithm::Turkish,
    }
}
