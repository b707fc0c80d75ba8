use std::fmt;

use log::debug;
use words_domain::{Token, Transform, transforms};
use words_ports::{Stemmer, StemmerLookup};
use words_shared_kernel::ConfigError;

enum Step {
    Lower,
    Upper,
    Diacritics,
    Stem(Box<dyn Stemmer>),
}

impl Step {
    fn name(&self) -> String {
        match self {
            Self::Lower => "lower".into(),
            Self::Upper => "upper".into(),
            Self::Diacritics => "diacritics".into(),
            Self::Stem(stemmer) => format!("stem:{}", stemmer.language()),
        }
    }
}

/// Transforms resolved into callable steps, folded left to right per token.
///
/// Resolution is the only place that can fail; applying the chain cannot.
pub struct TransformChain {
    steps: Vec<Step>,
}

impl TransformChain {
    /// The empty chain.
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Resolve every step, looking stemmers up by language name.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownStemmer`] for a language outside the
    /// lookup's supported set.
    pub fn resolve(transforms: &[Transform], stemmers: &dyn StemmerLookup) -> Result<Self, ConfigError> {
        let steps = transforms
            .iter()
            .map(|transform| match transform {
                Transform::Lower => Ok(Step::Lower),
                Transform::Upper => Ok(Step::Upper),
                Transform::Diacritics => Ok(Step::Diacritics),
                Transform::Stem(language) => stemmers.lookup(language).map(Step::Stem).ok_or_else(|| {
                    ConfigError::UnknownStemmer {
                        language: language.clone(),
                        supported: stemmers.supported().join(", "),
                    }
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let chain = Self { steps };
        debug!("transform chain: {chain:?}");
        Ok(chain)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `f_n(...f_1(token))`.
    pub fn apply<'a>(&self, token: Token<'a>) -> Token<'a> {
        self.steps.iter().fold(token, |token, step| match step {
            Step::Lower => token.map_text(transforms::lower),
            Step::Upper => token.map_text(transforms::upper),
            Step::Diacritics => token.map_text(transforms::strip_diacritics),
            Step::Stem(stemmer) => token.map_text(|text| stemmer.stem(text)),
        })
    }
}

impl fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steps.iter().map(Step::name)).finish()
    }
}
