use std::io::{Read, Write};

use log::debug;
use words_domain::PipelineConfig;
use words_infra::{SegmenterOptions, SnowballStemmers, UnicodeWordSegmenter};
use words_ports::StemmerLookup;
use words_shared_kernel::{ErrorContext, Result};
use words_usecase::{OutputSink, Pipeline, RunSummary};

/// Tokenize `input` into `output` with the Snowball stemmers.
///
/// The configuration is validated before `input` is touched.
///
/// # Errors
/// Configuration errors as-is; scan and output errors wrapped with a
/// "tokenizing input" context.
pub fn run_with_config<R, W>(
    config: &PipelineConfig,
    segmenter: SegmenterOptions,
    input: R,
    output: W,
) -> Result<RunSummary>
where
    R: Read,
    W: Write,
{
    run_with_stemmers(config, segmenter, &SnowballStemmers, input, output)
}

/// Same as [`run_with_config`] with a caller-supplied stemmer lookup.
///
/// # Errors
/// Configuration errors as-is; scan and output errors wrapped with a
/// "tokenizing input" context.
pub fn run_with_stemmers<R, W>(
    config: &PipelineConfig,
    segmenter: SegmenterOptions,
    stemmers: &dyn StemmerLookup,
    input: R,
    output: W,
) -> Result<RunSummary>
where
    R: Read,
    W: Write,
{
    let mut pipeline = Pipeline::new(config, stemmers)?;
    debug!(
        "pipeline ready: include_all={}, count_only={}, {} transform(s)",
        config.include_all,
        config.count_only,
        config.transforms.len()
    );

    let mut source = UnicodeWordSegmenter::with_options(input, segmenter);
    let mut sink = OutputSink::from_config(config, output);
    pipeline.run(&mut source, &mut sink).context("tokenizing input")
}

#[cfg(test)]
mod tests {
    use words_domain::Transform;
    use words_shared_kernel::{ConfigError, ScanError, WordsError};

    use super::*;

    fn run(config: &PipelineConfig, input: &str) -> String {
        let mut out = Vec::new();
        run_with_config(config, SegmenterOptions::default(), input.as_bytes(), &mut out).expect("run succeeds");
        String::from_utf8(out).expect("utf8 output")
    }

    fn concat(transforms: Vec<Transform>) -> PipelineConfig {
        PipelineConfig { transforms, delimiter: Vec::new(), ..PipelineConfig::default() }
    }

    #[test]
    fn all_tokens_reconstruct_input() {
        let config = PipelineConfig { include_all: true, delimiter: Vec::new(), ..PipelineConfig::default() };
        assert_eq!(run(&config, "Hello, goodbye"), "Hello, goodbye");
    }

    #[test]
    fn lower_and_upper() {
        assert_eq!(run(&concat(vec![Transform::Lower]), "Hello, goodbye"), "hellogoodbye");
        assert_eq!(run(&concat(vec![Transform::Upper]), "Hello, goodbye"), "HELLOGOODBYE");
    }

    #[test]
    fn diacritics_alone_and_with_lower() {
        let text = "I am reading a résumé in Malmö";
        assert_eq!(run(&concat(vec![Transform::Diacritics]), text), "IamreadingaresumeinMalmo");
        assert_eq!(
            run(&concat(vec![Transform::Diacritics, Transform::Lower]), text),
            "iamreadingaresumeinmalmo"
        );
    }

    #[test]
    fn english_stemming() {
        let config = concat(vec![Transform::Stem("english".into())]);
        assert_eq!(run(&config, "I am walking the Dogs"), "IamwalktheDog");
    }

    #[test]
    fn stem_then_upper_differs_from_upper_then_stem() {
        let stem = Transform::Stem("english".into());
        let a = run(&concat(vec![stem.clone(), Transform::Upper]), "walking");
        let b = run(&concat(vec![Transform::Upper, stem]), "walking");
        assert_eq!(a, "WALK");
        assert_eq!(b, "WALKING");
    }

    #[test]
    fn counts() {
        let count = PipelineConfig { count_only: true, ..PipelineConfig::default() };
        assert_eq!(run(&count, "I am walking the Dogs"), "5");
        let all = PipelineConfig { include_all: true, ..count.clone() };
        assert_eq!(run(&all, "I am walking the Dogs"), "9");
        assert_eq!(run(&count, ""), "0");
    }

    #[test]
    fn unknown_stemmer_fails_without_output() {
        let config = PipelineConfig { transforms: vec![Transform::Stem("foo".into())], ..PipelineConfig::default() };
        let mut out = Vec::new();
        let err = run_with_config(&config, SegmenterOptions::default(), "".as_bytes(), &mut out)
            .expect_err("foo is not a language");
        assert!(matches!(err.root(), WordsError::Config(ConfigError::UnknownStemmer { .. })));
        assert!(err.to_string().starts_with("Configuration error: unknown stemmer language 'foo'"));
        assert!(out.is_empty());
    }

    /// Panics if the pipeline touches the input at all.
    struct Untouchable;

    impl Read for Untouchable {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            panic!("input must not be read");
        }
    }

    #[test]
    fn unknown_stemmer_is_rejected_before_reading_input() {
        let config = PipelineConfig { transforms: vec![Transform::Stem("foo".into())], ..PipelineConfig::default() };
        let mut out = Vec::new();
        let err = run_with_config(&config, SegmenterOptions::default(), Untouchable, &mut out)
            .expect_err("foo is not a language");
        assert!(matches!(err, WordsError::Config(ConfigError::UnknownStemmer { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn scan_errors_carry_context() {
        let segmenter = SegmenterOptions { initial_buffer: 8, max_buffer: 8 };
        let mut out = Vec::new();
        let err = run_with_config(&PipelineConfig::default(), segmenter, "x".repeat(32).as_bytes(), &mut out)
            .expect_err("token cannot fit");
        assert!(err.to_string().starts_with("tokenizing input: Scan error: token exceeds the 8 byte buffer limit"));
        assert!(matches!(err.root(), WordsError::Scan(ScanError::TokenTooLong { limit: 8 })));
    }
}
