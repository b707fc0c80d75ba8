// src/config.rs
use std::path::{Path, PathBuf};

use clap::{ArgMatches, FromArgMatches, parser::ValueSource};
use words_core::{
    PipelineConfig, SegmenterOptions, SegmenterOptionsBuilder, StemLanguage, Transform, error::ConfigError,
};

use crate::{args::Args, parsers::parse_delimiter};

/// Where tokens are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input; `implicit` when no FILE argument was given at all.
    Stdin { implicit: bool },
    File(PathBuf),
}

impl Input {
    fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            None => Self::Stdin { implicit: true },
            Some(path) if path == Path::new("-") => Self::Stdin { implicit: false },
            Some(path) => Self::File(path),
        }
    }
}

/// Everything the binary needs for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub segmenter: SegmenterOptions,
    pub input: Input,
}

impl Config {
    /// Build the run configuration from parsed matches.
    ///
    /// The transform chain follows the position of each transform flag on
    /// the command line, so `--stem english --upper` and
    /// `--upper --stem english` give different chains.
    ///
    /// # Errors
    /// [`ConfigError::InvalidDelimiter`] when `--delimiter` cannot be decoded,
    /// [`ConfigError::UnknownStemmer`] when `--stem` names no known language.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let args = Args::from_arg_matches(matches).map_err(|e| ConfigError::Incomplete(e.to_string()))?;

        let mut builder = PipelineConfig::builder();
        builder
            .include_all(args.all)
            .count_only(args.count)
            .delimiter(parse_delimiter(&args.delimiter)?);
        for transform in ordered_transforms(&args, matches)? {
            builder.transform(transform);
        }
        let pipeline = builder.build()?;

        let segmenter = SegmenterOptionsBuilder::default()
            .max_buffer(args.max_token_size)
            .build()
            .map_err(|e| ConfigError::Incomplete(e.to_string()))?;

        Ok(Self { pipeline, segmenter, input: Input::from_arg(args.file) })
    }
}

fn stem_transform(language: &str) -> Result<Transform, ConfigError> {
    StemLanguage::lookup(language)
        .map(|language| Transform::Stem(language.as_str().to_string()))
        .ok_or_else(|| ConfigError::UnknownStemmer {
            language: language.to_string(),
            supported: StemLanguage::supported_list(),
        })
}

fn ordered_transforms(args: &Args, matches: &ArgMatches) -> Result<Vec<Transform>, ConfigError> {
    let flags = [
        ("lower", args.lower.then_some(Transform::Lower)),
        ("upper", args.upper.then_some(Transform::Upper)),
        ("diacritics", args.diacritics.then_some(Transform::Diacritics)),
        ("stem", args.stem.as_deref().map(stem_transform).transpose()?),
    ];

    let mut positioned: Vec<(usize, Transform)> = flags
        .into_iter()
        .filter(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|(id, transform)| Some((matches.index_of(id)?, transform?)))
        .collect();
    positioned.sort_by_key(|(index, _)| *index);
    Ok(positioned.into_iter().map(|(_, transform)| transform).collect())
}
