// src/args.rs
use std::path::PathBuf;

use clap::Parser;

use crate::parsers;

/// Split text into words as defined by Unicode (UAX #29).
#[derive(Parser, Debug)]
#[command(
    name = "words",
    version = crate::VERSION,
    about = "Split text into words as defined by Unicode (UAX #29)",
    after_help = crate::presentation::EXAMPLE
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Include all tokens, such as whitespace and punctuation, not just words
    #[arg(short, long)]
    pub all: bool,

    /// Separator between output tokens; escaped literals like "\t" are accepted [default: "\n"]
    #[arg(short, long, value_name = "DELIM", default_value = "", hide_default_value = true)]
    pub delimiter: String,

    /// Lowercase tokens
    #[arg(long)]
    pub lower: bool,

    /// Uppercase tokens
    #[arg(long)]
    pub upper: bool,

    /// Strip diacritics, e.g. "café" becomes "cafe"
    #[arg(long)]
    pub diacritics: bool,

    /// Stem tokens with the Snowball stemmer for LANGUAGE, e.g. english
    #[arg(long, value_name = "LANGUAGE")]
    pub stem: Option<String>,

    /// Print only the number of tokens
    #[arg(short, long)]
    pub count: bool,

    /// Largest single token the reader will buffer (suffixes K, M accepted)
    #[arg(
        long,
        value_name = "N",
        default_value = "1048576",
        value_parser = parsers::parse_token_size
    )]
    pub max_token_size: usize,

    /// Read from FILE instead of standard input ("-" means standard input)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

