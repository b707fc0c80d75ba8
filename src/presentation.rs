// src/presentation.rs
use std::io::{self, Write};

pub const EXAMPLE: &str = "Example:\n  echo \"Hello, 世界. Nice dog! 👍🐶\" | words";

const DETAILS: &str = "\
Details:
  words reads a file or stdin, splits it into one word (token) per line,
  and writes to stdout.

  Word boundaries are defined by Unicode, specifically UAX #29.
  By default, only tokens containing one or more letters, numbers,
  or symbols (as defined by Unicode) are returned; whitespace and
  punctuation tokens are omitted.";

/// Help plus background, for a bare `words` typed at a terminal.
pub fn print_usage(help: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{}", help.trim_end())?;
    writeln!(stderr)?;
    writeln!(stderr, "{DETAILS}")
}

/// Workspace errors already render their causes inline.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("words: {err}");
}
