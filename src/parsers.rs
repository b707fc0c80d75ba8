// src/parsers.rs
use std::str::Chars;

use words_core::error::ConfigError;

const DEFAULT_DELIMITER: &[u8] = b"\n";

/// Decode a `--delimiter` argument into the bytes written between tokens.
///
/// An empty argument selects the default newline. Anything else is read as
/// the body of a double-quoted string literal, so `\t`, `\x00`, `\u00e9`
/// and friends are expanded.
///
/// # Errors
/// [`ConfigError::InvalidDelimiter`] on an unknown or truncated escape, a
/// bare `"`, or a raw newline.
pub fn parse_delimiter(raw: &str) -> Result<Vec<u8>, ConfigError> {
    if raw.is_empty() {
        return Ok(DEFAULT_DELIMITER.to_vec());
    }
    unquote(raw).map_err(|reason| ConfigError::InvalidDelimiter {
        raw: raw.to_string(),
        reason,
    })
}

fn unquote(raw: &str) -> Result<Vec<u8>, String> {
    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescape(&mut chars, &mut out)?,
            '"' => return Err("unescaped '\"'".into()),
            '\n' => return Err("raw newline".into()),
            c => push_char(&mut out, c),
        }
    }
    Ok(out)
}

fn unescape(chars: &mut Chars<'_>, out: &mut Vec<u8>) -> Result<(), String> {
    let escape = chars.next().ok_or("trailing backslash")?;
    let byte = match escape {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '"' => b'"',
        'x' => {
            let value = hex_digits(chars, 2, escape)?;
            // \xHH is a raw byte, not a code point.
            out.push(u8::try_from(value).map_err(|_| "\\x escape out of range")?);
            return Ok(());
        }
        'u' | 'U' => {
            let width = if escape == 'u' { 4 } else { 8 };
            let value = hex_digits(chars, width, escape)?;
            let c = char::from_u32(value).ok_or_else(|| format!("\\{escape}{value:x} is not a valid code point"))?;
            push_char(out, c);
            return Ok(());
        }
        '0'..='7' => {
            let mut value = escape.to_digit(8).unwrap_or_default();
            for _ in 0..2 {
                let digit = chars
                    .next()
                    .and_then(|d| d.to_digit(8))
                    .ok_or("octal escape needs three digits")?;
                value = value * 8 + digit;
            }
            u8::try_from(value).map_err(|_| format!("octal escape \\{value:o} exceeds \\377"))?
        }
        other => return Err(format!("unknown escape sequence \\{other}")),
    };
    out.push(byte);
    Ok(())
}

fn hex_digits(chars: &mut Chars<'_>, width: usize, escape: char) -> Result<u32, String> {
    (0..width).try_fold(0u32, |acc, _| {
        chars
            .next()
            .and_then(|d| d.to_digit(16))
            .map(|d| acc * 16 + d)
            .ok_or_else(|| format!("\\{escape} escape needs {width} hex digits"))
    })
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

/// Parse `--max-token-size`: a byte count with an optional `K`/`KiB` or
/// `M`/`MiB` suffix, at least 4.
pub fn parse_token_size(s: &str) -> Result<usize, String> {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];

    let lower = s.trim().replace('_', "").to_ascii_lowercase();
    let (digits, multiplier) = SUFFIXES
        .iter()
        .find_map(|(suffixes, multiplier)| {
            suffixes
                .iter()
                .find_map(|suffix| lower.strip_suffix(suffix))
                .map(|stripped| (stripped.trim(), *multiplier))
        })
        .unwrap_or((lower.as_str(), 1));

    let value: usize = digits
        .parse()
        .map_err(|err| format!("invalid size '{s}': {err}"))?;
    let bytes = value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("size '{s}' is too large"))?;
    if bytes < 4 {
        return Err("value must be at least 4".into());
    }
    Ok(bytes)
}
