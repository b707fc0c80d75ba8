// crates/domain/src/analysis/transforms.rs
//! Case mapping and diacritic stripping.
//!
//! Each function returns `Cow::Borrowed` when the text is already in the
//! target form, so unchanged tokens never allocate.

use std::borrow::Cow;

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Full Unicode lowercase mapping.
pub fn lower(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.to_lowercase())
}

/// Full Unicode uppercase mapping (`ß` becomes `SS`).
pub fn upper(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.to_uppercase().ne(std::iter::once(c))) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.to_uppercase())
}

/// NFD, drop nonspacing marks (Mn), recompose to NFC.
pub fn strip_diacritics(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let stripped: String = text.nfd().filter(|c| !is_nonspacing_mark(*c)).nfc().collect();
    if stripped == text { Cow::Borrowed(text) } else { Cow::Owned(stripped) }
}

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}
