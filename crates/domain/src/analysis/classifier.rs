// crates/domain/src/analysis/classifier.rs
use unicode_general_category::{GeneralCategory, get_general_category};

/// True iff the token holds at least one Letter, Number or Symbol code point.
///
/// Whitespace and punctuation runs are not wordlike; neither are bytes that
/// fail to decode as UTF-8.
pub fn is_wordlike(bytes: &[u8]) -> bool {
    bytes
        .utf8_chunks()
        .any(|chunk| chunk.valid().chars().any(is_wordlike_char))
}

/// Letter (L*), Number (N*) or Symbol (S*).
pub fn is_wordlike_char(c: char) -> bool {
    if c.is_ascii_alphanumeric() {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}
