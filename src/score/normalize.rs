use unicode_normalization::UnicodeNormalization;

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Uppercases and strips combining diacritics; everything else, punctuation included, is kept.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => text
            .to_uppercase()
            .nfd()
            .filter(|c| !COMBINING_MARKS.contains(c))
            .collect(),
        _ => String::new(),
    }
}

/// Comparison form for type codes: trimmed and uppercased.
pub fn type_code(code: &str) -> String {
    code.trim().to_uppercase()
}
