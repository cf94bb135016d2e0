use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a string for matching: decompose, drop diacritics, lowercase.
///
/// `"Café"` becomes `"cafe"`.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Substring test against an already normalized query.
/// An empty query matches everything.
#[must_use]
pub fn contains_normalized(candidate: &str, normalized_query: &str) -> bool {
    normalize(candidate).contains(normalized_query)
}
