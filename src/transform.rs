//! Pure string transforms applied to placeholder values.
//! All functions are stateless and use ASCII-level case rules only.

use cruet::Inflector;

/// Returns the English plural form of `s`, irregular nouns included
/// ("person" becomes "people").
pub fn pluralize(s: &str) -> String {
    s.to_plural()
}

/// Capitalizes the first letter of every space-separated word.
///
/// Splits on spaces only, never on case changes, so `goodModal` becomes
/// `GoodModal` and `good modal` becomes `Good Modal`.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts `s` to camelCase: underscores become word boundaries, the
/// first word is lower-cased, subsequent words are capitalized.
pub fn camel_case(s: &str) -> String {
    s.to_camel_case()
}

/// Converts `s` to snake_case: case changes, spaces and underscores all
/// collapse to single underscores. Idempotent.
pub fn snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Replaces every underscore with a space; used ahead of
/// [`capitalize_words`] when word separation should be kept.
pub fn split_underscores(s: &str) -> String {
    s.replace('_', " ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
