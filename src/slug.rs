use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Words that carry nothing in a URL.
pub const STOP_WORDS: &[&str] = &[
    "a", "of", "the", "and", "to", "as", "be", "us", "is", "in", "how", "with", "from", "i",
    "can", "it", "who", "our",
];

/// Most words kept in a slug.
pub const MAX_WORDS: usize = 5;

/// Derive the URL slug of a talk title: lowercase ASCII words with stop
/// words dropped, at most [`MAX_WORDS`] of them, joined by `-`.
///
/// A title made only of stop words (or punctuation) yields `""`.
pub fn urlize(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .map(|word| NON_ALNUM.replace_all(word, "").into_owned())
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(&word.as_str()))
        .take(MAX_WORDS)
        .collect::<Vec<_>>()
        .join("-")
}
