//! Splitting normalized text into word tokens.

use crate::normalize::strip;

/// Splits a location string into lower-cased word tokens.
///
/// Input is normalized first, so tokens never contain whitespace, commas,
/// or stripped punctuation. An empty input yields a single empty-string
/// token rather than an empty sequence; callers rely on this.
#[must_use]
pub fn tokenize(value: &str) -> Vec<String> {
    let lowered = strip(value).to_lowercase();
    lowered.trim().split(' ').map(String::from).collect()
}

/// The last token, if the sequence is non-empty.
#[must_use]
pub fn last_token(tokens: &[String]) -> Option<&str> {
    tokens.last().map(String::as_str)
}

/// The last two tokens in reading order, if there are at least two.
#[must_use]
pub fn last_two_tokens(tokens: &[String]) -> Option<(&str, &str)> {
    match tokens {
        [.., first, second] => Some((first.as_str(), second.as_str())),
        _ => None,
    }
}
