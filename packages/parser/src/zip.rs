//! Postal code extraction.
//!
//! Scans the token sequence left to right and pinches out the first
//! 5-digit postal code it finds. A code glued to a preceding word
//! (`"sd57401"`) is split apart; the non-digit prefix is almost always a
//! region abbreviation, so it is kept in play for region extraction.

use regex::Regex;
use std::sync::LazyLock;

use location_pinch_models::PinchedZip;

use crate::tokenize::tokenize;

/// Regex matching a trailing run of exactly 5 digits in a token.
static ZIP_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5}$").expect("valid regex"));

/// Extracts the first 5-digit postal code from a location string.
///
/// A whole-token hit is removed outright. A glued hit is split: the
/// digits become the zip and the prefix is re-appended as a token at the
/// end of the sequence. Scanning stops after the first hit; at most one
/// code is ever extracted. `rest` is the remaining tokens joined with
/// single spaces.
#[must_use]
pub fn pinch_zip(value: &str) -> PinchedZip {
    let mut tokens = tokenize(value);
    let mut zip = None;

    let hit = tokens
        .iter()
        .enumerate()
        .find_map(|(index, token)| ZIP_SUFFIX_RE.find(token).map(|m| (index, m.start())));

    if let Some((index, start)) = hit {
        let token = tokens.remove(index);
        if start == 0 {
            zip = Some(token);
        } else {
            zip = Some(token[start..].to_string());
            tokens.push(token[..start].to_string());
        }
    }

    PinchedZip {
        zip,
        rest: tokens.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinches_trailing_zip() {
        let pinched = pinch_zip("Boston, MA 02134");
        assert_eq!(pinched.zip.as_deref(), Some("02134"));
        assert_eq!(pinched.rest, "boston ma");
    }

    #[test]
    fn whitespace_variants_yield_same_zip() {
        for input in ["Boston, MA 02134", "boston,ma,02134", "  boston ma    02134 "] {
            assert_eq!(pinch_zip(input).zip.as_deref(), Some("02134"));
        }
    }

    #[test]
    fn splits_glued_zip_and_keeps_prefix() {
        let pinched = pinch_zip("aberdeen,sd57401");
        assert_eq!(pinched.zip.as_deref(), Some("57401"));
        assert_eq!(pinched.rest, "aberdeen sd");
    }

    #[test]
    fn pinches_only_the_first_zip() {
        let pinched = pinch_zip("12345 67890");
        assert_eq!(pinched.zip.as_deref(), Some("12345"));
        assert_eq!(pinched.rest, "67890");
    }

    #[test]
    fn ignores_short_digit_runs() {
        let pinched = pinch_zip("route 66 chicago");
        assert_eq!(pinched.zip, None);
        assert_eq!(pinched.rest, "route 66 chicago");
    }

    #[test]
    fn no_zip_returns_normalized_rest() {
        let pinched = pinch_zip("St. Louis, Mo.");
        assert_eq!(pinched.zip, None);
        assert_eq!(pinched.rest, "st louis mo");
    }

    #[test]
    fn empty_input() {
        let pinched = pinch_zip("");
        assert_eq!(pinched.zip, None);
        assert_eq!(pinched.rest, "");
    }
}
