//! Locality post-processing.

use regex::Regex;
use std::sync::LazyLock;

static SAINT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^st\b").expect("valid regex"));
static MOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^mt\b").expect("valid regex"));
static FORT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^ft\b").expect("valid regex"));

/// Expands a leading city abbreviation: `St` -> `Saint`, `Mt` -> `Mount`,
/// `Ft` -> `Fort`. Only the first word of the string is considered; the
/// abbreviation matches case-insensitively and the remainder is left
/// untouched.
#[must_use]
pub fn transform_city(value: &str) -> String {
    if SAINT_RE.is_match(value) {
        SAINT_RE.replace(value, "Saint").into_owned()
    } else if MOUNT_RE.is_match(value) {
        MOUNT_RE.replace(value, "Mount").into_owned()
    } else if FORT_RE.is_match(value) {
        FORT_RE.replace(value, "Fort").into_owned()
    } else {
        value.to_string()
    }
}

/// Capitalizes the first letter of every space- or hyphen-separated word,
/// so `"winston-salem"` becomes `"Winston-Salem"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = ch == ' ' || ch == '-';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_st_to_saint() {
        assert_eq!(transform_city("St Louis"), "Saint Louis");
        assert_eq!(transform_city("st louis"), "Saint louis");
    }

    #[test]
    fn expands_mt_to_mount() {
        assert_eq!(transform_city("mt union"), "Mount union");
    }

    #[test]
    fn expands_ft_to_fort() {
        assert_eq!(transform_city("ft wayne"), "Fort wayne");
    }

    #[test]
    fn only_expands_at_the_beginning() {
        assert_eq!(transform_city("louis st"), "louis st");
        assert_eq!(transform_city("forest hills"), "forest hills");
    }

    #[test]
    fn does_not_expand_prefixes_of_longer_words() {
        assert_eq!(transform_city("sterling"), "sterling");
        assert_eq!(transform_city("stockton"), "stockton");
    }

    #[test]
    fn transform_of_empty_string_is_empty() {
        assert_eq!(transform_city(""), "");
    }

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("st louis"), "St Louis");
        assert_eq!(title_case("jonesboro"), "Jonesboro");
    }

    #[test]
    fn title_cases_across_hyphens() {
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
    }

    #[test]
    fn title_case_of_empty_string_is_empty() {
        assert_eq!(title_case(""), "");
    }
}
