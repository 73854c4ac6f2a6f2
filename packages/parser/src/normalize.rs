//! Text normalization for location strings.
//!
//! Provides the deterministic cleanup pass applied before any extraction
//! stage: separators collapse to single spaces, punctuation is stripped,
//! and a trailing straggler fragment (`"n m"` left behind by `"n. m."`)
//! is regrouped into one token so region matching can treat it as an
//! abbreviation-like unit.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse whitespace runs and commas into single spaces.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+|,").expect("valid regex"));

/// Regex to strip punctuation that does not contribute to matching.
/// Hyphens are deliberately absent: they are part of city names like
/// "Winston-Salem".
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[./#!$%^&*;:{}=_`~()]").expect("valid regex"));

/// Regex to regroup a trailing single-character fragment with the
/// character before it (`"n m"` -> `"nm"`).
static STRAGGLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)\s(\w)$").expect("valid regex"));

/// Regex to collapse any residual multi-space runs.
static MULTISPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Normalizes a location string.
///
/// The pipeline:
/// 1. Collapse whitespace runs and commas into single spaces, trim
/// 2. Strip punctuation (hyphens are preserved)
/// 3. Regroup a trailing straggler fragment into one token
/// 4. Collapse residual multi-spaces
///
/// Idempotent: `strip(strip(x)) == strip(x)`.
#[must_use]
pub fn strip(value: &str) -> String {
    let separated = SEPARATOR_RE.replace_all(value, " ");
    let depunctuated = PUNCTUATION_RE.replace_all(separated.trim(), "");
    let regrouped = STRAGGLER_RE.replace(depunctuated.trim(), "${1}${2}");
    MULTISPACE_RE.replace_all(&regrouped, " ").into_owned()
}
