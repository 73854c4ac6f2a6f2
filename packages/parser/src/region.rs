//! Trailing region extraction.
//!
//! Regions are expected to trail the locality in US-style strings, so
//! only the last one or two tokens are ever inspected. Matching tries,
//! in order: a 2-letter abbreviation, a one-word full name, then a
//! two-word full name. The one-word check runs before the two-word one
//! so that a city whose final word is itself a region name ("wichita
//! kansas") resolves to the one-word region rather than some two-word
//! interpretation.

use location_pinch_models::PinchedState;
use location_pinch_regions::{RegionEntry, RegionRegistry};

use crate::LocationError;
use crate::tokenize::{last_token, last_two_tokens, tokenize};

/// Extracts a trailing region against the built-in US state table.
///
/// # Errors
///
/// Returns [`LocationError::AmbiguousRegion`] if more than one registry
/// entry matches the trailing tokens.
pub fn pinch_state(value: &str) -> Result<PinchedState, LocationError> {
    pinch_state_with(value, RegionRegistry::us_states())
}

/// Extracts a trailing region against a caller-supplied registry.
///
/// Finding no region is not an error: the result carries an empty
/// `state` and the input text unchanged in `rest`.
///
/// # Errors
///
/// Returns [`LocationError::AmbiguousRegion`] if more than one registry
/// entry matches the trailing tokens. Name strings are unique in a
/// well-formed registry, so this only triggers on a corrupt table.
pub fn pinch_state_with(
    value: &str,
    registry: &RegionRegistry,
) -> Result<PinchedState, LocationError> {
    let tokens = tokenize(value);
    let Some(last) = last_token(&tokens) else {
        return Ok(no_match(value));
    };

    // A trailing 2-letter code wins outright.
    if registry.lookup_abbreviation(last).is_some() {
        return Ok(PinchedState {
            state: last.to_uppercase(),
            rest: tokens[..tokens.len() - 1].join(" "),
        });
    }

    // One-word full name: exact whole-token match, never a substring
    // test ("indianapolis" must not hit "indiana").
    let candidates: Vec<&RegionEntry> = registry
        .entries()
        .iter()
        .filter(|entry| entry.name.eq_ignore_ascii_case(last))
        .collect();

    if !candidates.is_empty() {
        let rest = tokens[..tokens.len() - 1].join(" ");
        return resolve(last, candidates, rest);
    }

    // Two-word full name: the registry name must be a prefix of the
    // joined last two tokens and must itself contain a space.
    let Some((first, second)) = last_two_tokens(&tokens) else {
        return Ok(no_match(value));
    };
    let joined = format!("{first} {second}");
    let candidates: Vec<&RegionEntry> = registry
        .entries()
        .iter()
        .filter(|entry| {
            let name = entry.name.to_lowercase();
            name.contains(' ') && joined.starts_with(&name)
        })
        .collect();

    if candidates.is_empty() {
        return Ok(no_match(value));
    }
    let rest = tokens[..tokens.len() - 2].join(" ");
    resolve(&joined, candidates, rest)
}

fn no_match(value: &str) -> PinchedState {
    PinchedState {
        state: String::new(),
        rest: value.to_string(),
    }
}

fn resolve(
    candidate: &str,
    candidates: Vec<&RegionEntry>,
    rest: String,
) -> Result<PinchedState, LocationError> {
    match candidates.as_slice() {
        [entry] => Ok(PinchedState {
            state: entry.abbreviation.to_uppercase(),
            rest,
        }),
        _ => Err(LocationError::AmbiguousRegion {
            candidate: candidate.to_string(),
            matches: candidates
                .iter()
                .map(|entry| entry.abbreviation.clone())
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinches_trailing_abbreviation() {
        let pinched = pinch_state("chicago, il").unwrap();
        assert_eq!(pinched.state, "IL");
        assert_eq!(pinched.rest, "chicago");
    }

    #[test]
    fn pinches_one_word_name() {
        let pinched = pinch_state("chicago illinois").unwrap();
        assert_eq!(pinched.state, "IL");
        assert_eq!(pinched.rest, "chicago");
    }

    #[test]
    fn one_word_name_wins_over_two_word_attempt() {
        let pinched = pinch_state("wichita kansas").unwrap();
        assert_eq!(pinched.state, "KS");
        assert_eq!(pinched.rest, "wichita");
    }

    #[test]
    fn pinches_two_word_name() {
        let pinched = pinch_state("las vegas new mexico").unwrap();
        assert_eq!(pinched.state, "NM");
        assert_eq!(pinched.rest, "las vegas");
    }

    #[test]
    fn repeated_two_word_name() {
        let pinched = pinch_state("new york new york").unwrap();
        assert_eq!(pinched.state, "NY");
        assert_eq!(pinched.rest, "new york");
    }

    #[test]
    fn no_match_keeps_input_unchanged() {
        let pinched = pinch_state("indianapolis").unwrap();
        assert_eq!(pinched.state, "");
        assert_eq!(pinched.rest, "indianapolis");
        assert!(!pinched.found());
    }

    #[test]
    fn no_match_returns_original_text() {
        // On a miss the rest is the caller's text, not the normalized form.
        let pinched = pinch_state("Indianapolis!").unwrap();
        assert_eq!(pinched.state, "");
        assert_eq!(pinched.rest, "Indianapolis!");
    }

    #[test]
    fn resolves_straggler_abbreviation() {
        let pinched = pinch_state("santa fe, n. m.").unwrap();
        assert_eq!(pinched.state, "NM");
        assert_eq!(pinched.rest, "santa fe");
    }

    #[test]
    fn state_only_input_leaves_empty_rest() {
        let pinched = pinch_state("washington").unwrap();
        assert_eq!(pinched.state, "WA");
        assert_eq!(pinched.rest, "");
    }

    #[test]
    fn empty_input_is_a_miss() {
        let pinched = pinch_state("").unwrap();
        assert_eq!(pinched.state, "");
        assert_eq!(pinched.rest, "");
    }

    #[test]
    fn honors_injected_registry() {
        let registry = RegionRegistry::new(vec![RegionEntry::new("Gondor", "GD")]);
        let pinched = pinch_state_with("minas tirith gondor", &registry).unwrap();
        assert_eq!(pinched.state, "GD");
        assert_eq!(pinched.rest, "minas tirith");

        // The built-in table knows nothing about it.
        let pinched = pinch_state("minas tirith gondor").unwrap();
        assert_eq!(pinched.state, "");
    }

    #[test]
    fn duplicate_names_are_ambiguous() {
        let registry = RegionRegistry::new(vec![
            RegionEntry::new("Kansas", "KS"),
            RegionEntry::new("Kansas", "KA"),
        ]);
        let err = pinch_state_with("wichita kansas", &registry).unwrap_err();
        assert!(matches!(err, LocationError::AmbiguousRegion { .. }));
    }
}
