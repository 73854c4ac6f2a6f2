#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heuristic deconstruction of free-form US location strings.
//!
//! Pulls the postal code, state, and city out of strings like
//! `"St. Louis, MO 63108"` or `"jonesboro,Ar.72401"`. This is a
//! deconstruction pipeline, not a validator or geocoder: it never checks
//! that a city exists in a state, and it performs no I/O.
//!
//! # Pipeline
//!
//! - **Normalize**: separators collapse, punctuation is stripped
//!   (hyphens survive), stray trailing fragments regroup.
//! - **Pinch zip**: the first token ending in 5 digits is removed; a
//!   glued prefix (`"sd57401"`) stays in play as its own token.
//! - **Pinch state**: the trailing one or two tokens are matched against
//!   the region registry: abbreviation first, then one-word name, then
//!   two-word name. A found postal code never suppresses this stage.
//! - **Finish**: optional alias expansion (`St` -> `Saint`), then
//!   title-casing of whatever remains as the city.
//!
//! Every stage is a pure function over its input; the only shared
//! resource is the read-only region table.
//!
//! # Usage
//!
//! ```rust
//! use location_pinch_parser::parse_location;
//!
//! let parsed = parse_location("jonesboro, Ar. 72401", false)?;
//! assert_eq!(parsed.city, "Jonesboro");
//! assert_eq!(parsed.state, "AR");
//! assert_eq!(parsed.zip.as_deref(), Some("72401"));
//! # Ok::<(), location_pinch_parser::LocationError>(())
//! ```

pub mod city;
pub mod normalize;
pub mod region;
pub mod tokenize;
pub mod zip;

use thiserror::Error;

pub use city::{title_case, transform_city};
pub use location_pinch_models::{ParsedLocation, PinchedState, PinchedZip};
pub use location_pinch_regions::{RegionEntry, RegionRegistry};
pub use normalize::strip;
pub use region::{pinch_state, pinch_state_with};
pub use tokenize::tokenize;
pub use zip::pinch_zip;

/// Errors from location deconstruction.
#[derive(Debug, Error)]
pub enum LocationError {
    /// More than one registry entry matched the trailing tokens. Region
    /// names are unique in a well-formed registry, so this signals a
    /// corrupt table rather than bad user input, and it propagates.
    #[error("found more than one region for {candidate:?}: {matches:?}")]
    AmbiguousRegion {
        /// The token text that matched multiple entries.
        candidate: String,
        /// Abbreviations of every entry that matched.
        matches: Vec<String>,
    },
}

/// Deconstructs a location string against the built-in US state table.
///
/// When `expand_city_alias` is set, a leading `St`/`Mt`/`Ft` on the
/// remaining city text expands to `Saint`/`Mount`/`Fort`. The city is
/// always title-cased.
///
/// # Errors
///
/// Returns [`LocationError::AmbiguousRegion`] if the registry resolves
/// the trailing tokens to more than one region.
pub fn parse_location(
    value: &str,
    expand_city_alias: bool,
) -> Result<ParsedLocation, LocationError> {
    parse_location_with(value, expand_city_alias, RegionRegistry::us_states())
}

/// Deconstructs a location string against a caller-supplied registry.
///
/// # Errors
///
/// Returns [`LocationError::AmbiguousRegion`] if the registry resolves
/// the trailing tokens to more than one region.
pub fn parse_location_with(
    value: &str,
    expand_city_alias: bool,
    registry: &RegionRegistry,
) -> Result<ParsedLocation, LocationError> {
    let pinched_zip = zip::pinch_zip(value);
    // A found postal code never short-circuits the rest of the pipeline;
    // region and city extraction continue on the zip-stripped remainder.
    let pinched_state = region::pinch_state_with(&pinched_zip.rest, registry)?;

    let city = if expand_city_alias {
        city::transform_city(&pinched_state.rest)
    } else {
        pinched_state.rest
    };

    let parsed = ParsedLocation {
        city: city::title_case(&city),
        state: pinched_state.state,
        zip: pinched_zip.zip,
    };
    log::trace!("parsed {value:?} -> {parsed:?}");
    Ok(parsed)
}
