#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared value types for the location parser.
//!
//! This crate contains only data types and simple accessors. Everything
//! here has value semantics: each parse call builds its results fresh and
//! nothing holds shared mutable state.

use serde::{Deserialize, Serialize};

/// A deconstructed US-style location string.
///
/// This is the sole externally observable output of
/// `parse_location`; it has no identity beyond its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLocation {
    /// Title-cased locality text, empty when nothing remained.
    pub city: String,
    /// Uppercased 2-letter region code, empty when no region was found.
    pub state: String,
    /// 5-digit postal code, if one was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Result of removing a postal code from a location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinchedZip {
    /// The extracted 5-digit code, if any token carried one.
    pub zip: Option<String>,
    /// The remaining tokens, re-joined with single spaces.
    pub rest: String,
}

/// Result of removing a trailing region from a location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinchedState {
    /// Uppercased 2-letter code, or empty when no region matched.
    pub state: String,
    /// The text left over after the region tokens were consumed. When no
    /// region matched this is the caller's input, unchanged.
    pub rest: String,
}

impl PinchedState {
    /// Returns `true` if a region was extracted.
    #[must_use]
    pub fn found(&self) -> bool {
        !self.state.is_empty()
    }
}
