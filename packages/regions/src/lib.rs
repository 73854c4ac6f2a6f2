#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static registry of US state names and abbreviations.
//!
//! The registry is an immutable list of `{name, abbreviation}` pairs,
//! queryable case-insensitively by either side. The built-in table
//! ([`RegionRegistry::us_states`]) covers the 50 states plus the District
//! of Columbia, is initialized once on first use, and is never mutated,
//! so it is safe to share across threads without locking.
//!
//! The parser crates take a `&RegionRegistry` parameter rather than
//! reaching for the static directly, so tests can inject a fake table.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A single US state-level region: full name plus unique 2-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    /// Canonical display name, e.g. `"New York"`.
    pub name: String,
    /// Canonical 2-letter abbreviation, e.g. `"NY"`.
    pub abbreviation: String,
}

impl RegionEntry {
    /// Creates an entry from canonical display forms.
    #[must_use]
    pub fn new(name: &str, abbreviation: &str) -> Self {
        Self {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
        }
    }
}

/// The 50 states plus the District of Columbia.
const US_STATES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Process-wide registry instance backing the convenience lookups.
static US_REGISTRY: LazyLock<RegionRegistry> = LazyLock::new(|| {
    RegionRegistry::new(
        US_STATES
            .iter()
            .map(|(name, abbreviation)| RegionEntry::new(name, abbreviation))
            .collect(),
    )
});

/// An immutable, case-insensitive lookup table of [`RegionEntry`] values.
#[derive(Debug, Clone)]
pub struct RegionRegistry {
    entries: Vec<RegionEntry>,
    /// Lowercased abbreviation -> index into `entries`.
    by_abbreviation: BTreeMap<String, usize>,
}

impl RegionRegistry {
    /// Builds a registry from a list of entries. Insertion order is
    /// preserved for [`entries`](Self::entries); on duplicate
    /// abbreviations the first entry wins.
    #[must_use]
    pub fn new(entries: Vec<RegionEntry>) -> Self {
        let mut by_abbreviation = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_abbreviation
                .entry(entry.abbreviation.to_lowercase())
                .or_insert(index);
        }
        Self {
            entries,
            by_abbreviation,
        }
    }

    /// The shared built-in table of US states.
    #[must_use]
    pub fn us_states() -> &'static Self {
        &US_REGISTRY
    }

    /// Looks up an entry by its 2-letter code, case-insensitively.
    #[must_use]
    pub fn lookup_abbreviation(&self, code: &str) -> Option<&RegionEntry> {
        let index = *self.by_abbreviation.get(&code.to_lowercase())?;
        self.entries.get(index)
    }

    /// Looks up an entry by its full name (exact whole-string match,
    /// case-insensitive).
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<&RegionEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Resolves a free-form value to a 2-letter code: a 2-character input
    /// is treated as an abbreviation already and returned uppercased,
    /// anything else goes through a name lookup.
    #[must_use]
    pub fn abbreviate(&self, value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.len() == 2 {
            return Some(trimmed.to_uppercase());
        }
        self.lookup_name(trimmed)
            .map(|entry| entry.abbreviation.clone())
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
