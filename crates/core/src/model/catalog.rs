use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::country::Country;

/// The loaded, filtered list of countries available for quiz rounds.
///
/// Built once by the catalog provider and read-only afterwards; the quiz
/// engine draws every round from this in-memory list and never reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    /// Looks up a country by display name.
    ///
    /// Names are not guaranteed unique in the source data; ties resolve to
    /// the first match.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name() == name)
    }

    /// Number of unique display names.
    ///
    /// This, not `len`, bounds how many distinct choices a round can offer.
    #[must_use]
    pub fn distinct_names(&self) -> usize {
        self.countries
            .iter()
            .map(Country::name)
            .collect::<HashSet<_>>()
            .len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
