//! Match catalogue
//!
//! This module provides the MatchCatalogue component: the single
//! authoritative store of matches, loaded once before any operation is
//! replayed and read-only afterwards. Settlement looks matches up by id to
//! resolve accepted bets.
//!
//! # Duplicate Handling
//!
//! If a duplicate match id is encountered while loading, only the first
//! occurrence is kept. Later rows with the same id are ignored.

use crate::types::{Match, MatchId};
use std::collections::HashMap;

/// Immutable mapping from match id to odds and outcome
pub struct MatchCatalogue {
    /// Map of match id to match data
    matches: HashMap<MatchId, Match>,
}

impl MatchCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        MatchCatalogue {
            matches: HashMap::new(),
        }
    }

    /// Insert a match into the catalogue
    ///
    /// First occurrence wins; a match with an already-known id is ignored.
    pub fn insert(&mut self, m: Match) {
        self.matches.entry(m.id.clone()).or_insert(m);
    }

    /// Look up a match by id
    pub fn get(&self, match_id: &str) -> Option<&Match> {
        self.matches.get(match_id)
    }

    /// Number of matches loaded
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Default for MatchCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchOutcome;

    fn sample_match(id: &str, result: MatchOutcome) -> Match {
        Match {
            id: id.to_string(),
            rate_a: 2.0,
            rate_b: 1.5,
            result,
        }
    }

    #[test]
    fn test_new_catalogue_is_empty() {
        let catalogue = MatchCatalogue::new();
        assert!(catalogue.is_empty());
        assert_eq!(catalogue.len(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalogue = MatchCatalogue::new();
        catalogue.insert(sample_match("m1", MatchOutcome::A));

        let m = catalogue.get("m1").unwrap();
        assert_eq!(m.rate_a, 2.0);
        assert_eq!(m.result, MatchOutcome::A);
        assert!(catalogue.get("m2").is_none());
    }

    #[test]
    fn test_first_occurrence_wins_on_duplicate_id() {
        let mut catalogue = MatchCatalogue::new();
        catalogue.insert(sample_match("m1", MatchOutcome::A));
        catalogue.insert(sample_match("m1", MatchOutcome::Draw));

        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.get("m1").unwrap().result, MatchOutcome::A);
    }
}
