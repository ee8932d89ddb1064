//! Filtered views over the roster
//!
//! A view is an ordered list of character ids plus a "no match" flag. Views
//! never own characters; rendering resolves ids against the roster so the
//! latest power is always shown.

use crate::aggregates::Roster;
use crate::entities::Character;
use crate::ids::CharacterId;

/// Autocomplete only kicks in once the query has this many characters
pub const AUTOCOMPLETE_MIN_CHARS: usize = 3;

/// A derived subsequence of the roster
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    ids: Vec<CharacterId>,
    no_match: bool,
}

impl FilteredView {
    /// The whole roster, unfiltered
    pub fn all(roster: &Roster) -> Self {
        Self {
            ids: roster.ids().collect(),
            no_match: false,
        }
    }

    /// Exact, case-insensitive name match against the full roster.
    ///
    /// An empty query yields the full roster. The query is compared as
    /// typed, so surrounding whitespace prevents a match.
    pub fn exact(roster: &Roster, query: &str) -> Self {
        if query.is_empty() {
            return Self::all(roster);
        }
        Self::from_matches(
            roster
                .characters()
                .iter()
                .filter(|c| c.name_equals(query))
                .map(|c| c.id)
                .collect(),
        )
    }

    /// Autocomplete: narrow this view by case-insensitive substring.
    ///
    /// Queries shorter than [`AUTOCOMPLETE_MIN_CHARS`] leave the view as is.
    /// Whitespace counts towards the length and takes part in the match.
    pub fn narrow(&self, roster: &Roster, query: &str) -> Self {
        if query.chars().count() < AUTOCOMPLETE_MIN_CHARS {
            return self.clone();
        }
        Self::from_matches(
            self.ids
                .iter()
                .copied()
                .filter(|id| roster.get(*id).is_some_and(|c| c.name_contains(query)))
                .collect(),
        )
    }

    fn from_matches(ids: Vec<CharacterId>) -> Self {
        let no_match = ids.is_empty();
        Self { ids, no_match }
    }

    pub fn ids(&self) -> &[CharacterId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when the last filter matched nothing
    pub fn no_match(&self) -> bool {
        self.no_match
    }

    /// Resolve the view against the roster, in view order
    pub fn characters<'a>(&'a self, roster: &'a Roster) -> impl Iterator<Item = &'a Character> {
        self.ids.iter().filter_map(|id| roster.get(*id))
    }
}
