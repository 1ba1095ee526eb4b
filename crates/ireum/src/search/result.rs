use std::fmt;

use crate::index::NameIndexEntry;

/// Score given to every exact match.
pub const EXACT_SCORE: f64 = 1.0;
/// Score given to every substring match.
pub const SUBSTRING_SCORE: f64 = 0.8;

/// Which cascade stage produced a result.
///
/// Stages are tried in declaration order and a later stage only runs when every
/// earlier one came back empty, so all results of one search share a variant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// Normalized query equals the normalized name
    Exact,
    /// Normalized query is contained in the normalized name
    Substring,
    /// Jamo-level similarity cleared a phonetic threshold
    Phonetic,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Substring => "substring",
            Self::Phonetic => "phonetic",
        };
        f.write_str(label)
    }
}

/// A single resolved name.
///
/// Results are created fresh for every search and expose read-only accessors.
///
/// # Examples
///
/// ```rust
/// use ireum::{MatchType, NameIndexEntry, NameSearcher};
///
/// let searcher = NameSearcher::new([NameIndexEntry::new(7, "Golden Dragon BBQ")])?;
/// let results = searcher.search("golden dragon bbq");
///
/// assert_eq!(results[0].id(), &7);
/// assert_eq!(results[0].match_type(), MatchType::Exact);
/// assert_eq!(results[0].score(), 1.0);
/// # Ok::<(), ireum::error::IreumError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<Id> {
    id: Id,
    display_name: String,
    match_type: MatchType,
    score: f64,
    distance: Option<f64>,
}

impl<Id: Clone> MatchResult<Id> {
    pub(crate) fn from_entry(entry: &NameIndexEntry<Id>, match_type: MatchType, score: f64) -> Self {
        Self {
            id: entry.id.clone(),
            display_name: entry.display_name.clone(),
            match_type,
            score,
            distance: entry.distance,
        }
    }
}

impl<Id> MatchResult<Id> {
    /// The caller's identifier for the matched entry.
    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub const fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// `1.0` for exact, `0.8` for substring, the raw similarity for phonetic matches.
    pub const fn score(&self) -> f64 {
        self.score
    }

    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Consume the result, keeping only the identifier.
    pub fn into_id(self) -> Id {
        self.id
    }
}

impl<Id: fmt::Display> fmt::Display for MatchResult<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{} {:.3}]",
            self.display_name, self.id, self.match_type, self.score
        )?;
        if let Some(distance) = self.distance {
            write!(f, " @ {distance:.2}")?;
        }
        Ok(())
    }
}
