//! Core name search functionality for the ireum library.
//!
//! This module provides the main [`NameSearcher`] interface for resolving free-text,
//! possibly misspelled establishment names against a catalog snapshot.
//!
//! # Quick Start
//!
//! ```rust
//! use ireum::{MatchType, NameIndexEntry, NameSearcher};
//!
//! let searcher = NameSearcher::new([
//!     NameIndexEntry::new(1, "Golden Dragon BBQ"),
//!     NameIndexEntry::new(2, "Golden Dragon House"),
//! ])?;
//!
//! let results = searcher.search("golden dragon");
//! assert_eq!(results.len(), 2);
//! assert!(results.iter().all(|r| r.match_type() == MatchType::Substring));
//! # Ok::<(), ireum::error::IreumError>(())
//! ```
//!
//! # Match stages
//!
//! A query is resolved by the first stage that finds anything:
//! - **Exact**: the normalized query equals a normalized name
//! - **Substring**: the normalized query is contained in a normalized name
//! - **Phonetic**: jamo-level similarity, for typos and spacing mistakes in Hangul

use rayon::prelude::*;
use tracing::{info, instrument};

use crate::{
    config,
    error::IreumError,
    index::{NameIndex, NameIndexEntry},
    search::{MatchResult, SearchConfig, match_cascade},
    text::contains_hangul,
};

pub type SearchResults<Id> = Vec<MatchResult<Id>>;
pub type SearchResultsBatch<Id> = Vec<Vec<MatchResult<Id>>>;

/// The main name searcher.
///
/// Owns an immutable [`NameIndex`] and a default [`SearchConfig`]. Searching only
/// needs `&self`, so one searcher can serve any number of threads at once; the
/// index only changes through [`rebuild`](Self::rebuild), which needs exclusive
/// access.
///
/// # Examples
///
/// Typo-tolerant Hangul lookup:
/// ```rust
/// use ireum::{MatchType, NameIndexEntry, NameSearcher};
///
/// let searcher = NameSearcher::new([
///     NameIndexEntry::new("a", "스타벅스 역삼점"),
///     NameIndexEntry::new("b", "교촌치킨 강남점"),
/// ])?;
///
/// // Final consonant of 남 dropped
/// let results = searcher.search("교촌치킨 강나점");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id(), &"b");
/// assert_eq!(results[0].match_type(), MatchType::Phonetic);
/// # Ok::<(), ireum::error::IreumError>(())
/// ```
///
/// With custom configuration:
/// ```rust
/// use ireum::{NameIndexEntry, NameSearcher, SearchConfigBuilder};
///
/// let config = SearchConfigBuilder::lenient().top_k(3).build()?;
/// let searcher = NameSearcher::with_config([NameIndexEntry::new(1, "Silver Spoon")], config)?;
/// assert!(searcher.search("silverspoon").len() <= 3);
/// # Ok::<(), ireum::error::IreumError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NameSearcher<Id> {
    index: NameIndex<Id>,
    config: SearchConfig,
}

impl<Id: Clone> NameSearcher<Id> {
    /// Build a searcher over `entries` with the default configuration.
    pub fn new<I>(entries: I) -> Result<Self, IreumError>
    where
        I: IntoIterator<Item = NameIndexEntry<Id>>,
    {
        Self::with_config(entries, SearchConfig::default())
    }

    /// Build a searcher over `entries` that uses `config` for [`search`](Self::search).
    #[instrument(name = "Create NameSearcher", level = "info", skip_all)]
    pub fn with_config<I>(entries: I, config: SearchConfig) -> Result<Self, IreumError>
    where
        I: IntoIterator<Item = NameIndexEntry<Id>>,
    {
        let index = NameIndex::new(entries)?;
        info!(entries = index.len(), ?config, "NameSearcher ready");
        Ok(Self { index, config })
    }

    /// Replace the index with one built from a fresh catalog snapshot.
    ///
    /// On error the current index is left untouched.
    #[instrument(name = "Rebuild NameSearcher Index", level = "info", skip_all)]
    pub fn rebuild<I>(&mut self, entries: I) -> Result<(), IreumError>
    where
        I: IntoIterator<Item = NameIndexEntry<Id>>,
    {
        let index = NameIndex::new(entries)?;
        info!(
            previous_entries = self.index.len(),
            entries = index.len(),
            "Rebuilt name index"
        );
        self.index = index;
        Ok(())
    }

    /// Resolve `query` with the searcher's configuration.
    ///
    /// An empty result means "no match", never an error.
    pub fn search(&self, query: &str) -> SearchResults<Id> {
        self.search_with_config(query, &self.config)
    }

    /// Resolve `query` with an explicit configuration.
    #[instrument(name = "Name Search", level = "debug", skip(self, config))]
    pub fn search_with_config(&self, query: &str, config: &SearchConfig) -> SearchResults<Id> {
        match_cascade(&self.index, query, config)
    }

    /// Resolve `query` with loose tuning parameters, validating them first.
    ///
    /// Requires `top_k >= 1` and
    /// `0 <= phonetic_candidate_threshold < phonetic_threshold <= 1`.
    ///
    /// ```rust
    /// use ireum::{NameIndexEntry, NameSearcher};
    ///
    /// let searcher = NameSearcher::new([NameIndexEntry::new(1, "Golden Dragon BBQ")])?;
    /// assert_eq!(searcher.search_with_params("Golden Dragon BBQ", 5, 0.9, 0.7)?.len(), 1);
    /// assert!(searcher.search_with_params("Golden Dragon BBQ", 5, 0.7, 0.9).is_err());
    /// # Ok::<(), ireum::error::IreumError>(())
    /// ```
    pub fn search_with_params(
        &self,
        query: &str,
        top_k: usize,
        phonetic_threshold: f64,
        phonetic_candidate_threshold: f64,
    ) -> Result<SearchResults<Id>, IreumError> {
        config::validate(top_k, phonetic_threshold, phonetic_candidate_threshold)?;
        let config = SearchConfig {
            top_k,
            phonetic_threshold,
            phonetic_candidate_threshold,
            ..self.config
        };
        Ok(self.search_with_config(query, &config))
    }

    /// The configuration used by [`search`](Self::search).
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Change the configuration used by [`search`](Self::search).
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Access the underlying `NameIndex`.
    pub const fn index(&self) -> &NameIndex<Id> {
        &self.index
    }

    /// Get information about the searcher's index.
    pub fn info(&self) -> SearcherInfo {
        SearcherInfo {
            entries: self.index.len(),
            hangul_entries: self
                .index
                .iter()
                .filter(|e| contains_hangul(&e.display_name))
                .count(),
            entries_with_distance: self
                .index
                .iter()
                .filter(|e| e.distance.is_some())
                .count(),
            config: self.config,
        }
    }
}

impl<Id: Clone + Send + Sync> NameSearcher<Id> {
    /// Resolve many queries in parallel, returning results in query order.
    ///
    /// ```rust
    /// use ireum::{NameIndexEntry, NameSearcher};
    ///
    /// let searcher = NameSearcher::new([
    ///     NameIndexEntry::new(1, "Golden Dragon BBQ"),
    ///     NameIndexEntry::new(2, "교촌치킨 강남점"),
    /// ])?;
    /// let batch = searcher.search_bulk(&["dragon", "교촌", "nothing here"]);
    /// assert_eq!(batch.len(), 3);
    /// assert!(batch[2].is_empty());
    /// # Ok::<(), ireum::error::IreumError>(())
    /// ```
    pub fn search_bulk<Q>(&self, queries: &[Q]) -> SearchResultsBatch<Id>
    where
        Q: AsRef<str> + Sync,
    {
        self.search_bulk_with_config(queries, &self.config)
    }

    #[instrument(name = "Bulk Name Search", level = "debug", skip_all, fields(queries = queries.len()))]
    pub fn search_bulk_with_config<Q>(
        &self,
        queries: &[Q],
        config: &SearchConfig,
    ) -> SearchResultsBatch<Id>
    where
        Q: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| match_cascade(&self.index, query.as_ref(), config))
            .collect()
    }
}

impl<Id: Clone> From<NameIndex<Id>> for NameSearcher<Id> {
    fn from(index: NameIndex<Id>) -> Self {
        Self {
            index,
            config: SearchConfig::default(),
        }
    }
}

/// Information about a `NameSearcher`'s index and configuration.
#[derive(Debug, Clone)]
pub struct SearcherInfo {
    pub entries: usize,
    pub hangul_entries: usize,
    pub entries_with_distance: usize,
    pub config: SearchConfig,
}

impl SearcherInfo {
    /// Get a human-readable summary of the searcher.
    pub fn summary(&self) -> String {
        format!(
            "NameSearcher with {} entries ({} Hangul, {} with distance), top_k={} thresholds={}/{}",
            self.entries,
            self.hangul_entries,
            self.entries_with_distance,
            self.config.top_k(),
            self.config.phonetic_threshold(),
            self.config.phonetic_candidate_threshold()
        )
    }
}
