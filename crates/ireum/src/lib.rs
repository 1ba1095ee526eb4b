//! Ireum - Typo-tolerant Establishment Name Search
//!
//! Ireum resolves free-text, possibly misspelled establishment names (restaurants,
//! shops, venues) against a catalog snapshot. It is built for mixed Korean/Latin
//! names, where users routinely drop a final consonant, misplace a space or slip
//! on the keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use ireum::{MatchType, NameIndexEntry, NameSearcher};
//!
//! // Build a searcher over a catalog snapshot
//! let searcher = NameSearcher::new([
//!     NameIndexEntry::new(1, "Golden Dragon BBQ").with_distance(2.0),
//!     NameIndexEntry::new(2, "Golden Dragon House").with_distance(0.5),
//!     NameIndexEntry::new(3, "교촌치킨 강남점"),
//! ])?;
//!
//! // Substring matches, nearest first
//! let results = searcher.search("golden dragon");
//! assert_eq!(results[0].id(), &2);
//! assert_eq!(results[1].id(), &1);
//!
//! // Misspelled Hangul is resolved at the jamo level
//! let results = searcher.search("교촌치킨강나점");
//! assert_eq!(results[0].id(), &3);
//! assert_eq!(results[0].match_type(), MatchType::Phonetic);
//! # Ok::<(), ireum::error::IreumError>(())
//! ```
//!
//! # Features
//!
//! - **Match cascade**: exact, then substring, then phonetic; later stages only run
//!   when earlier ones find nothing
//! - **Jamo-level similarity**: Hangul syllables are split into their letters before
//!   fuzzy comparison, so a one-letter typo costs one letter
//! - **Distance ranking**: exact and substring results are ordered by the caller's
//!   distance, entries without one last
//! - **Batch Processing**: [`NameSearcher::search_bulk`] resolves many queries in parallel
//! - **Text utilities**: [`normalize`], [`decompose`] and [`similarity`] are usable on
//!   their own
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
mod index;
mod search;
mod text;

pub use crate::core::{NameSearcher, SearchResults, SearchResultsBatch, SearcherInfo};

pub use config::{ConfigError, SearchConfigBuilder};
pub use index::{IndexError, NameIndex, NameIndexEntry};
pub use search::{
    EXACT_SCORE, MatchResult, MatchType, PhoneticHitPolicy, SUBSTRING_SCORE, SearchConfig,
    match_cascade,
};
pub use text::{
    Jamo, SYLLABLE_BOUNDARY, contains_hangul, decompose, decompose_syllable,
    is_hangul_syllable, is_match, normalize, phonetic_key, similarity,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Ireum library.
///
/// This sets up structured logging with configurable levels and filtering.
/// `RUST_LOG` takes precedence over `level` when it is set. Calling this more
/// than once is harmless; only the first call installs a subscriber.
///
/// # Arguments
///
/// * `level` - The minimum log level to display
///
/// # Examples
///
/// ```rust
/// use ireum::init_logging;
/// use tracing::Level;
///
/// // Initialize with info-level logging
/// init_logging(Level::INFO)?;
/// # Ok::<(), ireum::error::IreumError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::IreumError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?;

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    fn catalog() -> Vec<NameIndexEntry<u32>> {
        vec![
            NameIndexEntry::new(1, "Golden Dragon BBQ").with_distance(2.0),
            NameIndexEntry::new(2, "Golden Dragon House").with_distance(0.5),
            NameIndexEntry::new(3, "Silver Spoon").with_distance(1.0),
            NameIndexEntry::new(4, "교촌치킨 강남점").with_distance(0.3),
            NameIndexEntry::new(5, "스타벅스 역삼점"),
        ]
    }

    #[test]
    fn test_searcher_creation() {
        setup_test_env();

        let searcher = NameSearcher::new(catalog());
        assert!(searcher.is_ok(), "Should be able to create searcher");
        assert_eq!(searcher.unwrap().index().len(), 5);
    }

    #[test]
    fn test_exact_search() {
        setup_test_env();

        let searcher = NameSearcher::new(catalog()).unwrap();
        let results = searcher.search("  golden dragon bbq!! ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), &1);
        assert_eq!(results[0].match_type(), MatchType::Exact);
        assert_eq!(results[0].score(), EXACT_SCORE);
    }

    #[test]
    fn test_substring_search() {
        setup_test_env();

        let searcher = NameSearcher::new(catalog()).unwrap();
        let results = searcher.search("Golden Dragon");
        let ids: Vec<u32> = results.iter().map(|r| *r.id()).collect();
        assert_eq!(ids, vec![2, 1], "Nearest entry should come first");
        assert!(results.iter().all(|r| r.score() == SUBSTRING_SCORE));
    }

    #[test]
    fn test_phonetic_search() {
        setup_test_env();

        let searcher = NameSearcher::new(catalog()).unwrap();
        let results = searcher.search("교촌치킨 강나점");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), &4);
        assert_eq!(results[0].match_type(), MatchType::Phonetic);
        assert!(results[0].score() > 0.9);
    }

    #[test]
    fn test_batch_search() {
        setup_test_env();

        let searcher = NameSearcher::new(catalog()).unwrap();
        let queries = vec!["silver", "스타벅스", "xyz"];
        let results = searcher.search_bulk(&queries);
        assert_eq!(results.len(), 3, "Should have results for all 3 queries");
        assert_eq!(results[0][0].id(), &3);
        assert_eq!(results[1][0].id(), &5);
        assert!(results[2].is_empty());
    }

    #[test]
    fn test_configuration() {
        setup_test_env();

        let config = SearchConfigBuilder::strict().top_k(2).build().unwrap();
        assert_eq!(config.top_k(), 2);

        let searcher = NameSearcher::with_config(catalog(), config).unwrap();
        assert_eq!(searcher.config(), &config);
        let results = searcher.search("스타벅수");
        assert!(results.len() <= 2, "Should respect top_k in configuration");
    }

    #[test]
    fn test_empty_search() {
        setup_test_env();

        let searcher = NameSearcher::new(catalog()).unwrap();
        assert!(searcher.search("").is_empty());
        assert!(searcher.search("  ~~  ").is_empty());
        assert!(searcher.search("XYZ123NONEXISTENT").is_empty());
    }

    #[test]
    fn test_repeated_logging_init() {
        assert!(init_logging(tracing::Level::WARN).is_ok());
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }
}
