//! The exact → substring → phonetic match cascade.
//!
//! Each stage only runs when every earlier stage came back empty. Exact and
//! substring matches express unambiguous intent and are never displaced by a
//! phonetic guess, however well it scores; the phonetic stage is the expensive,
//! least certain fallback for typos, spacing and keyboard slips in Hangul input.

use tracing::{debug, instrument, trace};

use super::{
    EXACT_SCORE, MatchResult, MatchType, SUBSTRING_SCORE,
    ranker::{CandidatePool, rank_by_distance},
};
use crate::{
    SearchConfigBuilder,
    index::NameIndex,
    text::{decompose, normalize, similarity_chars},
};

/// What the phonetic stage returns when some entry clears `phonetic_threshold`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneticHitPolicy {
    /// Return the first entry in catalog order that clears the threshold and stop
    /// scanning. A later entry may score higher and still lose.
    #[default]
    FirstHit,
    /// Scan the whole index and return the highest-scoring entry above the
    /// threshold, the earliest one on ties.
    BestHit,
}

/// Tuning for a search call.
///
/// Always valid: the only ways to obtain one are [`Default`] and
/// [`SearchConfigBuilder::build`], which rejects inconsistent thresholds.
///
/// # Examples
///
/// ```rust
/// use ireum::SearchConfig;
///
/// let config = SearchConfig::builder()
///     .top_k(3)
///     .phonetic_threshold(0.92)
///     .phonetic_candidate_threshold(0.75)
///     .build()?;
/// assert_eq!(config.top_k(), 3);
/// # Ok::<(), ireum::error::IreumError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub(crate) top_k: usize,
    pub(crate) phonetic_threshold: f64,
    pub(crate) phonetic_candidate_threshold: f64,
    pub(crate) hit_policy: PhoneticHitPolicy,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Maximum number of phonetic candidates returned.
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Score a single phonetic hit must strictly exceed.
    pub const fn phonetic_threshold(&self) -> f64 {
        self.phonetic_threshold
    }

    /// Score a phonetic candidate must strictly exceed to enter the pool.
    pub const fn phonetic_candidate_threshold(&self) -> f64 {
        self.phonetic_candidate_threshold
    }

    pub const fn hit_policy(&self) -> PhoneticHitPolicy {
        self.hit_policy
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            phonetic_threshold: 0.9,
            phonetic_candidate_threshold: 0.7,
            hit_policy: PhoneticHitPolicy::FirstHit,
        }
    }
}

/// Run the cascade for one query.
#[instrument(name = "Match Cascade", level = "debug", skip(index, config), fields(entries = index.len()))]
pub fn match_cascade<Id: Clone>(
    index: &NameIndex<Id>,
    query: &str,
    config: &SearchConfig,
) -> Vec<MatchResult<Id>> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        debug!("Query is empty after normalization");
        return Vec::new();
    }

    let exact = exact_stage(index, &normalized);
    if !exact.is_empty() {
        debug!(results = exact.len(), "Resolved by exact stage");
        return exact;
    }

    let substring = substring_stage(index, &normalized);
    if !substring.is_empty() {
        debug!(results = substring.len(), "Resolved by substring stage");
        return substring;
    }

    let phonetic = phonetic_stage(index, &normalized, config);
    debug!(results = phonetic.len(), "Phonetic stage complete");
    phonetic
}

/// Every entry whose normalized name equals the normalized query.
fn exact_stage<Id: Clone>(index: &NameIndex<Id>, normalized: &str) -> Vec<MatchResult<Id>> {
    let names = index.names();
    let results = index
        .exact_positions(normalized)
        .iter()
        .map(|&position| {
            MatchResult::from_entry(&names[position].entry, MatchType::Exact, EXACT_SCORE)
        })
        .collect();
    rank_by_distance(results)
}

/// Every entry whose normalized name contains the normalized query.
fn substring_stage<Id: Clone>(index: &NameIndex<Id>, normalized: &str) -> Vec<MatchResult<Id>> {
    let results = index
        .names()
        .iter()
        .filter(|name| name.normalized.contains(normalized))
        .map(|name| {
            MatchResult::from_entry(&name.entry, MatchType::Substring, SUBSTRING_SCORE)
        })
        .collect();
    rank_by_distance(results)
}

/// Best score two strings of these lengths could possibly reach.
fn score_upper_bound(a_len: usize, b_len: usize) -> f64 {
    let total = a_len + b_len;
    if total == 0 {
        return 0.0;
    }
    (2 * a_len.min(b_len)) as f64 / total as f64
}

/// Jamo-level fuzzy matching: a single confident hit, or a bounded pool of candidates.
fn phonetic_stage<Id: Clone>(
    index: &NameIndex<Id>,
    normalized: &str,
    config: &SearchConfig,
) -> Vec<MatchResult<Id>> {
    let query: Vec<char> = decompose(normalized).chars().collect();
    let names = index.names();
    // The pool can never hold more than the whole index.
    let mut pool = CandidatePool::new(config.top_k.min(names.len()));
    let mut best_hit: Option<(usize, f64)> = None;

    for (position, name) in names.iter().enumerate() {
        // Neither threshold is reachable with this length mismatch.
        if score_upper_bound(query.len(), name.phonetic.len())
            <= config.phonetic_candidate_threshold
        {
            continue;
        }

        let score = similarity_chars(&query, &name.phonetic);
        trace!(position, score, name = %name.entry.display_name, "Phonetic score");

        if score > config.phonetic_threshold {
            match config.hit_policy {
                PhoneticHitPolicy::FirstHit => {
                    debug!(position, score, "Phonetic hit, stopping scan");
                    return vec![MatchResult::from_entry(
                        &name.entry,
                        MatchType::Phonetic,
                        score,
                    )];
                }
                PhoneticHitPolicy::BestHit => {
                    if best_hit.is_none_or(|(_, best)| score > best) {
                        best_hit = Some((position, score));
                    }
                }
            }
        } else if score > config.phonetic_candidate_threshold {
            pool.offer(position, score);
        }
    }

    if let Some((position, score)) = best_hit {
        debug!(position, score, "Best phonetic hit");
        return vec![MatchResult::from_entry(
            &names[position].entry,
            MatchType::Phonetic,
            score,
        )];
    }

    debug!(candidates = pool.len(), "No phonetic hit, returning candidate pool");
    pool.into_ranked()
        .into_iter()
        .map(|(position, score)| {
            MatchResult::from_entry(&names[position].entry, MatchType::Phonetic, score)
        })
        .collect()
}
