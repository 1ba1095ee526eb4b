//! Ordering rules for cascade output.
//!
//! Certain matches (exact, substring) are ordered by proximity. Phonetic
//! candidates are ordered by score and collected through a bounded pool so a
//! large index never materialises more than `top_k` candidates at once.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use itertools::Itertools;

use super::MatchResult;

/// Closest first; entries without a distance sort after all entries with one.
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by distance, so ties and distance-less entries keep index order.
pub(crate) fn rank_by_distance<Id>(results: Vec<MatchResult<Id>>) -> Vec<MatchResult<Id>> {
    results
        .into_iter()
        .sorted_by(|a, b| compare_distance(a.distance(), b.distance()))
        .collect()
}

/// A phonetic candidate: an index position and its similarity.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    position: usize,
    score: f64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// Greater means better: higher score, then earlier index position.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.position.cmp(&self.position))
    }
}

/// Running top-k selection over phonetic candidates.
///
/// Backed by a min-heap so the weakest kept candidate is always at the top and
/// can be evicted in `O(log k)` when something better arrives. The heap grows
/// with what is actually kept, never with `capacity` up front.
#[derive(Debug)]
pub(crate) struct CandidatePool {
    capacity: usize,
    heap: BinaryHeap<Reverse<Candidate>>,
}

impl CandidatePool {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::new(),
        }
    }

    /// Offer a candidate, returning whether it was kept.
    pub(crate) fn offer(&mut self, position: usize, score: f64) -> bool {
        if self.capacity == 0 {
            return false;
        }
        let candidate = Candidate { position, score };
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(candidate));
            return true;
        }
        match self.heap.peek() {
            Some(Reverse(weakest)) if candidate > *weakest => {
                self.heap.pop();
                self.heap.push(Reverse(candidate));
                true
            }
            _ => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drain into `(position, score)` pairs, best first.
    pub(crate) fn into_ranked(self) -> Vec<(usize, f64)> {
        // Ascending `Reverse<Candidate>` is descending `Candidate`.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(c)| (c.position, c.score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        index::NameIndexEntry,
        search::{MatchType, SUBSTRING_SCORE},
    };

    fn result(id: u32, distance: Option<f64>) -> MatchResult<u32> {
        let mut entry = NameIndexEntry::new(id, format!("entry {id}"));
        entry.distance = distance;
        MatchResult::from_entry(&entry, MatchType::Substring, SUBSTRING_SCORE)
    }

    #[test]
    fn test_rank_by_distance_closest_first_missing_last() {
        let ranked = rank_by_distance(vec![
            result(1, None),
            result(2, Some(3.0)),
            result(3, Some(0.5)),
            result(4, None),
            result(5, Some(3.0)),
        ]);
        let ids: Vec<u32> = ranked.iter().map(|r| *r.id()).collect();
        assert_eq!(ids, vec![3, 2, 5, 1, 4]);
    }

    #[test]
    fn test_rank_by_distance_without_distances_keeps_order() {
        let ranked = rank_by_distance(vec![result(9, None), result(1, None), result(5, None)]);
        let ids: Vec<u32> = ranked.iter().map(|r| *r.id()).collect();
        assert_eq!(ids, vec![9, 1, 5]);
    }

    #[test]
    fn test_pool_keeps_top_k() {
        let mut pool = CandidatePool::new(3);
        for (position, score) in [(0, 0.71), (1, 0.95), (2, 0.80), (3, 0.72), (4, 0.88)] {
            pool.offer(position, score);
        }
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.into_ranked(), vec![(1, 0.95), (4, 0.88), (2, 0.80)]);
    }

    #[test]
    fn test_pool_rejects_weaker_when_full() {
        let mut pool = CandidatePool::new(2);
        assert!(pool.offer(0, 0.9));
        assert!(pool.offer(1, 0.8));
        assert!(!pool.offer(2, 0.75));
        assert!(pool.offer(3, 0.85));
        assert_eq!(pool.into_ranked(), vec![(0, 0.9), (3, 0.85)]);
    }

    #[test]
    fn test_pool_ties_prefer_earlier_positions() {
        let mut pool = CandidatePool::new(2);
        assert!(pool.offer(5, 0.8));
        assert!(pool.offer(6, 0.8));
        // Same score, later position: not better than anything kept
        assert!(!pool.offer(7, 0.8));
        assert_eq!(pool.into_ranked(), vec![(5, 0.8), (6, 0.8)]);
    }

    #[test]
    fn test_pool_with_unbounded_capacity_grows_on_demand() {
        let mut pool = CandidatePool::new(usize::MAX);
        assert!(pool.offer(0, 0.75));
        assert!(pool.offer(1, 0.85));
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.into_ranked(), vec![(1, 0.85), (0, 0.75)]);
    }

    #[test]
    fn test_pool_zero_capacity() {
        let mut pool = CandidatePool::new(0);
        assert!(!pool.offer(0, 1.0));
        assert!(pool.into_ranked().is_empty());
    }
}
