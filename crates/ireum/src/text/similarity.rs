//! Edit-distance ratio between two (usually jamo-decomposed) strings.
//!
//! The ratio is `2 * matched / (len(a) + len(b))` where `matched` is the length
//! of the longest common subsequence, i.e. the alignment left over once the
//! insert/delete (Indel) distance has been paid. Lengths are counted in `char`s
//! so a jamo or a syllable marker is one unit. Thresholds such as `0.9` are
//! calibrated against exactly this formula.

/// Length of the longest common subsequence of `a` and `b`.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Keep the DP row over the shorter input.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let mut prev = vec![0_usize; short.len() + 1];
    let mut curr = vec![0_usize; short.len() + 1];
    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Similarity of two strings in `[0, 1]`.
///
/// Two empty inputs score `0.0`: emptiness carries no information and must
/// never look like a perfect match.
///
/// ```rust
/// use ireum::{decompose, similarity};
///
/// assert_eq!(similarity("abc", "abc"), 1.0);
/// assert_eq!(similarity("", ""), 0.0);
///
/// // One dropped final consonant out of seven syllables
/// let indexed = decompose("교촌치킨강남점");
/// let typed = decompose("교촌치킨강나점");
/// assert!(similarity(&indexed, &typed) > 0.9);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    similarity_chars(&a, &b)
}

/// [`similarity`] over already-collected characters, so a query can be split
/// once and compared against many candidates.
pub(crate) fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

/// Decide whether `a` and `b` are similar enough, returning the score alongside.
///
/// The comparison is strict: a score equal to `threshold` is not a match.
pub fn is_match(a: &str, b: &str, threshold: f64) -> (bool, f64) {
    let score = similarity(a, b);
    (score > threshold, score)
}
