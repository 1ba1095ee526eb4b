//! Immutable in-memory name index.
//!
//! The index is built once from a catalog snapshot and owns its own copy of every
//! entry. Each name is normalized and decomposed exactly once here, so a search
//! only pays for the query side and a scan. There is no incremental mutation:
//! a changed catalog means building a new index.

pub use error::IndexError;
use error::Result;

use ahash::AHashMap as HashMap;
use tracing::{debug, info, instrument, warn};

use crate::text::{contains_hangul, decompose, normalize};

/// One establishment as supplied by the catalog.
///
/// `id` is the caller's own key and is never inspected. `distance` is an
/// optional proximity (for example kilometres from the user) computed upstream;
/// when present it orders certain matches closest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NameIndexEntry<Id> {
    pub id: Id,
    pub display_name: String,
    pub distance: Option<f64>,
}

impl<Id> NameIndexEntry<Id> {
    pub fn new(id: Id, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            distance: None,
        }
    }

    /// Attach a proximity distance.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}

/// An entry together with the forms the cascade compares against.
#[derive(Debug, Clone)]
pub(crate) struct IndexedName<Id> {
    pub(crate) entry: NameIndexEntry<Id>,
    pub(crate) normalized: String,
    pub(crate) phonetic: Vec<char>,
}

/// The searchable snapshot of a catalog.
///
/// Entries keep their catalog order, which is the tie-break order everywhere
/// in the cascade.
///
/// # Examples
///
/// ```rust
/// use ireum::{NameIndex, NameIndexEntry};
///
/// let index = NameIndex::new([
///     NameIndexEntry::new(1, "Golden Dragon BBQ").with_distance(1.2),
///     NameIndexEntry::new(2, "교촌치킨 강남점"),
/// ])?;
/// assert_eq!(index.len(), 2);
/// # Ok::<(), ireum::error::IreumError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NameIndex<Id> {
    names: Vec<IndexedName<Id>>,
    /// normalized name -> positions in `names`, ascending
    by_normalized: HashMap<String, Vec<usize>>,
}

impl<Id> NameIndex<Id> {
    /// Build an index from catalog entries, in catalog order.
    ///
    /// Fails if any entry carries a negative or non-finite distance.
    #[instrument(name = "Build Name Index", skip_all, level = "info")]
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = NameIndexEntry<Id>>,
    {
        let t_build = std::time::Instant::now();
        let entries = entries.into_iter();
        let mut names = Vec::with_capacity(entries.size_hint().0);
        let mut by_normalized: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, entry) in entries.enumerate() {
            if let Some(distance) = entry.distance
                && (!distance.is_finite() || distance < 0.0)
            {
                return Err(IndexError::InvalidDistance { position, distance });
            }

            let normalized = normalize(&entry.display_name);
            if normalized.is_empty() {
                warn!(
                    position,
                    display_name = %entry.display_name,
                    "Name normalizes to an empty string and can never match"
                );
            } else {
                by_normalized
                    .entry(normalized.clone())
                    .or_default()
                    .push(position);
            }
            let phonetic = decompose(&normalized).chars().collect();
            names.push(IndexedName {
                entry,
                normalized,
                phonetic,
            });
        }

        info!(
            entries = names.len(),
            distinct_names = by_normalized.len(),
            elapsed_seconds = t_build.elapsed().as_secs_f32(),
            "Name index built"
        );
        debug!(
            hangul_entries = names
                .iter()
                .filter(|n| contains_hangul(&n.normalized))
                .count(),
            "Index composition"
        );

        Ok(Self {
            names,
            by_normalized,
        })
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The entry at `position` in catalog order.
    pub fn get(&self, position: usize) -> Option<&NameIndexEntry<Id>> {
        self.names.get(position).map(|n| &n.entry)
    }

    /// Iterate the entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &NameIndexEntry<Id>> {
        self.names.iter().map(|n| &n.entry)
    }

    pub(crate) fn names(&self) -> &[IndexedName<Id>] {
        &self.names
    }

    /// Positions of every entry whose normalized name equals `normalized`.
    pub(crate) fn exact_positions(&self, normalized: &str) -> &[usize] {
        self.by_normalized
            .get(normalized)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum IndexError {
        #[error("Entry {position} has invalid distance {distance}: must be finite and non-negative")]
        InvalidDistance { position: usize, distance: f64 },
    }
    pub type Result<T> = std::result::Result<T, IndexError>;
}
