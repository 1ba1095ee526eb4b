//! Name matching.
//!
//! This module contains the match cascade that resolves a query against a
//! [`NameIndex`](crate::NameIndex), the result types it produces, and the ranking
//! rules applied to each stage's output.

mod cascade;
mod ranker;
mod result;

pub use cascade::{PhoneticHitPolicy, SearchConfig, match_cascade};
pub use result::{EXACT_SCORE, MatchResult, MatchType, SUBSTRING_SCORE};
