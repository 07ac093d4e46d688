//! Phrase scoring and ranking
//!
//! This module maps stem scores back onto surface tokens and phrases,
//! orders them, and removes candidates that share a stemmed form.

pub mod dedup;
pub mod scoring;

pub use dedup::dedup_by_stem;
pub use scoring::{rank_candidates, score_and_rank, score_candidates, ScoredCandidate};
