//! Stem-based deduplication
//!
//! Surface variants of the same keyphrase ("neural network" / "neural
//! networks") normalize to the same stemmed form. Only the best-ranked
//! variant of each stemmed form is kept.

use crate::phrase::scoring::ScoredCandidate;
use crate::types::Keyphrase;
use rustc_hash::FxHashSet;

/// Keep the first candidate of each stemmed form, up to `limit` results
///
/// `ranked` must already be in rank order. Returns fewer than `limit`
/// keyphrases when there are fewer distinct stemmed forms.
pub fn dedup_by_stem(ranked: Vec<ScoredCandidate>, limit: usize) -> Vec<Keyphrase> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut result = Vec::with_capacity(limit.min(ranked.len()));

    for candidate in ranked {
        if result.len() >= limit {
            break;
        }

        let stem = candidate.stem_key();
        if seen.contains(&stem) {
            #[cfg(feature = "tracing")]
            tracing::debug!(text = %candidate.text(), stem = %stem, "dropping duplicate keyphrase");
            continue;
        }
        seen.insert(stem.clone());

        result.push(Keyphrase {
            text: candidate.text(),
            stem,
            score: candidate.score,
            rank: result.len() + 1,
            kind: candidate.kind,
        });
    }

    result
}
