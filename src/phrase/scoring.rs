//! Candidate scoring
//!
//! Maps converged stem scores back onto the surface tokens and phrases the
//! tokenizer produced. A token takes the score of its stem; a phrase takes
//! the sum over its words.

use crate::nlp::normalizer::Normalizer;
use crate::phrase::dedup::dedup_by_stem;
use crate::types::{CandidateKind, Keyphrase, TokenizedText};
use rustc_hash::FxHashMap;

/// A token or phrase with its aggregated score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Surface words
    pub words: Vec<String>,
    /// Normalized form of each word
    pub stems: Vec<String>,
    pub kind: CandidateKind,
    pub score: f64,
}

impl ScoredCandidate {
    /// Surface words joined with a space
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Normalized words joined with a space; candidates sharing this key are duplicates
    pub fn stem_key(&self) -> String {
        self.stems.join(" ")
    }
}

/// Score every token and phrase
///
/// Candidates come out in enumeration order: tokens first, then phrases,
/// each in the order the tokenizer produced them. A word whose stem is not
/// a graph node contributes 0.
pub fn score_candidates<S, N>(
    tokens: &[S],
    phrases: &[S],
    scores: &[f64],
    word2idx: &FxHashMap<String, u32>,
    normalizer: &N,
) -> Vec<ScoredCandidate>
where
    S: AsRef<str>,
    N: Normalizer + ?Sized,
{
    let stem_score = |stem: &str| -> f64 {
        word2idx
            .get(stem)
            .and_then(|&id| scores.get(id as usize))
            .copied()
            .unwrap_or(0.0)
    };

    let candidate = |words: Vec<String>, kind: CandidateKind| {
        let stems: Vec<String> = words.iter().map(|w| normalizer.normalize(w)).collect();
        let score: f64 = stems.iter().map(|s| stem_score(s)).sum();
        ScoredCandidate {
            words,
            stems,
            kind,
            score,
        }
    };

    let words = tokens
        .iter()
        .map(|token| candidate(vec![token.as_ref().to_string()], CandidateKind::Word));

    let multi = phrases.iter().map(|phrase| {
        let words = TokenizedText::phrase_words(phrase.as_ref())
            .map(str::to_string)
            .collect();
        candidate(words, CandidateKind::Phrase)
    });

    words.chain(multi).collect()
}

/// Sort candidates by descending score
///
/// The sort is stable, so exactly tied candidates keep enumeration order.
pub fn rank_candidates(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// Score, sort and deduplicate, returning at most `num_keyphrase` keyphrases
pub fn score_and_rank<S, N>(
    tokens: &[S],
    phrases: &[S],
    scores: &[f64],
    word2idx: &FxHashMap<String, u32>,
    normalizer: &N,
    num_keyphrase: usize,
) -> Vec<Keyphrase>
where
    S: AsRef<str>,
    N: Normalizer + ?Sized,
{
    let candidates = score_candidates(tokens, phrases, scores, word2idx, normalizer);
    dedup_by_stem(rank_candidates(candidates), num_keyphrase)
}
