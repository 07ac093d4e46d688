//! # rapid_positionrank
//!
//! PositionRank keyphrase extraction with Python bindings.
//!
//! PositionRank runs a biased PageRank over a word co-occurrence graph. The
//! teleport vector favors words that occur early and often, so the words of
//! a title or opening sentence tend to rank first. Scored words are then
//! combined into multi-word phrases and deduplicated by stem.
//!
//! ## Features
//!
//! - **Pluggable**: any [`Tokenizer`] and [`Normalizer`] can be supplied
//! - **Unicode-aware**: the built-in tagger segments on Unicode word boundaries
//! - **Batch**: documents are ranked in parallel with rayon
//! - **Python bindings**: optional integration via PyO3 (`python` feature)
//!
//! ## Example
//!
//! ```
//! use rapid_positionrank::{rank_keyphrases, HeuristicTokenizer, PorterStemmer};
//!
//! let keyphrases = rank_keyphrases(
//!     "Position biased ranking of keyphrases in scholarly documents.",
//!     &HeuristicTokenizer::default(),
//!     0.85,
//!     6,
//!     5,
//!     &PorterStemmer::new(),
//! )
//! .unwrap();
//! assert!(!keyphrases.is_empty());
//! ```

pub mod errors;
pub mod graph;
pub mod json;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod types;
pub mod variants;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{PositionRankError, Result};
pub use types::{
    CandidateKind, ExtractionResult, Keyphrase, PosTag, PositionRankConfig, TaggedWord,
    TokenizedText,
};

// Re-export main functionality
pub use graph::{
    builder::{CooccurrenceGraph, GraphBuilder},
    matrix::DenseMatrix,
};
pub use nlp::{
    normalizer::{IdentityNormalizer, Language, Normalizer, PorterStemmer},
    taggers::{HeuristicTagger, MecabTagger, PretaggedTagger},
    tagset::TagScheme,
    tokenizer::{HeuristicTokenizer, PosTagger, TaggedTokenizer, Tokenizer},
};
pub use pagerank::{position::PositionBiasedPageRank, PageRankResult};
pub use phrase::{dedup_by_stem, score_and_rank, ScoredCandidate};
pub use variants::position_rank::{rank_keyphrases, PositionRank};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
