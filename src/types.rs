//! Core types for rapid_positionrank
//!
//! This module defines the fundamental data structures used throughout the library,
//! including part-of-speech tags, tokenizer output, ranked keyphrases, and configuration.

use crate::errors::{PositionRankError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Coarse part-of-speech tags
///
/// Tagger backends emit their own tag alphabets (Penn Treebank, Universal
/// Dependencies, IPADIC); [`crate::nlp::tagset::TagScheme`] maps them onto
/// this enum so the phrase pattern and POS filter are backend-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag represents an adjective
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Adjective)
    }

    /// Parse from a Universal Dependencies (spaCy-style) tag
    pub fn from_universal(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// Get the Universal Dependencies tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }

    /// The default token filter: adjectives and nouns
    pub fn default_filter() -> Vec<PosTag> {
        vec![PosTag::Adjective, PosTag::Noun, PosTag::ProperNoun]
    }
}

// ============================================================================
// Tokenizer output
// ============================================================================

/// A word with the raw tag assigned by a tagger backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedWord {
    /// The surface form
    pub text: String,
    /// The backend's tag, in that backend's alphabet
    pub tag: String,
}

impl TaggedWord {
    /// Create a new tagged word
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Output of a [`crate::nlp::tokenizer::Tokenizer`]
///
/// `tokens` is the ordered sequence of surface words that passed the POS
/// filter. `phrases` holds multi-word candidates, each a run of surface words
/// joined with [`TokenizedText::PHRASE_DELIMITER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedText {
    pub tokens: Vec<String>,
    pub phrases: Vec<String>,
}

impl TokenizedText {
    /// Delimiter between words inside a phrase
    pub const PHRASE_DELIMITER: char = '_';

    /// Create tokenizer output from tokens and already-joined phrases
    pub fn new(tokens: Vec<String>, phrases: Vec<String>) -> Self {
        Self { tokens, phrases }
    }

    /// Join phrase words with the phrase delimiter
    pub fn join_phrase<S: AsRef<str>>(words: &[S]) -> String {
        let mut joined = String::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                joined.push(Self::PHRASE_DELIMITER);
            }
            joined.push_str(word.as_ref());
        }
        joined
    }

    /// Split a joined phrase back into its words
    pub fn phrase_words(phrase: &str) -> impl Iterator<Item = &str> {
        phrase.split(Self::PHRASE_DELIMITER)
    }

    /// Check if the tokenizer produced nothing to rank
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ============================================================================
// Keyphrase
// ============================================================================

/// Whether a candidate came from the token list or the phrase list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Word,
    Phrase,
}

/// A ranked keyphrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    /// Surface words joined with a single space
    pub text: String,
    /// Normalized words joined with a single space (the deduplication key)
    pub stem: String,
    /// Sum of the PositionRank scores of the constituent stems
    pub score: f64,
    /// The rank (1-indexed, based on score)
    pub rank: usize,
    /// Origin of the candidate
    pub kind: CandidateKind,
}

/// Ranked keyphrases together with solver convergence information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub phrases: Vec<Keyphrase>,
    /// False when the solver stopped at the iteration cap
    pub converged: bool,
    pub iterations: usize,
}

impl ExtractionResult {
    /// The keyphrase texts in rank order
    pub fn texts(&self) -> Vec<String> {
        self.phrases.iter().map(|p| p.text.clone()).collect()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for PositionRank extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionRankConfig {
    /// Damping factor (alpha): probability of following a graph edge
    pub damping: f64,
    /// Co-occurrence window; each side spans `ceil(window_size / 2)` positions
    pub window_size: usize,
    /// Maximum number of keyphrases to return
    pub top_n: usize,
    /// Maximum power iterations
    pub max_iterations: usize,
    /// Stop when the Euclidean distance between iterates is at most this value
    pub convergence_threshold: f64,
    /// Language code used to select the normalizer (e.g., "en", "ja")
    pub language: String,
    /// POS tags a token must carry to be ranked
    pub pos_filter: Vec<PosTag>,
}

impl Default for PositionRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            window_size: 6,
            top_n: 10,
            max_iterations: 100,
            convergence_threshold: 0.001,
            language: "en".to_string(),
            pos_filter: PosTag::default_filter(),
        }
    }
}

impl PositionRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(PositionRankError::invalid_config(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.window_size == 0 {
            return Err(PositionRankError::invalid_config("window_size must be > 0"));
        }

        if self.top_n == 0 {
            return Err(PositionRankError::invalid_config("top_n must be > 0"));
        }

        if self.max_iterations == 0 {
            return Err(PositionRankError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(PositionRankError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder method: set top N keyphrases to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set the POS filter
    pub fn with_pos_filter(mut self, pos_filter: Vec<PosTag>) -> Self {
        self.pos_filter = pos_filter;
        self
    }
}
