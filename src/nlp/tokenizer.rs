//! Tokenizer capability interface
//!
//! The ranking core never tags text itself. It consumes a [`Tokenizer`],
//! which turns raw text into the ordered tokens that passed a POS filter and
//! the multi-word phrase candidates. [`TaggedTokenizer`] implements that
//! contract once for any [`PosTagger`] backend.

use crate::errors::Result;
use crate::nlp::tagset::TagScheme;
use crate::nlp::taggers::HeuristicTagger;
use crate::types::{PosTag, TaggedWord, TokenizedText};
use std::ops::Range;

/// Turns raw text into rankable tokens and phrase candidates.
///
/// # Contract
///
/// - `tokens` holds the surface words whose POS is in `pos_filter`, in text order.
/// - `phrases` holds multi-word candidates joined with
///   [`TokenizedText::PHRASE_DELIMITER`].
/// - Backend failures are returned as
///   [`PositionRankError::Tokenization`](crate::errors::PositionRankError::Tokenization).
pub trait Tokenizer {
    /// Tokenize `text`, keeping tokens whose POS is in `pos_filter`
    fn tokenize(&self, text: &str, pos_filter: &[PosTag]) -> Result<TokenizedText>;
}

/// Assigns backend-specific POS tags to the words of a text.
pub trait PosTagger {
    /// Split `text` into words and tag each one
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>>;
}

/// Minimum number of words in a phrase candidate
pub const DEFAULT_MIN_PHRASE_WORDS: usize = 3;

/// A [`Tokenizer`] on top of any [`PosTagger`].
///
/// Phrases are maximal runs matching `Adjective* Noun+` (proper nouns count
/// as nouns), scanned left to right without overlap. Runs shorter than
/// `min_phrase_words` are matched but dropped.
#[derive(Debug, Clone)]
pub struct TaggedTokenizer<T> {
    tagger: T,
    scheme: TagScheme,
    min_phrase_words: usize,
}

impl<T: PosTagger> TaggedTokenizer<T> {
    /// Create a tokenizer for a tagger emitting tags in `scheme`
    pub fn new(tagger: T, scheme: TagScheme) -> Self {
        Self {
            tagger,
            scheme,
            min_phrase_words: DEFAULT_MIN_PHRASE_WORDS,
        }
    }

    /// Set minimum phrase length in words
    pub fn with_min_phrase_words(mut self, min_words: usize) -> Self {
        self.min_phrase_words = min_words.max(1);
        self
    }

    /// The tag alphabet of the wrapped tagger
    pub fn scheme(&self) -> TagScheme {
        self.scheme
    }
}

impl<T: PosTagger> Tokenizer for TaggedTokenizer<T> {
    fn tokenize(&self, text: &str, pos_filter: &[PosTag]) -> Result<TokenizedText> {
        let words = self.tagger.tag(text)?;
        let tags: Vec<PosTag> = words.iter().map(|w| self.scheme.coarse(&w.tag)).collect();

        let tokens = words
            .iter()
            .zip(&tags)
            .filter(|(_, pos)| pos_filter.contains(pos))
            .map(|(w, _)| w.text.clone())
            .collect();

        let phrases = phrase_spans(&tags, self.min_phrase_words)
            .into_iter()
            .map(|span| {
                let texts: Vec<&str> = words[span].iter().map(|w| w.text.as_str()).collect();
                TokenizedText::join_phrase(&texts)
            })
            .collect();

        Ok(TokenizedText::new(tokens, phrases))
    }
}

/// The built-in tokenizer: heuristic English tagging, no external services
pub type HeuristicTokenizer = TaggedTokenizer<HeuristicTagger>;

impl TaggedTokenizer<HeuristicTagger> {
    /// Create the built-in heuristic tokenizer
    pub fn heuristic() -> Self {
        Self::new(HeuristicTagger::new(), TagScheme::Universal)
    }
}

impl Default for TaggedTokenizer<HeuristicTagger> {
    fn default() -> Self {
        Self::heuristic()
    }
}

/// Find phrase spans matching `Adjective* Noun+` over a tag sequence
///
/// Matching is greedy and non-overlapping. Spans with fewer than `min_words`
/// tags still consume their positions.
pub fn phrase_spans(tags: &[PosTag], min_words: usize) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tags.len() {
        let adjectives = tags[i..].iter().take_while(|t| t.is_adjective()).count();
        let nouns = tags[i + adjectives..]
            .iter()
            .take_while(|t| t.is_noun())
            .count();

        if nouns == 0 {
            // An adjective run not followed by a noun can't start a match anywhere inside it
            i += adjectives.max(1);
            continue;
        }

        let end = i + adjectives + nouns;
        if end - i >= min_words {
            spans.push(i..end);
        }
        i = end;
    }

    spans
}
