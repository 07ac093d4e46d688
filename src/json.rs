//! JSON interface for pre-tagged documents and batch processing
//!
//! Callers that already run a tagger (spaCy, CoreNLP, MeCab) pass its output
//! as JSON; no text is re-tokenized on this side.
//!
//! ```json
//! {
//!   "tokens": [{"text": "neural", "tag": "JJ"}, {"text": "networks", "tag": "NNS"}],
//!   "tag_scheme": "penn",
//!   "config": {"top_n": 5}
//! }
//! ```

use crate::errors::Result;
use crate::nlp::taggers::PretaggedTagger;
use crate::nlp::tagset::TagScheme;
use crate::nlp::tokenizer::{TaggedTokenizer, DEFAULT_MIN_PHRASE_WORDS};
use crate::types::{ExtractionResult, PositionRankConfig, TaggedWord};
use crate::variants::position_rank::PositionRank;
use rayon::prelude::*;
use serde::Deserialize;

/// Input token from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonToken {
    pub text: String,
    /// Tag in the document's `tag_scheme` alphabet
    pub tag: String,
}

impl From<&JsonToken> for TaggedWord {
    fn from(token: &JsonToken) -> Self {
        TaggedWord::new(token.text.as_str(), token.tag.as_str())
    }
}

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    pub tokens: Vec<JsonToken>,
    /// "penn", "universal" (default) or "ipadic"
    #[serde(default)]
    pub tag_scheme: Option<String>,
    /// Missing fields take their defaults
    #[serde(default)]
    pub config: Option<PositionRankConfig>,
    #[serde(default)]
    pub min_phrase_words: Option<usize>,
}

impl JsonDocument {
    fn scheme(&self) -> TagScheme {
        self.tag_scheme
            .as_deref()
            .map(|s| s.parse().unwrap_or_default())
            .unwrap_or_default()
    }
}

/// Rank one parsed document
///
/// # Errors
///
/// [`PositionRankError::EmptyInput`](crate::errors::PositionRankError::EmptyInput)
/// when no token passes the POS filter, as for raw text.
pub fn extract_document(doc: &JsonDocument) -> Result<ExtractionResult> {
    let words: Vec<TaggedWord> = doc.tokens.iter().map(TaggedWord::from).collect();
    let tokenizer = TaggedTokenizer::new(PretaggedTagger::new(words), doc.scheme())
        .with_min_phrase_words(doc.min_phrase_words.unwrap_or(DEFAULT_MIN_PHRASE_WORDS));

    let extractor = PositionRank::with_config(doc.config.clone().unwrap_or_default());

    extractor.extract_for_language("", &tokenizer)
}

/// Extract keyphrases from a JSON document, returning the result as JSON
///
/// # Errors
///
/// [`PositionRankError::Serialization`](crate::errors::PositionRankError::Serialization)
/// for malformed input, or any error raised while ranking.
pub fn extract_from_json(json_input: &str) -> Result<String> {
    let doc: JsonDocument = serde_json::from_str(json_input)?;
    let result = extract_document(&doc)?;
    Ok(serde_json::to_string(&result)?)
}

/// Batch extract keyphrases from a JSON array of documents
///
/// Documents are ranked in parallel; the output array keeps input order.
/// The first failing document fails the whole batch.
pub fn extract_batch_from_json(json_input: &str) -> Result<String> {
    let docs: Vec<JsonDocument> = serde_json::from_str(json_input)?;

    let results = docs
        .par_iter()
        .map(extract_document)
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::to_string(&results)?)
}
