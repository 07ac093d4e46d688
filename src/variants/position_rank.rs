//! PositionRank variant
//!
//! PositionRank biases PageRank towards words that appear earlier in the document.
//! The intuition is that important keywords often appear early (title, abstract opening).
//!
//! Bias formula: weight = Σ 1 / (position + 1)
//! summed over every occurrence of the word, then normalized.

use crate::errors::{PositionRankError, Result};
use crate::graph::builder::GraphBuilder;
use crate::nlp::normalizer::{Language, Normalizer};
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::position::PositionBiasedPageRank;
use crate::phrase::scoring::score_and_rank;
use crate::types::{ExtractionResult, Keyphrase, PositionRankConfig, TokenizedText};
use rayon::prelude::*;

/// Enter a tracing span for an extraction stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("position_rank_stage", stage = $name).entered();
    };
}

/// PositionRank implementation
#[derive(Debug, Clone, Default)]
pub struct PositionRank {
    config: PositionRankConfig,
}

impl PositionRank {
    /// Create a new PositionRank extractor with default config
    pub fn new() -> Self {
        Self {
            config: PositionRankConfig::default(),
        }
    }

    /// Create with custom config
    pub fn with_config(config: PositionRankConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &PositionRankConfig {
        &self.config
    }

    /// Extract keyphrases using PositionRank
    pub fn extract<T, N>(&self, text: &str, tokenizer: &T, normalizer: &N) -> Result<Vec<Keyphrase>>
    where
        T: Tokenizer + ?Sized,
        N: Normalizer + ?Sized,
    {
        Ok(self.extract_with_info(text, tokenizer, normalizer)?.phrases)
    }

    /// Extract keyphrases with convergence information
    ///
    /// # Errors
    ///
    /// - [`PositionRankError::InvalidConfig`] for an invalid configuration.
    /// - [`PositionRankError::Tokenization`] when the tokenizer fails; the
    ///   error is passed through unchanged.
    /// - [`PositionRankError::EmptyInput`] when the tokenizer keeps no tokens.
    pub fn extract_with_info<T, N>(
        &self,
        text: &str,
        tokenizer: &T,
        normalizer: &N,
    ) -> Result<ExtractionResult>
    where
        T: Tokenizer + ?Sized,
        N: Normalizer + ?Sized,
    {
        self.config.validate()?;

        let tokenized = {
            trace_stage!("tokenize");
            tokenizer.tokenize(text, &self.config.pos_filter)?
        };

        self.rank_validated(&tokenized, normalizer)
    }

    /// Extract using the normalizer selected by the configured language
    pub fn extract_for_language<T>(&self, text: &str, tokenizer: &T) -> Result<ExtractionResult>
    where
        T: Tokenizer + ?Sized,
    {
        let language: Language = self
            .config
            .language
            .parse()
            .unwrap_or(Language::Other);
        let normalizer = language.normalizer();
        self.extract_with_info(text, tokenizer, &*normalizer)
    }

    /// Extract keyphrases from many texts in parallel
    ///
    /// Every text is ranked independently; results keep input order.
    pub fn extract_batch<S, T, N>(
        &self,
        texts: &[S],
        tokenizer: &T,
        normalizer: &N,
    ) -> Vec<Result<ExtractionResult>>
    where
        S: AsRef<str> + Sync,
        T: Tokenizer + Sync + ?Sized,
        N: Normalizer + Sync + ?Sized,
    {
        texts
            .par_iter()
            .map(|text| self.extract_with_info(text.as_ref(), tokenizer, normalizer))
            .collect()
    }

    fn rank_validated<N>(&self, tokenized: &TokenizedText, normalizer: &N) -> Result<ExtractionResult>
    where
        N: Normalizer + ?Sized,
    {
        if tokenized.is_empty() {
            return Err(PositionRankError::empty_input(
                "tokenizer produced no tokens passing the POS filter",
            ));
        }

        let stems: Vec<String> = tokenized
            .tokens
            .iter()
            .map(|token| normalizer.normalize(token))
            .collect();

        let graph = {
            trace_stage!("graph");
            GraphBuilder::new(self.config.window_size).build(&stems)?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = stems.len(),
            nodes = graph.num_nodes(),
            "co-occurrence graph built"
        );

        let pagerank = {
            trace_stage!("rank");
            PositionBiasedPageRank::new()
                .with_damping(self.config.damping)
                .with_max_iterations(self.config.max_iterations)
                .with_threshold(self.config.convergence_threshold)
                .run(&graph)
        };

        let phrases = {
            trace_stage!("phrases");
            score_and_rank(
                &tokenized.tokens,
                &tokenized.phrases,
                &pagerank.scores,
                graph.word2idx(),
                normalizer,
                self.config.top_n,
            )
        };

        Ok(ExtractionResult {
            phrases,
            converged: pagerank.converged,
            iterations: pagerank.iterations,
        })
    }
}

/// Rank keyphrases of `text`, returning their space-joined surface forms
///
/// Uses the default iteration cap (100) and tolerance (0.001).
pub fn rank_keyphrases<T, N>(
    text: &str,
    tokenizer: &T,
    alpha: f64,
    window_size: usize,
    num_keyphrase: usize,
    normalizer: &N,
) -> Result<Vec<String>>
where
    T: Tokenizer + ?Sized,
    N: Normalizer + ?Sized,
{
    let config = PositionRankConfig::default()
        .with_damping(alpha)
        .with_window_size(window_size)
        .with_top_n(num_keyphrase);

    let result = PositionRank::with_config(config).extract_with_info(text, tokenizer, normalizer)?;
    Ok(result.texts())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::normalizer::{IdentityNormalizer, PorterStemmer};
    use crate::types::PosTag;

    /// Returns fixed output regardless of the text
    struct StaticTokenizer {
        output: TokenizedText,
    }

    impl StaticTokenizer {
        fn new(tokens: &[&str], phrases: &[&str]) -> Self {
            Self {
                output: TokenizedText::new(
                    tokens.iter().map(|t| t.to_string()).collect(),
                    phrases.iter().map(|p| p.to_string()).collect(),
                ),
            }
        }
    }

    impl Tokenizer for StaticTokenizer {
        fn tokenize(&self, _text: &str, _pos_filter: &[PosTag]) -> Result<TokenizedText> {
            Ok(self.output.clone())
        }
    }

    fn neural_networks() -> StaticTokenizer {
        // "neural network neural networks are powerful networks", verbs filtered out
        StaticTokenizer::new(
            &["neural", "network", "neural", "networks", "powerful", "networks"],
            &["neural_network", "neural_networks"],
        )
    }

    #[test]
    fn test_plural_phrase_variants_deduplicated() {
        let keyphrases = rank_keyphrases(
            "neural network neural networks are powerful networks",
            &neural_networks(),
            0.85,
            6,
            3,
            &PorterStemmer::new(),
        )
        .unwrap();

        assert_eq!(keyphrases.len(), 3);
        let both = keyphrases.iter().any(|k| k == "neural network")
            && keyphrases.iter().any(|k| k == "neural networks");
        assert!(!both);
        // The phrase aggregates two stems, so it outranks every single word
        assert_eq!(keyphrases[0], "neural network");
    }

    #[test]
    fn test_single_token() {
        let tokenizer = StaticTokenizer::new(&["data"], &[]);
        let result = PositionRank::new()
            .extract_with_info("data", &tokenizer, &IdentityNormalizer)
            .unwrap();

        assert_eq!(result.texts(), vec!["data"]);
        assert!((result.phrases[0].score - 1.0).abs() < 1e-12);
        assert!(result.converged);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = StaticTokenizer::new(&[], &[]);
        let err = PositionRank::new()
            .extract("", &tokenizer, &IdentityNormalizer)
            .unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_invalid_config() {
        let tokenizer = StaticTokenizer::new(&["graph"], &[]);
        let err = PositionRank::with_config(PositionRankConfig::default().with_damping(1.5))
            .extract("graph", &tokenizer, &IdentityNormalizer)
            .unwrap_err();
        assert!(matches!(err, PositionRankError::InvalidConfig { .. }));
    }

    #[test]
    fn test_tokenizer_error_passes_through() {
        struct Offline;
        impl Tokenizer for Offline {
            fn tokenize(&self, _text: &str, _pos_filter: &[PosTag]) -> Result<TokenizedText> {
                Err(PositionRankError::tokenization("server unreachable"))
            }
        }

        let err = PositionRank::new()
            .extract("text", &Offline, &IdentityNormalizer)
            .unwrap_err();
        assert_eq!(err, PositionRankError::tokenization("server unreachable"));
    }

    #[test]
    fn test_earlier_words_preferred() {
        // Two nodes with a symmetric edge: only the prior separates them
        let tokenizer = StaticTokenizer::new(&["early", "late"], &[]);
        let result = PositionRank::new()
            .extract_with_info("", &tokenizer, &IdentityNormalizer)
            .unwrap();

        assert_eq!(result.texts(), vec!["early", "late"]);
        assert!(result.phrases[0].score > result.phrases[1].score);
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = neural_networks();
        let stemmer = PorterStemmer::new();
        let pr = PositionRank::new();

        let first = pr.extract("", &tokenizer, &stemmer).unwrap();
        let second = pr.extract("", &tokenizer, &stemmer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_for_language() {
        let tokenizer = neural_networks();
        let english = PositionRank::new().extract_for_language("", &tokenizer).unwrap();
        let stems: Vec<&str> = english.phrases.iter().map(|p| p.stem.as_str()).collect();
        assert!(stems.contains(&"network"));

        let other = PositionRank::with_config(PositionRankConfig::default().with_language("xx"))
            .extract_for_language("", &tokenizer)
            .unwrap();
        // Without stemming the plural is its own candidate
        assert!(other.phrases.iter().any(|p| p.stem == "networks"));
    }

    #[test]
    fn test_extract_batch_keeps_order() {
        let tokenizer = crate::nlp::tokenizer::HeuristicTokenizer::default();
        let texts = [
            "Graph based ranking models for keyphrase extraction.",
            "",
            "Position biased random walks over word graphs.",
        ];

        let results = PositionRank::new().extract_batch(&texts, &tokenizer, &PorterStemmer::new());

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].as_ref().unwrap_err().is_empty_input());
        assert!(results[2].is_ok());
    }
}
