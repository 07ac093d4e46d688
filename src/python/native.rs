//! Native Python interface
//!
//! Direct Python classes for raw text. Tagging uses the built-in heuristic
//! tokenizer; for accurate tags, run a real tagger and use the JSON interface.

use crate::nlp::normalizer::Language;
use crate::nlp::tokenizer::HeuristicTokenizer;
use crate::types::{CandidateKind, ExtractionResult, Keyphrase, PosTag, PositionRankConfig};
use crate::variants::position_rank::{rank_keyphrases, PositionRank};
use pyo3::prelude::*;

/// A keyphrase extracted by PositionRank
#[pyclass(name = "Keyphrase")]
#[derive(Clone)]
pub struct PyKeyphrase {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub stem: String,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub rank: usize,
    /// "word" or "phrase"
    #[pyo3(get)]
    pub kind: String,
}

#[pymethods]
impl PyKeyphrase {
    fn __repr__(&self) -> String {
        format!(
            "Keyphrase(text='{}', score={:.4}, rank={})",
            self.text, self.score, self.rank
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<Keyphrase> for PyKeyphrase {
    fn from(k: Keyphrase) -> Self {
        let kind = match k.kind {
            CandidateKind::Word => "word",
            CandidateKind::Phrase => "phrase",
        };
        Self {
            text: k.text,
            stem: k.stem,
            score: k.score,
            rank: k.rank,
            kind: kind.to_string(),
        }
    }
}

/// Result of PositionRank extraction
#[pyclass(name = "ExtractionResult")]
#[derive(Clone)]
pub struct PyExtractionResult {
    #[pyo3(get)]
    pub phrases: Vec<PyKeyphrase>,
    #[pyo3(get)]
    pub converged: bool,
    #[pyo3(get)]
    pub iterations: usize,
}

#[pymethods]
impl PyExtractionResult {
    fn __repr__(&self) -> String {
        format!(
            "ExtractionResult(phrases={}, converged={}, iterations={})",
            self.phrases.len(),
            self.converged,
            self.iterations
        )
    }

    fn __len__(&self) -> usize {
        self.phrases.len()
    }

    fn __getitem__(&self, idx: usize) -> PyResult<PyKeyphrase> {
        self.phrases
            .get(idx)
            .cloned()
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("index out of range"))
    }

    /// Get phrases as a list of (text, score) tuples
    fn as_tuples(&self) -> Vec<(String, f64)> {
        self.phrases
            .iter()
            .map(|p| (p.text.clone(), p.score))
            .collect()
    }
}

impl From<ExtractionResult> for PyExtractionResult {
    fn from(result: ExtractionResult) -> Self {
        Self {
            phrases: result.phrases.into_iter().map(PyKeyphrase::from).collect(),
            converged: result.converged,
            iterations: result.iterations,
        }
    }
}

/// Configuration for PositionRank
#[pyclass(name = "PositionRankConfig")]
#[derive(Clone)]
pub struct PyPositionRankConfig {
    inner: PositionRankConfig,
}

#[pymethods]
impl PyPositionRankConfig {
    #[new]
    #[pyo3(signature = (
        damping=0.85,
        window_size=6,
        top_n=10,
        max_iterations=100,
        convergence_threshold=0.001,
        language="en",
        pos_filter=None
    ))]
    fn new(
        damping: f64,
        window_size: usize,
        top_n: usize,
        max_iterations: usize,
        convergence_threshold: f64,
        language: &str,
        pos_filter: Option<Vec<String>>,
    ) -> PyResult<Self> {
        // Parse pos_filter from Universal Dependencies tags
        let pos_filter = match pos_filter {
            Some(tags) => tags.iter().map(|s| PosTag::from_universal(s)).collect(),
            None => PosTag::default_filter(),
        };

        let config = PositionRankConfig {
            damping,
            window_size,
            top_n,
            max_iterations,
            convergence_threshold,
            language: language.to_string(),
            pos_filter,
        };

        config.validate()?;

        Ok(Self { inner: config })
    }

    fn __repr__(&self) -> String {
        format!(
            "PositionRankConfig(damping={}, window_size={}, top_n={})",
            self.inner.damping, self.inner.window_size, self.inner.top_n
        )
    }
}

/// PositionRank keyword extractor
#[pyclass(name = "PositionRank")]
pub struct PyPositionRank {
    config: PositionRankConfig,
}

#[pymethods]
impl PyPositionRank {
    #[new]
    #[pyo3(signature = (config=None, top_n=None, language=None))]
    fn new(
        config: Option<PyPositionRankConfig>,
        top_n: Option<usize>,
        language: Option<&str>,
    ) -> PyResult<Self> {
        let mut inner_config = config.map(|c| c.inner).unwrap_or_default();

        if let Some(n) = top_n {
            inner_config.top_n = n;
        }
        if let Some(lang) = language {
            inner_config.language = lang.to_string();
        }
        inner_config.validate()?;

        Ok(Self {
            config: inner_config,
        })
    }

    /// Extract keywords using PositionRank
    #[pyo3(signature = (text))]
    fn extract_keywords(&self, text: &str) -> PyResult<PyExtractionResult> {
        let extractor = PositionRank::with_config(self.config.clone());
        let result = extractor.extract_for_language(text, &HeuristicTokenizer::default())?;
        Ok(result.into())
    }

    /// Extract keywords from many texts in parallel, releasing the GIL
    #[pyo3(signature = (texts))]
    fn extract_batch(&self, py: Python<'_>, texts: Vec<String>) -> PyResult<Vec<PyExtractionResult>> {
        let extractor = PositionRank::with_config(self.config.clone());
        let normalizer = self
            .config
            .language
            .parse::<Language>()
            .unwrap_or(Language::Other)
            .normalizer();

        let results = py.allow_threads(|| {
            extractor.extract_batch(&texts, &HeuristicTokenizer::default(), &*normalizer)
        });

        results
            .into_iter()
            .map(|r| r.map(PyExtractionResult::from).map_err(PyErr::from))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "PositionRank(top_n={}, language='{}')",
            self.config.top_n, self.config.language
        )
    }
}

/// Rank the keyphrases of `text`, returning their texts best first
#[pyfunction]
#[pyo3(signature = (text, alpha=0.85, window_size=6, num_keyphrase=10, language="en"))]
pub fn position_rank(
    text: &str,
    alpha: f64,
    window_size: usize,
    num_keyphrase: usize,
    language: &str,
) -> PyResult<Vec<String>> {
    let normalizer = language
        .parse::<Language>()
        .unwrap_or(Language::Other)
        .normalizer();

    Ok(rank_keyphrases(
        text,
        &HeuristicTokenizer::default(),
        alpha,
        window_size,
        num_keyphrase,
        &*normalizer,
    )?)
}
