//! Word normalization
//!
//! A [`Normalizer`] maps a surface word to the canonical form used as the
//! graph node key and as the deduplication key. English uses the Snowball
//! (Porter2) stemmer; languages without stemming support use the identity.

use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// Maps a surface word to its canonical stem.
///
/// Implementations must be pure and deterministic: the same word always maps
/// to the same stem within and across calls.
pub trait Normalizer {
    /// Normalize a single word
    fn normalize(&self, word: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, word: &str) -> String {
        self(word)
    }
}

/// Returns every word unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    #[inline]
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// English Snowball (Porter2) stemmer
///
/// The word is stemmed as given; no case folding is applied.
pub struct PorterStemmer {
    stemmer: Stemmer,
}

impl PorterStemmer {
    /// Create a new English stemmer
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorterStemmer").finish()
    }
}

impl Normalizer for PorterStemmer {
    fn normalize(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

/// Languages with a known normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Japanese,
    Other,
}

impl Language {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "en" | "eng" | "english" => Language::English,
            "ja" | "jp" | "jpn" | "japanese" => Language::Japanese,
            _ => Language::Other,
        }
    }

    /// Select the normalizer for this language
    pub fn normalizer(&self) -> Box<dyn Normalizer + Send + Sync> {
        match self {
            Language::English => Box::new(PorterStemmer::new()),
            Language::Japanese | Language::Other => Box::new(IdentityNormalizer),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Language::parse(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_collapses_plurals() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.normalize("networks"), "network");
        assert_eq!(stemmer.normalize("network"), "network");
        assert_eq!(stemmer.normalize("running"), "run");
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityNormalizer.normalize("Networks"), "Networks");
        assert_eq!(IdentityNormalizer.normalize("自然言語"), "自然言語");
    }

    #[test]
    fn test_closure_normalizer() {
        let lower = |w: &str| w.to_lowercase();
        assert_eq!(lower.normalize("Graph"), "graph");
    }

    #[test]
    fn test_language_selection() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("JA".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!("fr".parse::<Language>().unwrap(), Language::Other);

        let english = Language::English.normalizer();
        assert_eq!(english.normalize("graphs"), "graph");

        let japanese = Language::Japanese.normalizer();
        assert_eq!(japanese.normalize("graphs"), "graphs");
    }
}
