//! Built-in POS tagger backends
//!
//! - [`HeuristicTagger`]: UAX #29 word segmentation with suffix-based
//!   English POS guessing. Needs no external service.
//! - [`MecabTagger`]: runs an external MeCab process and parses its output.
//! - [`PretaggedTagger`]: replays tags computed elsewhere (spaCy, CoreNLP).

use crate::errors::{PositionRankError, Result};
use crate::nlp::tokenizer::PosTagger;
use crate::types::{PosTag, TaggedWord};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// Heuristic tagger
// ============================================================================

/// A Unicode-aware tagger following UAX #29 with heuristic English POS tags
///
/// Emits Universal Dependencies tags. Punctuation is kept as `PUNCT` so that
/// phrase matching never runs across sentence or clause boundaries.
#[derive(Debug, Clone, Default)]
pub struct HeuristicTagger {
    /// Minimum token length to consider
    min_token_length: usize,
}

impl HeuristicTagger {
    /// Create a new tagger with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Basic heuristic POS tagging
    ///
    /// This is intentionally simple - for accurate POS tags, plug in a real
    /// tagger through [`PretaggedTagger`] or [`MecabTagger`].
    fn guess_pos(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();

        if let Some(pos) = self.function_word_pos(&lower) {
            return pos;
        }

        // Numbers
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        if word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
            && word.chars().skip(1).all(|c| c.is_lowercase())
        {
            // Capitalized word (might be proper noun or sentence start)
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
            return PosTag::Verb;
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }

    fn function_word_pos(&self, lower: &str) -> Option<PosTag> {
        let pos = match lower {
            // Determiners
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
            | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
                PosTag::Determiner
            }
            // Conjunctions
            "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while"
            | "though" | "although" | "when" | "unless" | "until" | "since" | "than" => {
                PosTag::Conjunction
            }
            // Prepositions
            "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
            | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
            | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
            // Pronouns
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us"
            | "them" | "myself" | "yourself" | "ourselves" | "themselves" | "which" | "who"
            | "what" => PosTag::Pronoun,
            // Auxiliaries and modals
            "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" | "has" | "have"
            | "had" | "do" | "does" | "did" | "can" | "could" | "will" | "would" | "shall"
            | "should" | "may" | "might" | "must" => PosTag::Verb,
            // Common adverbs without the -ly suffix
            "very" | "also" | "not" | "too" | "then" | "here" | "there" | "now" => PosTag::Adverb,
            _ => return None,
        };
        Some(pos)
    }
}

impl PosTagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>> {
        let mut words = Vec::new();

        for segment in text.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }

            // Pure punctuation/symbols break phrases but are never ranked
            if !segment.chars().any(|c| c.is_alphanumeric()) {
                words.push(TaggedWord::new(segment, PosTag::Punctuation.as_str()));
                continue;
            }

            // Skip tokens that are too short
            if segment.chars().count() < self.min_token_length {
                continue;
            }

            let pos = self.guess_pos(segment);
            words.push(TaggedWord::new(segment, pos.as_str()));
        }

        Ok(words)
    }
}

// ============================================================================
// MeCab
// ============================================================================

/// Tags Japanese text by piping it through an external `mecab` process
///
/// Emits IPADIC top-level categories; pair it with
/// [`TagScheme::Ipadic`](crate::nlp::tagset::TagScheme::Ipadic).
#[derive(Debug, Clone)]
pub struct MecabTagger {
    program: String,
    args: Vec<String>,
}

impl Default for MecabTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl MecabTagger {
    /// Use `mecab` from `PATH` with its default dictionary
    pub fn new() -> Self {
        Self {
            program: "mecab".to_string(),
            args: Vec::new(),
        }
    }

    /// Set the program to run
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Append a command-line argument (e.g. `-d /path/to/dic`)
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl PosTagger for MecabTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                PositionRankError::tokenization(format!("failed to start {}: {}", self.program, e))
            })?;

        let Some(mut stdin) = child.stdin.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(PositionRankError::tokenization(format!(
                "{} stdin unavailable",
                self.program
            )));
        };

        // Feed stdin from another thread so stdout is drained concurrently;
        // the pipe closes when the writer finishes.
        let input = format!("{}\n", text);
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        // The child is reaped here whether or not the write succeeded
        let output = child.wait_with_output()?;
        let written = writer.join().map_err(|_| {
            PositionRankError::tokenization(format!("{} stdin writer panicked", self.program))
        })?;

        if !output.status.success() {
            return Err(PositionRankError::tokenization(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        written.map_err(|e| {
            PositionRankError::tokenization(format!("failed to write to {}: {}", self.program, e))
        })?;

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            PositionRankError::tokenization(format!("{} produced invalid UTF-8: {}", self.program, e))
        })?;
        Ok(parse_mecab_output(&stdout))
    }
}

/// Parse MeCab's default output format
///
/// Each morpheme is a `surface\tPOS,subcategory,...` line; the first feature
/// field is the tag. `EOS` markers and malformed lines are skipped.
pub fn parse_mecab_output(output: &str) -> Vec<TaggedWord> {
    output
        .lines()
        .filter_map(|line| {
            let (surface, features) = line.split_once('\t')?;
            if surface.is_empty() || surface == "EOS" {
                return None;
            }
            let tag = features.split(',').next().unwrap_or_default();
            Some(TaggedWord::new(surface, tag))
        })
        .collect()
}

// ============================================================================
// Pre-tagged input
// ============================================================================

/// Replays tags produced outside this crate
///
/// The text passed to [`PosTagger::tag`] is ignored; the stored words are
/// returned as-is.
#[derive(Debug, Clone, Default)]
pub struct PretaggedTagger {
    words: Vec<TaggedWord>,
}

impl PretaggedTagger {
    /// Wrap an already-tagged word sequence
    pub fn new(words: Vec<TaggedWord>) -> Self {
        Self { words }
    }
}

impl PosTagger for PretaggedTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedWord>> {
        Ok(self.words.clone())
    }
}
