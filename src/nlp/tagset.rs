//! Tag alphabets of the supported tagger backends
//!
//! Each backend speaks its own tag alphabet. [`TagScheme`] folds them into
//! the coarse [`PosTag`] set shared by the POS filter and the phrase pattern.

use crate::types::PosTag;

/// Tag alphabet emitted by a tagger backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagScheme {
    /// Penn Treebank tags (CoreNLP, NLTK)
    Penn,
    /// Universal Dependencies tags (spaCy, the built-in heuristic tagger)
    #[default]
    Universal,
    /// IPADIC top-level categories (MeCab)
    Ipadic,
}

impl TagScheme {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "penn" | "ptb" | "corenlp" | "stanford" => TagScheme::Penn,
            "ipadic" | "mecab" | "ja" => TagScheme::Ipadic,
            _ => TagScheme::Universal,
        }
    }

    /// Map a backend tag onto the coarse tag set
    pub fn coarse(&self, tag: &str) -> PosTag {
        match self {
            TagScheme::Penn => penn_to_coarse(tag),
            TagScheme::Universal => PosTag::from_universal(tag),
            TagScheme::Ipadic => ipadic_to_coarse(tag),
        }
    }
}

impl std::str::FromStr for TagScheme {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TagScheme::parse(value))
    }
}

fn penn_to_coarse(tag: &str) -> PosTag {
    match tag {
        "JJ" | "JJR" | "JJS" => PosTag::Adjective,
        "NN" | "NNS" => PosTag::Noun,
        "NNP" | "NNPS" => PosTag::ProperNoun,
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "MD" => PosTag::Verb,
        "RB" | "RBR" | "RBS" | "WRB" => PosTag::Adverb,
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => PosTag::Pronoun,
        "DT" | "PDT" | "WDT" => PosTag::Determiner,
        "IN" => PosTag::Preposition,
        "CC" => PosTag::Conjunction,
        "UH" => PosTag::Interjection,
        "CD" => PosTag::Numeral,
        "RP" | "TO" | "POS" => PosTag::Particle,
        "SYM" | "$" | "#" => PosTag::Symbol,
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => {
            PosTag::Punctuation
        }
        _ => PosTag::Other,
    }
}

fn ipadic_to_coarse(tag: &str) -> PosTag {
    match tag {
        "名詞" => PosTag::Noun,
        "形容詞" => PosTag::Adjective,
        "動詞" => PosTag::Verb,
        "副詞" => PosTag::Adverb,
        "連体詞" => PosTag::Determiner,
        "接続詞" => PosTag::Conjunction,
        "感動詞" => PosTag::Interjection,
        "助詞" => PosTag::Particle,
        "記号" => PosTag::Punctuation,
        _ => PosTag::Other,
    }
}
