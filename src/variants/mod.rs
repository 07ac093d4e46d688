//! Keyphrase extractors
//!
//! - PositionRank: biases the random walk towards words appearing earlier in the document

pub mod position_rank;
