//! Error types for rapid_positionrank
//!
//! This module defines the error types used throughout the library.
//! The rank solver has no variant here: hitting the iteration cap is
//! reported on the result as `converged = false`.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PositionRankError>;

/// Main error type for rapid_positionrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionRankError {
    /// The tokenizer produced no tokens, so no graph can be built
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A tokenizer, tagger or normalizer backend failed
    #[error("Tokenization failed: {message}")]
    Tokenization { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PositionRankError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a tokenization error
    pub fn tokenization(message: impl Into<String>) -> Self {
        Self::Tokenization {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error came from a tokenizer or normalizer collaborator
    pub fn is_tokenization(&self) -> bool {
        matches!(self, Self::Tokenization { .. })
    }

    /// Check if this error means the input had nothing to rank
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

impl From<serde_json::Error> for PositionRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for PositionRankError {
    fn from(err: std::io::Error) -> Self {
        Self::tokenization(err.to_string())
    }
}
