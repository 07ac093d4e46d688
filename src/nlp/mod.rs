//! Natural Language Processing components
//!
//! This module provides the tokenizer and normalizer capability interfaces
//! together with the built-in backends that satisfy them.

pub mod normalizer;
pub mod taggers;
pub mod tagset;
pub mod tokenizer;
