//! Graph construction and representation
//!
//! This module builds the dense co-occurrence matrix and the position prior
//! that the rank solver iterates over.

pub mod builder;
pub mod matrix;
