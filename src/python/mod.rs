//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_positionrank.

pub mod json;
pub mod native;

use crate::errors::PositionRankError;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

impl From<PositionRankError> for PyErr {
    fn from(err: PositionRankError) -> Self {
        match err {
            PositionRankError::Tokenization { .. } | PositionRankError::Internal { .. } => {
                PyRuntimeError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface
    m.add_class::<native::PyKeyphrase>()?;
    m.add_class::<native::PyExtractionResult>()?;
    m.add_class::<native::PyPositionRankConfig>()?;
    m.add_class::<native::PyPositionRank>()?;
    m.add_function(wrap_pyfunction!(native::position_rank, m)?)?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::extract_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::extract_batch_from_json, m)?)?;

    Ok(())
}
