//! JSON interface for pre-tagged documents
//!
//! Thin wrappers over [`crate::json`]; batch extraction releases the GIL.

use pyo3::prelude::*;

/// Extract keyphrases from JSON input
///
/// Args:
///     json_input: JSON string containing tagged tokens and optional config
///
/// Returns:
///     JSON string with extracted phrases
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn extract_from_json(json_input: &str) -> PyResult<String> {
    Ok(crate::json::extract_from_json(json_input)?)
}

/// Batch extract keyphrases from multiple documents
///
/// Args:
///     json_input: JSON string containing array of documents
///
/// Returns:
///     JSON string with array of results
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn extract_batch_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    let output = py.allow_threads(|| crate::json::extract_batch_from_json(json_input))?;
    Ok(output)
}
