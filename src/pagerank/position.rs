//! Position-biased PageRank
//!
//! Damped power iteration where the teleport distribution is the position
//! prior of the co-occurrence graph instead of a uniform vector:
//!
//! ```text
//! s'[i] = (1 - alpha) * p[i] + alpha * Σ_{j : A[i][j] ≠ 0} (A[i][j] / colsum[j]) * s[j]
//! ```
//!
//! The adjacency matrix is already column-normalized by the graph builder,
//! so `colsum[j]` is 1 for every column. The division is still applied on
//! every step; it keeps the update well-defined for matrices supplied through
//! [`PositionBiasedPageRank::run_matrix`] that were never normalized.

use super::PageRankResult;
use crate::errors::{PositionRankError, Result};
use crate::graph::builder::CooccurrenceGraph;
use crate::graph::matrix::DenseMatrix;

/// Position-biased PageRank solver
#[derive(Debug, Clone)]
pub struct PositionBiasedPageRank {
    /// Damping factor (alpha, typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Stop once the Euclidean distance between iterates is at most this
    pub threshold: f64,
}

impl Default for PositionBiasedPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 0.001,
        }
    }
}

impl PositionBiasedPageRank {
    /// Create a new solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run on a co-occurrence graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CooccurrenceGraph) -> PageRankResult {
        self.iterate(graph.adjacency(), graph.prior())
    }

    /// Run on an explicit adjacency matrix and prior vector
    ///
    /// # Errors
    ///
    /// [`PositionRankError::Internal`] when the prior length differs from the
    /// matrix dimension.
    pub fn run_matrix(&self, adjacency: &DenseMatrix, prior: &[f64]) -> Result<PageRankResult> {
        if adjacency.dim() != prior.len() {
            return Err(PositionRankError::internal(format!(
                "prior has {} entries for a {}x{} matrix",
                prior.len(),
                adjacency.dim(),
                adjacency.dim()
            )));
        }
        Ok(self.iterate(adjacency, prior))
    }

    fn iterate(&self, adjacency: &DenseMatrix, prior: &[f64]) -> PageRankResult {
        if adjacency.is_empty() {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        let n = adjacency.dim();

        let column_sums = adjacency.column_sums();

        // Initialize scores uniformly
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            for (i, next) in new_scores.iter_mut().enumerate() {
                let mut propagated = 0.0;
                for (j, &weight) in adjacency.row(i).iter().enumerate() {
                    if weight != 0.0 {
                        propagated += weight / column_sums[j] * scores[j];
                    }
                }
                *next = (1.0 - self.damping) * prior[i] + self.damping * propagated;
            }

            // Euclidean distance between successive iterates
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new) * (old - new))
                .sum::<f64>()
                .sqrt();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let converged = delta <= self.threshold;

        #[cfg(feature = "tracing")]
        tracing::debug!(iterations, delta, converged, "position-biased pagerank finished");

        PageRankResult::new(scores, iterations, delta, converged)
    }
}
