//! PageRank algorithms
//!
//! This module provides the position-biased power iteration used by
//! PositionRank.

pub mod position;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let result = PageRankResult::new(vec![0.2, 0.8], 4, 1e-4, true);
        assert_eq!(result.scores, vec![0.2, 0.8]);
        assert_eq!(result.iterations, 4);
        assert!(result.converged);
    }
}
