//! Co-occurrence graph construction
//!
//! Turns a stemmed token sequence into the three inputs of the rank solver:
//! a column-normalized adjacency matrix, a position-biased prior vector, and
//! the stem → node index mapping.

use crate::errors::{PositionRankError, Result};
use crate::graph::matrix::DenseMatrix;
use rustc_hash::FxHashMap;

/// Neighbor stem id → number of times it fell inside the window
pub type NeighborCounts = FxHashMap<u32, usize>;

/// The finished PositionRank graph for one text
#[derive(Debug, Clone)]
pub struct CooccurrenceGraph {
    /// Stems in node order (first appearance in the sequence)
    vocabulary: Vec<String>,
    /// Maps stem -> node ID
    word2idx: FxHashMap<String, u32>,
    /// Column-normalized co-occurrence frequencies; `A[i][j]` is how often
    /// stem `j` appeared in the window of stem `i`
    adjacency: DenseMatrix,
    /// L1-normalized sum of `1 / (position + 1)` per stem
    prior: Vec<f64>,
}

impl CooccurrenceGraph {
    /// Number of nodes (unique stems)
    pub fn num_nodes(&self) -> usize {
        self.vocabulary.len()
    }

    /// The column-normalized adjacency matrix
    pub fn adjacency(&self) -> &DenseMatrix {
        &self.adjacency
    }

    /// The normalized position prior, indexed by node ID
    pub fn prior(&self) -> &[f64] {
        &self.prior
    }

    /// The stem → node ID mapping
    pub fn word2idx(&self) -> &FxHashMap<String, u32> {
        &self.word2idx
    }

    /// Stems in node order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

/// Builds a [`CooccurrenceGraph`] from a stemmed sequence with a sliding window
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    window_size: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(6)
    }
}

impl GraphBuilder {
    /// Create a builder for the given window size
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Positions inspected on each side of a token: `ceil(window_size / 2)`
    pub fn half_window(&self) -> usize {
        self.window_size / 2 + self.window_size % 2
    }

    /// Build the graph
    ///
    /// # Errors
    ///
    /// - [`PositionRankError::EmptyInput`] when `stems` is empty.
    /// - [`PositionRankError::InvalidConfig`] when the window size is 0.
    pub fn build<S: AsRef<str>>(&self, stems: &[S]) -> Result<CooccurrenceGraph> {
        if stems.is_empty() {
            return Err(PositionRankError::empty_input(
                "no tokens to build a co-occurrence graph from",
            ));
        }
        if self.window_size == 0 {
            return Err(PositionRankError::invalid_config("window_size must be > 0"));
        }

        let (vocabulary, word2idx, ids) = index_vocabulary(stems);
        let n = vocabulary.len();

        let prior = position_prior(&ids, n);
        let table = cooccurrence_table(&ids, n, self.half_window());

        let mut adjacency = DenseMatrix::zeros(n);
        for (node, neighbors) in table.iter().enumerate() {
            for (&neighbor, &freq) in neighbors {
                adjacency.set(node, neighbor as usize, freq as f64);
            }
        }
        let _self_loops = adjacency.normalize_columns();

        #[cfg(feature = "tracing")]
        {
            if !_self_loops.is_empty() {
                tracing::debug!(columns = ?_self_loops, "zero columns replaced by self-loops");
            }
        }

        Ok(CooccurrenceGraph {
            vocabulary,
            word2idx,
            adjacency,
            prior,
        })
    }
}

/// Assign node IDs in first-appearance order and map the sequence onto them
fn index_vocabulary<S: AsRef<str>>(
    stems: &[S],
) -> (Vec<String>, FxHashMap<String, u32>, Vec<u32>) {
    let mut vocabulary = Vec::new();
    let mut word2idx: FxHashMap<String, u32> = FxHashMap::default();

    let ids = stems
        .iter()
        .map(|stem| {
            let stem = stem.as_ref();
            if let Some(&id) = word2idx.get(stem) {
                return id;
            }
            let id = vocabulary.len() as u32;
            vocabulary.push(stem.to_string());
            word2idx.insert(stem.to_string(), id);
            id
        })
        .collect();

    (vocabulary, word2idx, ids)
}

/// Sum `1 / (position + 1)` per node, then L1-normalize
pub fn position_prior(ids: &[u32], num_nodes: usize) -> Vec<f64> {
    let mut prior = vec![0.0; num_nodes];
    for (position, &id) in ids.iter().enumerate() {
        prior[id as usize] += 1.0 / (position as f64 + 1.0);
    }

    let sum: f64 = prior.iter().sum();
    if sum > 0.0 {
        for p in &mut prior {
            *p /= sum;
        }
    }
    prior
}

/// Positions within `half_window` of `i`, before and after, never `i` itself
///
/// No padding: near either end of the sequence the window is simply shorter.
/// Offsets beyond `len` can never land inside the sequence, so the reach is
/// capped there.
pub fn window_positions(i: usize, len: usize, half_window: usize) -> impl Iterator<Item = usize> {
    (1..=half_window.min(len)).flat_map(move |k| {
        let before = i.checked_sub(k);
        let after = Some(i + k).filter(|&j| j < len);
        before.into_iter().chain(after)
    })
}

/// Count, for every node, how often each node appears in its windows
///
/// Two occurrences of the same stem inside one window count as a
/// self co-occurrence.
pub fn cooccurrence_table(ids: &[u32], num_nodes: usize, half_window: usize) -> Vec<NeighborCounts> {
    ids.iter().enumerate().fold(
        vec![NeighborCounts::default(); num_nodes],
        |mut table, (i, &id)| {
            for j in window_positions(i, ids.len(), half_window) {
                *table[id as usize].entry(ids[j]).or_insert(0) += 1;
            }
            table
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_half_window_rounds_up() {
        assert_eq!(GraphBuilder::new(1).half_window(), 1);
        assert_eq!(GraphBuilder::new(2).half_window(), 1);
        assert_eq!(GraphBuilder::new(5).half_window(), 3);
        assert_eq!(GraphBuilder::new(6).half_window(), 3);
        assert_eq!(GraphBuilder::new(usize::MAX).half_window(), usize::MAX / 2 + 1);
    }

    #[test]
    fn test_window_positions_capped_at_sequence() {
        let huge: Vec<usize> = window_positions(1, 3, usize::MAX).collect();
        assert_eq!(huge, vec![0, 2]);
    }

    #[test]
    fn test_oversized_window_matches_full_window() {
        let sequence = stems("graph rank graph bias");
        let full = GraphBuilder::new(2 * sequence.len()).build(&sequence).unwrap();

        for window_size in [usize::MAX, 1 << 31, 1000] {
            let graph = GraphBuilder::new(window_size).build(&sequence).unwrap();
            assert_eq!(graph.adjacency(), full.adjacency());
            assert_eq!(graph.prior(), full.prior());
            assert_eq!(graph.vocabulary(), full.vocabulary());
        }
    }

    #[test]
    fn test_window_positions_boundaries() {
        let at_start: Vec<usize> = window_positions(0, 5, 2).collect();
        assert_eq!(at_start, vec![1, 2]);

        let interior: Vec<usize> = window_positions(2, 5, 2).collect();
        assert_eq!(interior, vec![1, 3, 0, 4]);

        let at_end: Vec<usize> = window_positions(4, 5, 2).collect();
        assert_eq!(at_end, vec![3, 2]);
    }

    #[test]
    fn test_vocabulary_first_appearance_order() {
        let graph = GraphBuilder::new(2).build(&stems("b a b c a")).unwrap();
        assert_eq!(graph.vocabulary(), &["b", "a", "c"]);
        assert_eq!(graph.word2idx().get("c"), Some(&2));
        assert_eq!(graph.word2idx().get("z"), None);
    }

    #[test]
    fn test_cooccurrence_counts() {
        // a b a, half window 1: a(0)->b, b->a,a, a(2)->b
        let table = cooccurrence_table(&[0, 1, 0], 2, 1);
        assert_eq!(table[0].get(&1), Some(&2));
        assert_eq!(table[1].get(&0), Some(&2));
        assert_eq!(table[0].get(&0), None);

        // a a, half window 1: each a sees the other
        let table = cooccurrence_table(&[0, 0], 1, 1);
        assert_eq!(table[0].get(&0), Some(&2));
    }

    #[test]
    fn test_columns_sum_to_one() {
        let graph = GraphBuilder::new(6)
            .build(&stems("graph rank graph model position rank bias model"))
            .unwrap();
        for sum in graph.adjacency().column_sums() {
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_prior_favors_early_positions() {
        let graph = GraphBuilder::new(2).build(&stems("first second third")).unwrap();
        let prior = graph.prior();

        let sum: f64 = prior.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(prior[0] > prior[1]);
        assert!(prior[1] > prior[2]);

        // 1 : 1/2 : 1/3 before normalization
        let total = 1.0 + 0.5 + 1.0 / 3.0;
        assert!((prior[0] - 1.0 / total).abs() < 1e-12);
    }

    #[test]
    fn test_prior_accumulates_repeats() {
        let graph = GraphBuilder::new(2).build(&stems("a b a")).unwrap();
        let total = 1.0 + 0.5 + 1.0 / 3.0;
        assert!((graph.prior()[0] - (1.0 + 1.0 / 3.0) / total).abs() < 1e-12);
    }

    #[test]
    fn test_single_token_self_loop() {
        let graph = GraphBuilder::new(6).build(&["data"]).unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.adjacency().get(0, 0), 1.0);
        assert_eq!(graph.prior(), &[1.0]);
    }

    #[test]
    fn test_empty_input_fails() {
        let empty: [&str; 0] = [];
        let err = GraphBuilder::new(6).build(&empty).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_zero_window_fails() {
        let err = GraphBuilder::new(0).build(&["a", "b"]).unwrap_err();
        assert!(matches!(err, PositionRankError::InvalidConfig { .. }));
    }
}
