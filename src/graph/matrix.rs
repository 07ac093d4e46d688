//! Dense square matrix
//!
//! PositionRank graphs are built from a single title + abstract, so the
//! vocabulary stays small and a row-major dense matrix is simpler and faster
//! than a sparse layout. Memory is `n²` f64 values.

/// A square row-major matrix of f64 values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseMatrix {
    /// Number of rows (and columns)
    n: usize,
    /// Row-major values, `n * n` entries
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create an `n × n` matrix of zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Build a matrix from rows; every row must have `rows.len()` entries
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        Some(Self {
            n,
            data: rows.iter().flatten().copied().collect(),
        })
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }

    /// Borrow a row
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Sums of every column
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.n];
        for row in self.data.chunks_exact(self.n.max(1)) {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    /// Divide every column by its sum
    ///
    /// A column summing to zero becomes a self-loop of weight 1, so the
    /// result never contains non-finite values. Returns the indices of the
    /// columns that needed the fallback.
    pub fn normalize_columns(&mut self) -> Vec<usize> {
        let sums = self.column_sums();
        let mut self_loops = Vec::new();

        for (col, &sum) in sums.iter().enumerate() {
            if sum > 0.0 {
                for row in 0..self.n {
                    let value = self.get(row, col);
                    self.set(row, col, value / sum);
                }
            } else {
                self.set(col, col, 1.0);
                self_loops.push(col);
            }
        }

        self_loops
    }
}
