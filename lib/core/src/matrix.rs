use crate::{Error, Result};

/// A row-major dense `f32` matrix.
///
/// Holds the per-place feature vectors and the embedding matrix. Row index i
/// always corresponds to catalog row i; the matrix is never reordered after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl DenseMatrix {
    /// Build a matrix from equal-length rows. Fails on ragged input or an
    /// empty row set.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(Error::Dataset("matrix must have at least one row".to_string()));
        }

        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(Error::Dataset("matrix rows must not be empty".to_string()));
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            if row.len() != n_cols {
                return Err(Error::DimensionMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow row i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over all rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(DenseMatrix::from_rows(Vec::new()).is_err());
        assert!(DenseMatrix::from_rows(vec![vec![], vec![]]).is_err());
    }

    #[test]
    fn test_iter_rows() {
        let m = DenseMatrix::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let collected: Vec<&[f32]> = m.iter_rows().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[2], &[3.0]);
    }
}
