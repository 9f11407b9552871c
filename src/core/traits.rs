//! Core traits for densemat.

use crate::error::MatError;

/// Shape queries for anything matrix-like.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// True iff the instance is in the empty state (0 x 0, no storage).
    fn is_empty(&self) -> bool {
        self.nrows() == 0 && self.ncols() == 0
    }
}

/// Checked element read.
pub trait MatrixGet<T> {
    /// Read element (i, j), validating both indices.
    fn at(&self, i: usize, j: usize) -> Result<T, MatError>;
}
