//! Dense row-major matrix storage.
//!
//! A `Matrix<T>` owns exactly one contiguous buffer of `rows * cols` elements in
//! row-major order: element `(i, j)` lives at flat offset `i * cols + j`. Row
//! handles are borrowed slices into that buffer, so there is no secondary array
//! of row pointers to allocate, free, or rebuild after a transpose.
//!
//! A matrix is either allocated (`rows > 0 && cols > 0`) or in the empty state
//! (`rows == 0 && cols == 0`, no storage); zero rows with nonzero cols is never
//! representable.

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::MatError;
use num_traits::Zero;
use std::ops::{Index, IndexMut};

/// Dense rectangular matrix over one owned row-major buffer.
///
/// ```
/// use densemat::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m.at(1, 2).unwrap(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T> Matrix<T> {
    /// The empty matrix: 0 x 0, no allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a requested shape and compute the buffer length.
    ///
    /// Rejects zero dimensions before any allocation is attempted; a
    /// `rows * cols` overflow reports as an unsatisfiable storage request.
    fn checked_len(rows: usize, cols: usize) -> Result<usize, MatError> {
        if rows == 0 || cols == 0 {
            return Err(MatError::InvalidDimension(rows, cols));
        }
        rows.checked_mul(cols)
            .ok_or(MatError::AllocationFailure(usize::MAX))
    }

    /// Reserve a buffer of exactly `len` elements, fallibly.
    ///
    /// On failure nothing is leaked: the partially-reserved `Vec` is dropped
    /// here and the error propagates.
    fn alloc_buffer(len: usize) -> Result<Vec<T>, MatError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatError::AllocationFailure(len))?;
        Ok(data)
    }

    /// Build from parts already known to satisfy the shape invariant.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        debug_assert!((rows == 0) == (cols == 0));
        Matrix { rows, cols, data }
    }

    /// Construct a `rows x cols` matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, MatError>
    where
        T: Clone,
    {
        let len = Self::checked_len(rows, cols)?;
        let mut data = Self::alloc_buffer(len)?;
        data.resize(len, value);
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Construct a `rows x cols` matrix of additive-identity elements.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatError>
    where
        T: Clone + Zero,
    {
        Self::filled(rows, cols, T::zero())
    }

    /// Construct from nested rows, outermost first.
    ///
    /// The shape is derived from the outer length and the first inner length.
    /// Every inner row must match the first; a ragged literal is rejected with
    /// `ShapeMismatch` rather than read positionally past the shorter rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let len = Self::checked_len(nrows, ncols)?;
        let mut data = Self::alloc_buffer(len)?;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatError::ShapeMismatch(format!(
                    "row {} has {} elements, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
            data.extend(row);
        }
        Ok(Self::from_parts(nrows, ncols, data))
    }

    /// Construct from raw row-major storage.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatError> {
        let len = Self::checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatError::ShapeMismatch(format!(
                "raw buffer has {} elements, expected {} for {}x{}",
                data.len(),
                len,
                rows,
                cols
            )));
        }
        Ok(Self::from_parts(rows, cols, data))
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// True iff this matrix is in the empty state.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Borrow element `(i, j)`, or `None` if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            Some(&self.data[self.offset(i, j)])
        } else {
            None
        }
    }

    /// Mutably borrow element `(i, j)`, or `None` if either index is out of range.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        if i < self.rows && j < self.cols {
            let k = self.offset(i, j);
            Some(&mut self.data[k])
        } else {
            None
        }
    }

    /// Read element `(i, j)` with both indices validated.
    pub fn at(&self, i: usize, j: usize) -> Result<T, MatError>
    where
        T: Copy,
    {
        if i >= self.rows {
            return Err(MatError::IndexOutOfRange(i, self.rows));
        }
        if j >= self.cols {
            return Err(MatError::IndexOutOfRange(j, self.cols));
        }
        Ok(self.data[self.offset(i, j)])
    }

    /// Borrow row `i` as a slice of `ncols()` elements.
    ///
    /// The row index is validated here; column indexing on the returned slice
    /// is the slice's own bounds check (a panic, not a `MatError`).
    pub fn row(&self, i: usize) -> Result<&[T], MatError> {
        if i >= self.rows {
            return Err(MatError::IndexOutOfRange(i, self.rows));
        }
        let start = i * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Copy `other`'s values into `self`, requiring identical shape.
    ///
    /// On `ShapeMismatch` the destination is left untouched; there is no
    /// implicit resize on assignment.
    pub fn assign_from(&mut self, other: &Matrix<T>) -> Result<(), MatError>
    where
        T: Clone,
    {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatError::ShapeMismatch(format!(
                "cannot assign {}x{} values into {}x{} destination",
                other.rows, other.cols, self.rows, self.cols
            )));
        }
        self.data.clone_from(&other.data);
        Ok(())
    }

    /// Move the buffer and shape out, leaving `self` in the empty state.
    ///
    /// Total: no allocation, cannot fail. Dropping the emptied source
    /// afterwards is a no-op.
    pub fn take(&mut self) -> Matrix<T> {
        std::mem::take(self)
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.rows
    }
    fn ncols(&self) -> usize {
        self.cols
    }
}

impl<T: Copy> MatrixGet<T> for Matrix<T> {
    fn at(&self, i: usize, j: usize) -> Result<T, MatError> {
        Matrix::at(self, i, j)
    }
}

/// Panicking index sugar over the checked accessors, `m[(i, j)]`.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.get(i, j) {
            Some(v) => v,
            None => panic!(
                "index ({}, {}) out of range for {}x{} matrix",
                i, j, self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        match self.get_mut(i, j) {
            Some(v) => v,
            None => panic!(
                "index ({}, {}) out of range for {}x{} matrix",
                i, j, rows, cols
            ),
        }
    }
}
