//! In-place transpose for square and non-square shapes.
//!
//! The square case is the usual pairwise swap above the diagonal. The
//! non-square case permutes the flat row-major buffer directly: viewing the
//! buffer as indices `0..N` with `N = rows * cols`, transposition is the
//! permutation `dest = (rows * a) mod (N - 1)` with `0` and `N - 1` as fixed
//! points. Following each permutation cycle and swapping along the way moves
//! every element exactly once, so no second value buffer is needed; a visited
//! bitmap over `1..N-1` stops each cycle from being walked twice.

use crate::matrix::dense::Matrix;

impl<T: Copy> Matrix<T> {
    /// Transpose in place. Dimensions swap; no second value buffer is
    /// allocated. The empty matrix and 1x1 are no-ops.
    pub fn transpose(&mut self) {
        if self.rows == self.cols {
            self.transpose_square();
        } else {
            self.transpose_rect();
        }
    }

    fn transpose_square(&mut self) {
        let n = self.rows;
        for i in 0..n {
            for j in (i + 1)..n {
                self.data.swap(i * n + j, j * n + i);
            }
        }
    }

    fn transpose_rect(&mut self) {
        let rows = self.rows;
        let n = self.data.len();
        let m = n - 1;
        // Index 0 is a fixed point and never enters a cycle, so its visited
        // slot stays unused; index m is the other fixed point and needs no slot.
        let mut visited = vec![false; m];
        for start in 1..m {
            if visited[start] {
                continue;
            }
            let mut carried = self.data[start];
            let mut a = start;
            loop {
                let dest = (a * rows) % m;
                std::mem::swap(&mut carried, &mut self.data[dest]);
                visited[dest] = true;
                a = dest;
                if a == start {
                    break;
                }
            }
        }
        std::mem::swap(&mut self.rows, &mut self.cols);
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::dense::Matrix;

    /// The cycle formula must send flat index `a` of an R x C matrix to the
    /// flat index of the same element in the transposed C x R layout.
    #[test]
    fn cycle_formula_matches_coordinate_transpose() {
        let (rows, cols) = (3, 5);
        let n = rows * cols;
        for i in 0..rows {
            for j in 0..cols {
                let a = i * cols + j;
                let dest = if a == n - 1 { a } else { (a * rows) % (n - 1) };
                assert_eq!(dest, j * rows + i);
            }
        }
    }

    /// A 1 x N matrix is all fixed points: the buffer must come through
    /// untouched with only the dimensions swapped.
    #[test]
    fn row_vector_transpose_is_reshape() {
        let mut m = Matrix::from_vec(1, 4, vec![7, 8, 9, 10]).unwrap();
        m.transpose();
        assert_eq!(m.nrows(), 4);
        assert_eq!(m.ncols(), 1);
        assert_eq!(m.as_slice(), &[7, 8, 9, 10]);
    }
}
