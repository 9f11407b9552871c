//! Arithmetic operators for dense matrices.
//!
//! The checked methods (`try_add`, `matmul`, `scale`) are the contract: shape
//! errors come back as `MatError` and operands are never mutated. The
//! `Add`/`Mul` operator impls are sugar over them and panic on a shape error,
//! the same way slice index sugar relates to `get`.

use crate::error::MatError;
use crate::matrix::dense::Matrix;
use num_traits::Zero;
use std::ops::{Add, Mul};

impl<T: Copy + Add<Output = T>> Matrix<T> {
    /// Elementwise sum, allocating a fresh result.
    ///
    /// Requires identical shapes; fails with `ShapeMismatch` otherwise.
    pub fn try_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(MatError::ShapeMismatch(format!(
                "cannot add {}x{} and {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Matrix<T> {
    /// Matrix product `self * rhs`, allocating a fresh `rows x rhs.cols` result.
    ///
    /// Requires `self.ncols() == rhs.nrows()`; fails with `DimensionMismatch`
    /// otherwise. Each entry accumulates `sum_k self[(i, k)] * rhs[(k, j)]`
    /// left to right, starting from `T::zero()`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatError> {
        if self.cols != rhs.rows {
            return Err(MatError::DimensionMismatch(self.cols, rhs.rows));
        }
        let (m, k, n) = (self.rows, self.cols, rhs.cols);
        let mut data = Vec::with_capacity(m * n);
        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc = acc + self.data[i * k + p] * rhs.data[p * n + j];
                }
                data.push(acc);
            }
        }
        Ok(Matrix::from_parts(m, n, data))
    }
}

impl<T: Copy + Mul<Output = T>> Matrix<T> {
    /// Scalar product, allocating a fresh same-shaped result. Total.
    pub fn scale(&self, s: T) -> Matrix<T> {
        let data = self.data.iter().map(|&a| s * a).collect();
        Matrix::from_parts(self.rows, self.cols, data)
    }
}

impl<T: Copy + Add<Output = T>> Add for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + Add<Output = T>> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.matmul(rhs) {
            Ok(prod) => prod,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

/// Right-scalar form, `&m * s`.
impl<T: Copy + Mul<Output = T>> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, s: T) -> Matrix<T> {
        self.scale(s)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, s: T) -> Matrix<T> {
        self.scale(s)
    }
}

// Left-scalar forms, `s * m`. Scalar multiplication is commutative, so both
// orderings dispatch to `scale`; a generic impl would need `impl Mul<Matrix<T>>
// for T`, which coherence forbids, hence one impl per scalar type.
macro_rules! left_scalar_mul {
    ($($t:ty),* $(,)?) => {$(
        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;
            fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                rhs.scale(self)
            }
        }
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;
            fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                rhs.scale(self)
            }
        }
    )*};
}

left_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
