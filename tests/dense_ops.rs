//! Tests for dense matrix arithmetic: addition, matrix product, and scalar
//! product in both scalar positions.
//!
//! Operands must never be mutated; every operation allocates a fresh result
//! or fails with the shape error named in its contract.

use approx::assert_abs_diff_eq;
use densemat::{MatError, Matrix};

/// Multiplying by a permutation-like 4x4 matrix reorders the rows of the rhs.
#[test]
fn matmul_permutation_example() {
    let a = Matrix::from_rows(vec![
        vec![0, 0, 1, 0],
        vec![1, 0, 0, 0],
        vec![0, 0, 0, 1],
        vec![0, 1, 0, 0],
    ])
    .unwrap();
    let b = Matrix::from_rows(vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]]).unwrap();

    let c = a.matmul(&b).unwrap();
    let expected =
        Matrix::from_rows(vec![vec![4, 5], vec![0, 1], vec![6, 7], vec![2, 3]]).unwrap();
    assert_eq!(c, expected);

    // operator sugar agrees with the checked method
    assert_eq!(&a * &b, expected);
}

/// Incompatible inner dimensions fail with `DimensionMismatch`.
#[test]
fn matmul_inner_dimension_checked() {
    let a = Matrix::from_rows(vec![
        vec![0, 0, 1, 0],
        vec![1, 0, 0, 0],
        vec![0, 0, 0, 1],
        vec![0, 1, 0, 0],
    ])
    .unwrap();
    let b = Matrix::from_rows(vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]]).unwrap();

    assert_eq!(b.matmul(&a).unwrap_err(), MatError::DimensionMismatch(2, 4));
}

/// The accumulator starts from the additive identity, so a product against a
/// zero matrix is the zero matrix.
#[test]
fn matmul_against_zeros() {
    let a = Matrix::from_rows(vec![vec![1.5, -2.0], vec![0.25, 4.0]]).unwrap();
    let z = Matrix::<f64>::zeros(2, 3).unwrap();
    let c = a.matmul(&z).unwrap();
    assert_eq!(c.nrows(), 2);
    assert_eq!(c.ncols(), 3);
    for v in c.as_slice() {
        assert_abs_diff_eq!(*v, 0.0);
    }
}

/// Elementwise addition over matching shapes; mismatched shapes fail with
/// `ShapeMismatch` and mutate nothing.
#[test]
fn addition_and_shape_guard() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![0.5, 0.5], vec![-1.0, 1.0]]).unwrap();

    let c = a.try_add(&b).unwrap();
    assert_abs_diff_eq!(c.at(0, 0).unwrap(), 1.5);
    assert_abs_diff_eq!(c.at(1, 0).unwrap(), 2.0);
    assert_abs_diff_eq!(c.at(1, 1).unwrap(), 5.0);

    // operands untouched
    assert_abs_diff_eq!(a.at(0, 0).unwrap(), 1.0);
    assert_abs_diff_eq!(b.at(1, 0).unwrap(), -1.0);

    let wide = Matrix::<f64>::zeros(2, 3).unwrap();
    assert!(matches!(
        a.try_add(&wide).unwrap_err(),
        MatError::ShapeMismatch(_)
    ));
}

/// Scalar multiplication is total and commutative: left- and right-scalar
/// forms agree.
#[test]
fn scalar_both_orders_agree() {
    let m = Matrix::from_rows(vec![vec![0, 1], vec![3, 4]]).unwrap();
    let expected = Matrix::from_rows(vec![vec![0, 2], vec![6, 8]]).unwrap();

    assert_eq!(m.scale(2), expected);
    assert_eq!(2 * &m, expected);
    assert_eq!(&m * 2, expected);
    assert_eq!(2 * m.clone(), m * 2);
}
