use densemat::Matrix;

fn main() {
    // permutation-style product
    let a = Matrix::from_rows(vec![
        vec![0, 0, 1, 0],
        vec![1, 0, 0, 0],
        vec![0, 0, 0, 1],
        vec![0, 1, 0, 0],
    ])
    .unwrap();
    let b = Matrix::from_rows(vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]]).unwrap();
    let c = a.matmul(&b).unwrap();
    assert_eq!(c.row(0).unwrap(), &[4, 5]);
    assert_eq!(c.row(3).unwrap(), &[2, 3]);
    assert_eq!(c[(2, 1)], 7);
    println!("a * b = {:?}", c.as_slice());

    // scalar product, both orders
    let s: Matrix<i32> = 2 * &b;
    assert_eq!(s, &b * 2);
    println!("2 * b = {:?}", s.as_slice());

    // in-place non-square transpose
    let mut m = Matrix::from_rows(vec![vec![11, 12, 13, 14], vec![21, 22, 23, 24]]).unwrap();
    m.transpose();
    assert_eq!(m.nrows(), 4);
    assert_eq!(m.row(1).unwrap(), &[12, 22]);
    println!("transposed to {}x{}: {:?}", m.nrows(), m.ncols(), m.as_slice());
}
