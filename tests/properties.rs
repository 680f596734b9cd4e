//! # Integration tests
//!
//! Properties that should hold for any input, checked on a handful of matrices through the public
//! interface only.
use approx::assert_abs_diff_eq;

use sparse_linalg::data::linear_algebra::matrix::Matrix;
use sparse_linalg::data::linear_algebra::tolerance::Tolerance;
use sparse_linalg::data::linear_algebra::vector::Vector;
use sparse_linalg::error::LinearAlgebraError;

fn square_matrices() -> Vec<Matrix> {
    vec![
        Matrix::from_dense(&[vec![3, 1], vec![-1, 2]]).unwrap(),
        Matrix::from_dense(&[
            vec![1, 2, 0],
            vec![0, 1, 4],
            vec![5, 0, 1],
        ]).unwrap(),
        Matrix::from_dense(&[
            vec![2, 0, 0, 1],
            vec![0, 3, 1, 0],
            vec![0, 1, 4, 0],
            vec![1, 0, 0, 5],
        ]).unwrap(),
    ]
}

fn assert_close(left: &Matrix, right: &Matrix, epsilon: f64) {
    assert_eq!(left.size(), right.size());
    for i in 0..left.nr_rows() {
        for j in 0..left.nr_columns() {
            assert_abs_diff_eq!(left.get(i, j), right.get(i, j), epsilon = epsilon);
        }
    }
}

#[test]
fn set_then_get() {
    let mut v = Vector::new(4);
    v.set(1, 2.5).unwrap();
    assert_eq!(v.get(1), 2.5);
    assert_eq!(v.size(), 1);

    v.set(1, 1e-12).unwrap();
    assert_eq!(v.get(1), 0f64);
    assert_eq!(v.size(), 0);

    assert_eq!(v.set(4, 1f64), Err(LinearAlgebraError::IndexOutOfRange { index: 4, len: 4 }));
}

#[test]
fn tolerance_is_configurable() {
    let coarse = Tolerance::new(1e-3).unwrap();
    let mut v = Vector::new(2).with_tolerance(coarse);
    v.set(0, 1e-4).unwrap();
    assert_eq!(v.size(), 0);

    let a = Vector::from_dense(&[1f64, 2f64]).unwrap().with_tolerance(coarse);
    let b = Vector::from_dense(&[1.0001, 2f64]).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, a);

    assert!(Tolerance::new(0f64).is_err());
}

#[test]
fn identity_is_neutral() {
    for a in square_matrices() {
        let identity = Matrix::identity(a.nr_rows());
        assert_eq!(a.multiply(&identity).unwrap(), a);
        assert_eq!(identity.multiply(&a).unwrap(), a);
    }
}

#[test]
fn inverse() {
    for a in square_matrices() {
        let product = a.multiply(&a.inverse().unwrap()).unwrap();
        assert_close(&product, &Matrix::identity(a.nr_rows()), 1e-9);
    }
}

#[test]
fn qr_round_trip() {
    for a in square_matrices() {
        let qr = a.qr().unwrap();
        assert_close(&qr.q().multiply(qr.r()).unwrap(), &a, 1e-9);

        let columns = qr.q().column_vectors();
        for (i, left) in columns.iter().enumerate() {
            assert_abs_diff_eq!(left.norm(2).unwrap(), 1f64, epsilon = 1e-9);
            for right in &columns[(i + 1)..] {
                assert_abs_diff_eq!(left.dot(right), 0f64, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn cholesky_round_trip() {
    let a = Matrix::from_dense(&[
        vec![2, 0, 0, 1],
        vec![0, 3, 1, 0],
        vec![0, 1, 4, 0],
        vec![1, 0, 0, 5],
    ]).unwrap();
    let l = a.cholesky().unwrap().into_l();

    assert_close(&l.multiply(&l.transpose()).unwrap(), &a, 1e-9);
}

#[test]
fn projections() {
    let v = Vector::from_dense(&[1, -2, 0, 3]).unwrap();
    assert_eq!(v.project_along(&v), v);
    assert_eq!(v.project_orthogonal([&v]).unwrap(), Vector::new(4));
}

#[test]
fn double_transpose() {
    let a = Matrix::from_dense(&[
        vec![1, 2, 3],
        vec![4, 5, 6],
    ]).unwrap();
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn norm_and_normalize() {
    let v = Vector::from_tuples([(0, 3f64), (1, 4f64)], 3).unwrap();
    assert_eq!(v.norm(2).unwrap(), 5f64);
    assert_eq!(v.normalize(), Vector::from_tuples([(0, 0.6), (1, 0.8)], 3).unwrap());
}

#[test]
fn dimension_mismatch() {
    let a = Matrix::new(2, 3);
    let b = Matrix::new(2, 3);
    assert_eq!(a.multiply(&b), Err(LinearAlgebraError::DimensionMismatch { expected: 3, found: 2 }));
}
