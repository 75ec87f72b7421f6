//! Matrix inversion
//!
//! Two independent paths: one through the SVD engine and one through
//! Gauss-Jordan elimination. They are kept as distinct operations so
//! tests can cross-check one against the other.

use crate::svd::{SvdError, svdcmp};
use crate::{Matrix, Vector};

/// Invert a square matrix via `A^-1 = V * diag(1/w) * U^T`.
///
/// The input is copied and the SVD engine runs on the copy. No rank
/// truncation is applied: a zero or near-zero singular value produces
/// non-finite or very large entries in the result. That is a documented
/// limitation of this path, not a guarded condition.
///
/// # Panics
/// Panics if `a` is not square.
pub fn inverse_via_svd(a: &Matrix) -> Result<Matrix, SvdError> {
    assert!(a.is_square(), "inverse_via_svd requires a square matrix");
    let n = a.nrows();

    let mut u = a.clone();
    let mut w = Vector::zeros(n);
    let mut v = Matrix::zeros((n, n));
    svdcmp(&mut u, &mut w, &mut v)?;

    // Columns of V scaled by the reciprocal singular values
    let mut scaled = Matrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            scaled[[i, j]] = v[[i, j]] / w[j];
        }
    }

    // Multiply by U^T (u holds U after svdcmp)
    let mut inv = Matrix::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += scaled[[i, k]] * u[[j, k]];
            }
            inv[[i, j]] = sum;
        }
    }

    Ok(inv)
}

/// Invert a square matrix by Gauss-Jordan elimination on the augmented
/// matrix `[A | I]`.
///
/// No row exchanges are performed: a zero or near-zero leading pivot
/// silently yields non-finite output rather than an error. The augmented
/// workspace is a heap-allocated (2n) x (2n) block.
///
/// # Panics
/// Panics if `a` is not square.
pub fn inverse_via_gauss_jordan(a: &Matrix) -> Matrix {
    assert!(
        a.is_square(),
        "inverse_via_gauss_jordan requires a square matrix"
    );
    let order = a.nrows();

    let mut matrix = Matrix::zeros((2 * order, 2 * order));
    for i in 0..order {
        for j in 0..order {
            matrix[[i, j]] = a[[i, j]];
        }
        matrix[[i, i + order]] = 1.0;
    }

    // Eliminate column i from every other row. The all-zero padding rows
    // contribute a zero multiplier and pass through unchanged.
    for i in 0..order {
        for j in 0..2 * order {
            if j != i {
                let temp = matrix[[j, i]] / matrix[[i, i]];
                for k in 0..2 * order {
                    matrix[[j, k]] -= matrix[[i, k]] * temp;
                }
            }
        }
    }

    // Normalize each row by its diagonal entry
    for i in 0..order {
        let temp = matrix[[i, i]];
        for j in 0..2 * order {
            matrix[[i, j]] /= temp;
        }
    }

    // The right half of the top rows is the inverse
    let mut inv = Matrix::zeros((order, order));
    for i in 0..order {
        for j in 0..order {
            inv[[i, j]] = matrix[[i, j + order]];
        }
    }
    inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_inverse_via_svd_2x2() {
        let a = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = inverse_via_svd(&a).unwrap();
        let expected = array![[0.6, -0.7], [-0.2, 0.4]];
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(inv[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_via_gauss_jordan_2x2() {
        let a = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = inverse_via_gauss_jordan(&a);
        let expected = array![[0.6, -0.7], [-0.2, 0.4]];
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(inv[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_via_svd_leaves_input_untouched() {
        let a = array![[2.0, 0.0], [0.0, 4.0]];
        let _ = inverse_via_svd(&a).unwrap();
        assert_eq!(a, array![[2.0, 0.0], [0.0, 4.0]]);
    }

    #[test]
    #[should_panic]
    fn test_inverse_via_svd_rejects_rectangular() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let _ = inverse_via_svd(&a);
    }
}
