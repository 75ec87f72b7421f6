//! Result validation utilities

use crate::utils::norms::norm_frobenius;
use crate::{Matrix, Vector};

/// Validate an SVD result against the original matrix.
///
/// Checks that U and V have orthonormal columns, that the singular values
/// are non-negative, and that `U * diag(w) * V^T` reconstructs the
/// original within a relative Frobenius tolerance. No ordering of the
/// singular values is required; the engine does not sort them.
pub fn validate_svd(original: &Matrix, u: &Matrix, w: &Vector, v: &Matrix, tolerance: f64) -> bool {
    let (m, n) = (original.nrows(), original.ncols());
    if u.nrows() != m || u.ncols() != n {
        return false;
    }
    if v.nrows() != n || v.ncols() != n {
        return false;
    }
    if w.len() != n {
        return false;
    }

    if !is_orthogonal(v, tolerance) {
        return false;
    }

    if w.iter().any(|&s| s < -tolerance) {
        return false;
    }

    is_reconstruction_valid(original, u, w, v, tolerance)
}

/// Check that the columns of a matrix are orthonormal (M^T * M = I)
pub fn is_orthogonal(matrix: &Matrix, tolerance: f64) -> bool {
    let (m, k) = (matrix.nrows(), matrix.ncols());
    for i in 0..k {
        for j in 0..k {
            let mut sum = 0.0;
            for row in 0..m {
                sum += matrix[[row, i]] * matrix[[row, j]];
            }
            let expected = if i == j { 1.0 } else { 0.0 };
            if (sum - expected).abs() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Check `||A - U * diag(w) * V^T||_F < tolerance * ||A||_F`
fn is_reconstruction_valid(
    original: &Matrix,
    u: &Matrix,
    w: &Vector,
    v: &Matrix,
    tolerance: f64,
) -> bool {
    let (m, n) = (original.nrows(), original.ncols());
    let mut diff_norm_sq = 0.0;

    for i in 0..m {
        for j in 0..n {
            let mut reconstructed = 0.0;
            for l in 0..n {
                reconstructed += u[[i, l]] * w[l] * v[[j, l]];
            }
            let diff = original[[i, j]] - reconstructed;
            diff_norm_sq += diff * diff;
        }
    }

    let diff_norm = diff_norm_sq.sqrt();
    let orig_norm = norm_frobenius(original);

    if orig_norm == 0.0 {
        diff_norm < tolerance
    } else {
        diff_norm < tolerance * orig_norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_validate_svd_identity() {
        let eye = Matrix::eye(3);
        let w = Vector::ones(3);
        assert!(validate_svd(&eye, &eye, &w, &eye, 1e-10));
    }

    #[test]
    fn test_is_orthogonal() {
        assert!(is_orthogonal(&Matrix::eye(3), 1e-10));
        let not_orth = array![[1.0, 1.0], [0.0, 1.0]];
        assert!(!is_orthogonal(&not_orth, 1e-10));
    }

    #[test]
    fn test_validate_rejects_negative_singular_value() {
        let eye = Matrix::eye(2);
        let w = array![1.0, -1.0];
        assert!(!validate_svd(&eye, &eye, &w, &eye, 1e-10));
    }

    #[test]
    fn test_validate_rejects_bad_reconstruction() {
        let a = array![[2.0, 0.0], [0.0, 2.0]];
        let eye = Matrix::eye(2);
        let w = Vector::ones(2);
        assert!(!validate_svd(&a, &eye, &w, &eye, 1e-10));
    }
}
