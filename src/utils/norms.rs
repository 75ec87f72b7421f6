//! Vector and matrix norm computations

use crate::{Matrix, Vector};

/// Compute the 2-norm (Euclidean norm) of a vector
pub fn norm_2(vec: &Vector) -> f64 {
    let mut sum = 0.0;
    for &val in vec.iter() {
        sum += val * val;
    }
    sum.sqrt()
}

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius(mat: &Matrix) -> f64 {
    let mut sum = 0.0;
    for &val in mat.iter() {
        sum += val * val;
    }
    sum.sqrt()
}

/// Compute the maximum absolute value in a vector
pub fn norm_inf(vec: &Vector) -> f64 {
    let mut max_val = 0.0f64;
    for &val in vec.iter() {
        max_val = max_val.max(val.abs());
    }
    max_val
}

/// Compute the maximum absolute value in a matrix
pub fn norm_max(mat: &Matrix) -> f64 {
    let mut max_val = 0.0f64;
    for &val in mat.iter() {
        max_val = max_val.max(val.abs());
    }
    max_val
}
