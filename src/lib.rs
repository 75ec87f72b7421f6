//! # dense-svd: Golub-Kahan-Reinsch SVD for dense real matrices
//!
//! Computes the singular value decomposition A = U * W * V^T of a dense
//! real matrix by Householder bidiagonalization followed by implicit-shift
//! QR iteration, operating in place on the input. On top of the engine sit
//! two independent matrix-inverse paths: one through the SVD and one
//! through Gauss-Jordan elimination, kept separate so their outputs can be
//! cross-checked.

pub mod inverse;
pub mod svd;
pub mod utils;

pub use inverse::{inverse_via_gauss_jordan, inverse_via_svd};
pub use svd::{SvdConfig, SvdError, SvdResult, svd, svd_copy, svdcmp, svdcmp_with};
pub use utils::{
    norm_2, norm_frobenius, norm_inf, norm_max, print_matrix, print_vector, pythag, sign,
    validate_svd, write_matrix, write_vector,
};

// Re-export ndarray types
pub use ndarray::{Array1, Array2};

// Type aliases for convenience
pub type Matrix = Array2<f64>;
pub type Vector = Array1<f64>;
