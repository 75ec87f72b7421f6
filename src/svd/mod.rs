//! SVD decomposition algorithms

pub mod golub_kahan;

pub use golub_kahan::{SvdConfig, SvdError, SvdResult, svd, svd_copy, svdcmp, svdcmp_with};
