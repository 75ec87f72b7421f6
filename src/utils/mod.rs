//! Shared numeric and diagnostic helpers

pub mod display;
pub mod norms;
pub mod scalars;
pub mod validation;

pub use display::{print_matrix, print_vector, write_matrix, write_vector};
pub use norms::{norm_2, norm_frobenius, norm_inf, norm_max};
pub use scalars::{pythag, sign};
pub use validation::validate_svd;
