//! Matrix module: the dense matrix type, its operators, and transpose.

pub mod dense;
pub use dense::Matrix;
pub mod ops;
pub mod transpose;
