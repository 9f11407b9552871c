//! densemat: dense rectangular matrices over one contiguous buffer
//!
//! This crate provides a generically-typed, row-major dense matrix container with
//! checked construction, deep-copy/move lifecycle semantics, elementwise and
//! matrix arithmetic, and an in-place transpose that works for non-square shapes
//! without a second value buffer.

pub mod core;
pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;

// Re-export the matrix type at the crate root for convenience
pub use matrix::dense::Matrix;
