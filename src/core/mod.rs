//! Core traits shared by matrix consumers.

pub mod traits;
pub use traits::*;
