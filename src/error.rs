use thiserror::Error;

// Unified error type for densemat

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("invalid dimension {0}x{1}: rows and cols must both be nonzero")]
    InvalidDimension(usize, usize),
    #[error("allocation failure: could not reserve storage for {0} elements")]
    AllocationFailure(usize),
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("dimension mismatch: lhs has {0} cols but rhs has {1} rows")]
    DimensionMismatch(usize, usize),
    #[error("index {0} out of range for extent {1}")]
    IndexOutOfRange(usize, usize),
}
