//! Error types for seqflow
//!
//! Pulling from a sequence never fails: `None` is the ordinary end of a
//! sequence, not an error. The variants below are only produced by the
//! checked constructors and by bounded collection.

/// Errors reported by the checked parts of the library
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A stride of zero was requested
    #[error("stride must be greater than zero")]
    ZeroStride,

    /// Bounded collection would have stored more than `limit` elements
    #[error("buffer capacity exceeded: at most {limit} elements may be stored")]
    CapacityExceeded { limit: usize },

    /// A buffer configuration failed validation
    #[error("invalid buffer configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the checked operations
pub type SequenceResult<T> = Result<T, SequenceError>;
