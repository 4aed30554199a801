//! Error types for descriptor operations.

use thiserror::Error;

/// Errors returned by descriptor-family operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    /// A descriptor (or batch row) does not have the family's length.
    #[error("dimension mismatch: expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Mean requested over zero descriptors.
    #[error("mean requested over an empty descriptor collection")]
    EmptyInput,

    /// A coordinate is NaN or infinite.
    #[error("coordinate {index} is not finite")]
    NonFinite { index: usize },

    /// Serialized descriptor could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseFailure),

    /// Invalid parameter value (e.g. a zero dimension).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Why a serialized descriptor was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Wrong number of whitespace-separated tokens.
    #[error("expected {expected} tokens, found {found}")]
    TokenCount { expected: usize, found: usize },

    /// A token is not a decimal number.
    #[error("token {index} ({token:?}) is not a number")]
    InvalidToken { index: usize, token: String },

    /// A token parsed to NaN or an infinity.
    #[error("token {index} ({token:?}) is not finite")]
    NonFinite { index: usize, token: String },
}

impl DescriptorError {
    pub(crate) fn mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// `NonFinite` for the first NaN or infinite coordinate of `v`, if any.
    pub(crate) fn first_non_finite(v: &[f32]) -> Option<Self> {
        v.iter()
            .position(|x| !x.is_finite())
            .map(|index| Self::NonFinite { index })
    }
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
