//! Error types shared by the selection and sorting routines.

use thiserror::Error;

/// Errors surfaced to callers of [`select`](crate::select) and [`sort`](crate::sort).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order statistic does not exist in the sequence.
    #[error("rank {rank} is out of range for a sequence of length {len}")]
    RankOutOfRange { rank: usize, len: usize },

    /// The operation needs at least one element.
    #[error("sequence is empty")]
    EmptySequence,

    /// Malformed input handed to the command-line entry point.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn rank_out_of_range(rank: usize, len: usize) -> Self {
        Error::RankOutOfRange { rank, len }
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type for selection and sorting operations
pub type Result<T> = std::result::Result<T, Error>;
