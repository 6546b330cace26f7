use thiserror::Error;

/// Errors raised by the selection routines.
///
/// Every variant is a broken precondition or a broken internal invariant. None of
/// them is retryable, and a call that fails on a precondition leaves the input
/// sequence untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The inclusive range `[left, right]` is empty, reversed, or runs past the sequence.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The requested rank is outside `1..=len`.
    #[error("Rank {k} is out of bounds for a segment of length {len}")]
    RankOutOfBounds { k: usize, len: usize },

    /// The partitioner was handed a pivot value that does not occur in its segment.
    #[error("Pivot value not found in segment")]
    PivotNotFound,
}

impl SelectError {
    pub fn invalid_range<S: Into<String>>(msg: S) -> Self {
        SelectError::InvalidRange(msg.into())
    }

    pub fn rank_out_of_bounds(k: usize, len: usize) -> Self {
        SelectError::RankOutOfBounds { k, len }
    }
}

pub type Result<T> = std::result::Result<T, SelectError>;
