//! Error types for the rewrite buffer.
//!
//! The buffer has exactly one failure condition: a caller addressed a token
//! position that does not exist in the current seeding. Everything else is
//! defined to clamp or succeed, so the error surface stays small.

use thiserror::Error;

/// Errors raised by [`Fixer`](crate::fixer::Fixer) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FixerError {
    /// A token position outside `[0, token_count)` was addressed.
    ///
    /// This is always a defect in the calling rule (a stale or mistyped
    /// position) and is never retried internally; callers should treat it
    /// as fatal for the current pass.
    #[error("token position {position} out of range (buffer holds {token_count} tokens)")]
    OutOfRange {
        position: usize,
        token_count: usize,
    },
}

impl FixerError {
    /// Create an out-of-range error for the given position and buffer size.
    pub fn out_of_range(position: usize, token_count: usize) -> Self {
        FixerError::OutOfRange {
            position,
            token_count,
        }
    }
}
