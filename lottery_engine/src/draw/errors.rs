//! Draw engine error types.

use thiserror::Error;

/// Errors raised by [`LotteryDraw`](super::LotteryDraw) operations.
///
/// Every variant signals bad input or a caller protocol violation. None of
/// them is transient, and the engine is left untouched when one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DrawError {
    /// Construction-time validation failure
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Shuffle was called on a draw that is no longer a draft
    #[error("draw has already been shuffled")]
    AlreadyShuffled,

    /// Pick or export was called before the shuffle
    #[error("must shuffle before picking winners or exporting")]
    NotShuffled,

    /// Every winner has already been picked
    #[error("all winners have already been picked")]
    DrawComplete,

    /// The configured number of winners has been reached
    #[error("cannot pick more winners than the specified limit")]
    LimitReached,

    /// The shuffled sequence has no entries left to pick from
    #[error("no more entries available to pick from")]
    Exhausted,

    /// CSV serialization failed
    #[error("export failed: {0}")]
    Export(String),
}

impl DrawError {
    /// Whether the error comes from calling operations in the wrong order
    /// rather than from bad input.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            DrawError::AlreadyShuffled
                | DrawError::NotShuffled
                | DrawError::DrawComplete
                | DrawError::LimitReached
                | DrawError::Exhausted
        )
    }
}

/// Result type for draw operations
pub type DrawResult<T> = Result<T, DrawError>;
