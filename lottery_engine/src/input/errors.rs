//! Entry-list loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::draw::DrawError;

/// Errors raised while turning external text into an entry list.
///
/// Line numbers are 1-based physical line numbers of the source text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("entry file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read entry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("entry file must be UTF-8 encoded")]
    Encoding,

    #[error("input must contain at least 2 lines (winner count + entries)")]
    TooFewLines,

    #[error("line {line}: first line must be a number (winners to pick), got: {value}")]
    InvalidWinnerCount { line: usize, value: String },

    #[error("number of winners must be positive, got: {0}")]
    NonPositiveWinnerCount(i64),

    #[error("no registration numbers found")]
    NoEntries,

    #[error("cannot pick {winners} winners from {entries} entries")]
    TooManyWinners { winners: usize, entries: usize },

    #[error("line {line}: duplicate registration number: {registration_no}")]
    DuplicateEntry { line: usize, registration_no: String },

    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Result type for entry-list loading
pub type InputResult<T> = Result<T, InputError>;
