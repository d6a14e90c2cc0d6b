//! Draw data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{DrawError, DrawResult};

/// A candidate in the lottery, keyed by its registration number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    registration_no: String,
    label: Option<String>,
}

impl Entry {
    /// Create an entry without a label.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidInput`] if the registration number is empty.
    pub fn new(registration_no: impl Into<String>) -> DrawResult<Self> {
        Self::build(registration_no.into(), None)
    }

    /// Create an entry with a human-readable label.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidInput`] if the registration number is empty.
    pub fn with_label(
        registration_no: impl Into<String>,
        label: impl Into<String>,
    ) -> DrawResult<Self> {
        Self::build(registration_no.into(), Some(label.into()))
    }

    fn build(registration_no: String, label: Option<String>) -> DrawResult<Self> {
        if registration_no.is_empty() {
            return Err(DrawError::InvalidInput(
                "registration number cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            registration_no,
            label,
        })
    }

    pub fn registration_no(&self) -> &str {
        &self.registration_no
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// An entry selected during the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub registration_no: String,
    /// 1-based position in which this winner was drawn.
    pub rank: usize,
    pub picked_at: DateTime<Utc>,
}

/// Lifecycle of a draw. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawStatus {
    Draft,
    Shuffled,
    Completed,
}

impl DrawStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStatus::Draft => "Draft",
            DrawStatus::Shuffled => "Shuffled",
            DrawStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for DrawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point-in-time snapshot of a draw.
///
/// Owned copy of the engine's fields; mutating it has no effect on the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawState {
    /// Winners in pick order.
    pub winners: Vec<Winner>,
    /// Registration numbers still in the draw.
    pub remaining: Vec<String>,
    pub picked_count: usize,
    pub total: usize,
    pub winners_to_pick: usize,
    pub status: DrawStatus,
    /// SHA-256 fingerprint of the construction parameters.
    pub input_hash: String,
}

impl DrawState {
    /// Winners still to be drawn before the draw completes.
    pub fn winners_left(&self) -> usize {
        self.winners_to_pick.saturating_sub(self.picked_count)
    }

    pub fn is_completed(&self) -> bool {
        self.status == DrawStatus::Completed
    }
}
