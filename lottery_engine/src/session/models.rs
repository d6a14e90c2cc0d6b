//! Session data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::draw::{DrawState, DrawStatus, LotteryDraw, Winner};
use crate::input::EntryList;

/// Session ID type
pub type SessionId = Uuid;

/// Seed used for reproducible draws when the caller supplies none
pub const DEFAULT_REPRODUCIBLE_SEED: &str = "reproducible-draw";

/// Default cap on concurrently held sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Session manager configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_sessions: usize,
    pub reproducible_seed: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            reproducible_seed: DEFAULT_REPRODUCIBLE_SEED.to_string(),
        }
    }
}

/// Where a session's entries came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSource {
    File { filename: String },
    Manual,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File { filename } => write!(f, "CSV file: {filename}"),
            InputSource::Manual => write!(f, "Manual input"),
        }
    }
}

/// How the draw order is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomizationMode {
    /// Different order every time
    #[default]
    Random,
    /// Same order for the same entries and seed
    Reproducible,
}

impl fmt::Display for RandomizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomizationMode::Random => write!(f, "random"),
            RandomizationMode::Reproducible => write!(f, "reproducible"),
        }
    }
}

/// One loaded entry list and, once shuffled, the draw built from it.
#[derive(Debug)]
pub struct DrawSession {
    pub id: SessionId,
    pub entry_list: EntryList,
    pub source: InputSource,
    pub mode: Option<RandomizationMode>,
    pub draw: Option<LotteryDraw>,
    pub created_at: DateTime<Utc>,
}

impl DrawSession {
    pub fn new(entry_list: EntryList, source: InputSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_list,
            source,
            mode: None,
            draw: None,
            created_at: Utc::now(),
        }
    }

    /// Snapshot suitable for API responses.
    pub fn view(&self) -> SessionView {
        let state = self.draw.as_ref().map(LotteryDraw::state);
        let entries_list: Vec<String> = self
            .entry_list
            .registration_numbers()
            .map(str::to_string)
            .collect();

        SessionView {
            id: self.id,
            entry_count: entries_list.len(),
            winners_to_pick: self.entry_list.winners_to_pick,
            input_source: self.source.to_string(),
            randomization_mode: self.mode,
            is_shuffled: state.is_some(),
            is_completed: state.as_ref().is_some_and(DrawState::is_completed),
            status: state
                .as_ref()
                .map_or(DrawStatus::Draft, |state| state.status),
            winners: state
                .as_ref()
                .map(|state| state.winners.clone())
                .unwrap_or_default(),
            remaining_count: state
                .as_ref()
                .map_or(entries_list.len(), |state| state.remaining.len()),
            input_hash: state.map(|state| state.input_hash),
            entries_list,
            created_at: self.created_at,
        }
    }
}

/// Read model of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub id: SessionId,
    pub entry_count: usize,
    pub winners_to_pick: usize,
    pub input_source: String,
    pub randomization_mode: Option<RandomizationMode>,
    pub is_shuffled: bool,
    pub is_completed: bool,
    pub status: DrawStatus,
    pub winners: Vec<Winner>,
    pub remaining_count: usize,
    pub input_hash: Option<String>,
    pub entries_list: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of drawing one winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub winner: Winner,
    pub state: DrawState,
}
