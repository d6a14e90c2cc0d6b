//! Draw session manager holding one draw engine per session.

use log::{debug, info};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{Mutex, RwLock};

use super::{
    errors::{SessionError, SessionResult},
    models::{
        DrawOutcome, DrawSession, InputSource, RandomizationMode, SessionConfig, SessionId,
        SessionView,
    },
};
use crate::draw::DrawError;
use crate::input::EntryList;

/// Session manager for concurrent draws
///
/// Each session owns its own [`LotteryDraw`](crate::draw::LotteryDraw) behind
/// a mutex, so operations on one draw are serialized while different draws
/// proceed independently.
pub struct DrawSessionManager {
    /// Live sessions
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<DrawSession>>>>>,

    config: SessionConfig,
}

impl DrawSessionManager {
    /// Create a new session manager
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Register a loaded entry list as a new session
    ///
    /// # Errors
    ///
    /// * `SessionError::CapacityReached` - The configured session cap is full
    pub async fn create_session(
        &self,
        entry_list: EntryList,
        source: InputSource,
    ) -> SessionResult<SessionView> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(SessionError::CapacityReached(self.config.max_sessions));
        }

        let session = DrawSession::new(entry_list, source);
        let view = session.view();
        sessions.insert(session.id, Arc::new(Mutex::new(session)));

        info!(
            "Created draw session {} ({} entries, {} winners, {})",
            view.id, view.entry_count, view.winners_to_pick, view.input_source
        );
        Ok(view)
    }

    async fn session(&self, id: SessionId) -> SessionResult<Arc<Mutex<DrawSession>>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    /// Get a snapshot of a session
    pub async fn view(&self, id: SessionId) -> SessionResult<SessionView> {
        let session = self.session(id).await?;
        let session = session.lock().await;
        Ok(session.view())
    }

    /// Build the session's draw and freeze its order
    ///
    /// `reproducible` uses `seed` when given and the configured default seed
    /// otherwise. `random` does not accept a seed.
    ///
    /// # Errors
    ///
    /// * `SessionError::NotFound` - Unknown session
    /// * `SessionError::InvalidRequest` - A seed was given for a random draw
    /// * `SessionError::Draw(DrawError::AlreadyShuffled)` - The session was already shuffled
    pub async fn shuffle(
        &self,
        id: SessionId,
        mode: RandomizationMode,
        seed: Option<String>,
    ) -> SessionResult<SessionView> {
        let seed = match (mode, seed) {
            (RandomizationMode::Random, None) => None,
            (RandomizationMode::Random, Some(_)) => {
                return Err(SessionError::InvalidRequest(
                    "a seed can only be used with reproducible mode".to_string(),
                ));
            }
            (RandomizationMode::Reproducible, Some(seed)) => Some(seed),
            (RandomizationMode::Reproducible, None) => Some(self.config.reproducible_seed.clone()),
        };

        let session = self.session(id).await?;
        let mut session = session.lock().await;
        if session.draw.is_some() {
            return Err(DrawError::AlreadyShuffled.into());
        }

        let mut draw = session.entry_list.clone().into_draw(seed)?;
        draw.shuffle()?;
        session.draw = Some(draw);
        session.mode = Some(mode);

        info!("Shuffled draw session {id} in {mode} mode");
        Ok(session.view())
    }

    /// Draw the next winner of a session
    ///
    /// # Errors
    ///
    /// * `SessionError::NotFound` - Unknown session
    /// * `SessionError::Draw` - Not shuffled yet, or every winner already drawn
    pub async fn draw_winner(&self, id: SessionId) -> SessionResult<DrawOutcome> {
        let session = self.session(id).await?;
        let mut session = session.lock().await;
        let draw = session.draw.as_mut().ok_or(DrawError::NotShuffled)?;

        let winner = draw.pick_next()?;
        let state = draw.state();
        debug!(
            "Session {id}: winner #{} is {}",
            winner.rank, winner.registration_no
        );
        Ok(DrawOutcome { winner, state })
    }

    /// Export a session's results as CSV
    pub async fn export_csv(&self, id: SessionId) -> SessionResult<String> {
        let session = self.session(id).await?;
        let session = session.lock().await;
        let draw = session.draw.as_ref().ok_or(DrawError::NotShuffled)?;
        Ok(draw.export_csv()?)
    }

    /// Drop a session
    ///
    /// # Returns
    ///
    /// * `bool` - Whether the session existed
    pub async fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Removed draw session {id}");
        }
        removed
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for DrawSessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
