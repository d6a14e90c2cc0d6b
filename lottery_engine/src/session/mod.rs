//! Session module providing one draw engine per logical session.
//!
//! This module implements:
//! - DrawSessionManager: owns every live session, keyed by UUID
//! - DrawSession: a loaded entry list plus the draw built from it
//! - Randomization modes (`random` / `reproducible`) resolved to engine seeds
//!
//! ## Architecture
//!
//! Sessions live in a `RwLock`-guarded map and each session sits behind
//! its own mutex. Presentation layers hold an `Arc<DrawSessionManager>` and
//! pass session IDs explicitly; there is no global draw state.
//!
//! ## Example
//!
//! ```
//! use lottery_engine::input::parse_entry_list;
//! use lottery_engine::session::{DrawSessionManager, InputSource, RandomizationMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = DrawSessionManager::default();
//!     let list = parse_entry_list("1\nREG-001\nREG-002\n")?;
//!
//!     let session = manager.create_session(list, InputSource::Manual).await?;
//!     manager
//!         .shuffle(session.id, RandomizationMode::Reproducible, None)
//!         .await?;
//!     let outcome = manager.draw_winner(session.id).await?;
//!     println!("Winner #{}: {}", outcome.winner.rank, outcome.winner.registration_no);
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{SessionError, SessionResult};
pub use manager::DrawSessionManager;
pub use models::{
    DEFAULT_MAX_SESSIONS, DEFAULT_REPRODUCIBLE_SEED, DrawOutcome, DrawSession, InputSource,
    RandomizationMode, SessionConfig, SessionId, SessionView,
};
