//! # Lottery Engine
//!
//! An auditable lottery draw implemented as a small, strictly forward-moving
//! state machine.
//!
//! A draw is constructed from a list of uniquely numbered entries, shuffled
//! exactly once to freeze the draw order, and then reveals winners one at a
//! time until the requested number has been picked. Every draw carries a
//! SHA-256 fingerprint of its construction parameters so results can be
//! audited later.
//!
//! ## Lifecycle
//!
//! - **Draft**: entries loaded, nothing shuffled yet
//! - **Shuffled**: draw order frozen, winners being revealed
//! - **Completed**: every requested winner has been picked
//!
//! ## Randomness
//!
//! With a seed the shuffle is reproducible: ChaCha20 keyed by the SHA-256 of
//! the seed drives a Fisher–Yates walk. Without a seed the walk is driven by
//! a cryptographically secure generator and cannot be predicted or replayed.
//!
//! ## Core Modules
//!
//! - [`draw`]: the draw engine, permuters, audit hash, and CSV export
//! - [`input`]: entry-list parsing for files, uploads, and manual input
//! - [`session`]: one draw per session for multi-user front ends
//!
//! ## Example
//!
//! ```
//! use lottery_engine::{DrawStatus, Entry, LotteryDraw};
//!
//! let entries = vec![Entry::new("1")?, Entry::new("2")?, Entry::new("3")?];
//! let mut draw = LotteryDraw::new(entries, 2, Some("seed".to_string()))?;
//!
//! draw.shuffle()?;
//! assert_eq!(draw.pick_next()?.rank, 1);
//! assert_eq!(draw.pick_next()?.rank, 2);
//! assert_eq!(draw.state().status, DrawStatus::Completed);
//! # Ok::<(), lottery_engine::DrawError>(())
//! ```

/// Draw engine state machine, permuters, audit hash, and export.
pub mod draw;
pub use draw::{DrawError, DrawResult, DrawState, DrawStatus, Entry, LotteryDraw, Winner};

/// Entry-list loading.
pub mod input;
pub use input::{EntryList, InputError, InputResult};

/// Per-session draw management.
pub mod session;
