//! Draw engine - the auditable lottery state machine.
//!
//! This module provides:
//! - [`LotteryDraw`]: the `Draft → Shuffled → Completed` state machine
//! - Seeded (reproducible) and cryptographically secure permuters
//! - The SHA-256 input hash used as an audit fingerprint
//! - CSV export of winners and remaining entries
//!
//! ## Example
//!
//! ```
//! use lottery_engine::draw::{DrawStatus, Entry, LotteryDraw};
//!
//! let entries = (1..=95)
//!     .map(|i| Entry::new(i.to_string()))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let mut draw = LotteryDraw::new(entries, 40, Some("my-seed".to_string()))?;
//!
//! draw.shuffle()?;
//! let first = draw.pick_next()?;
//! assert_eq!(first.rank, 1);
//!
//! let state = draw.state();
//! assert_eq!(state.status, DrawStatus::Shuffled);
//! let csv = draw.export_csv()?;
//! assert!(csv.starts_with("registration_no,status,rank,picked_at,position_in_sequence"));
//! # Ok::<(), lottery_engine::draw::DrawError>(())
//! ```

pub mod audit;
pub mod engine;
pub mod errors;
pub mod export;
pub mod models;
pub mod permuter;

pub use audit::compute_input_hash;
pub use engine::LotteryDraw;
pub use errors::{DrawError, DrawResult};
pub use export::CSV_HEADER;
pub use models::{DrawState, DrawStatus, Entry, Winner};
pub use permuter::{Permuter, SecurePermuter, SeededPermuter};
