//! Entry-list loading for files, uploads, and manual input.
//!
//! The loader validates everything the draw engine would reject (counts,
//! duplicates, empty input) and reports it with line numbers before a draw
//! is ever constructed.
//!
//! ## Example
//!
//! ```
//! use lottery_engine::input::parse_entry_list;
//!
//! let list = parse_entry_list("2\nREG-001\nREG-002\nREG-003\n")?;
//! assert_eq!(list.winners_to_pick, 2);
//!
//! let mut draw = list.into_draw(None)?;
//! draw.shuffle()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod parser;

pub use errors::{InputError, InputResult};
pub use parser::{EntryList, load_entry_list, parse_entry_list, parse_manual_entries};
