//! Parser for the entry-list text format.
//!
//! ```text
//! 15          <- winners to pick
//! REG-001     <- one registration number per line
//! REG-002
//! ...
//! ```
//!
//! Lines are trimmed and blank lines ignored. A leading byte-order mark is
//! dropped.

use std::collections::HashSet;
use std::path::Path;

use super::errors::{InputError, InputResult};
use crate::draw::{DrawResult, Entry, LotteryDraw};

/// Validated entries plus the number of winners to draw from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    pub entries: Vec<Entry>,
    pub winners_to_pick: usize,
}

impl EntryList {
    /// Build a draft draw from this list.
    pub fn into_draw(self, seed: Option<String>) -> DrawResult<LotteryDraw> {
        LotteryDraw::new(self.entries, self.winners_to_pick, seed)
    }

    pub fn registration_numbers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::registration_no)
    }
}

/// Parse text whose first line is the winner count.
pub fn parse_entry_list(text: &str) -> InputResult<EntryList> {
    let mut lines = non_blank_lines(text);

    let (count_line, count_text) = lines.next().ok_or(InputError::TooFewLines)?;
    let rest: Vec<(usize, &str)> = lines.collect();
    if rest.is_empty() {
        return Err(InputError::TooFewLines);
    }

    let count: i64 = count_text
        .parse()
        .map_err(|_| InputError::InvalidWinnerCount {
            line: count_line,
            value: count_text.to_string(),
        })?;

    build_entry_list(rest, count)
}

/// Read and parse an entry file.
pub fn load_entry_list(path: impl AsRef<Path>) -> InputResult<EntryList> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| InputError::Encoding)?;
    parse_entry_list(&text)
}

/// Parse free-form text where every non-blank line is a registration number
/// and the winner count is supplied separately.
pub fn parse_manual_entries(text: &str, winners_to_pick: i64) -> InputResult<EntryList> {
    let lines: Vec<(usize, &str)> = non_blank_lines(text).collect();
    build_entry_list(lines, winners_to_pick)
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn build_entry_list(lines: Vec<(usize, &str)>, count: i64) -> InputResult<EntryList> {
    if count <= 0 {
        return Err(InputError::NonPositiveWinnerCount(count));
    }
    if lines.is_empty() {
        return Err(InputError::NoEntries);
    }
    let winners_to_pick = usize::try_from(count).unwrap_or(usize::MAX);
    if winners_to_pick > lines.len() {
        return Err(InputError::TooManyWinners {
            winners: winners_to_pick,
            entries: lines.len(),
        });
    }

    let mut seen = HashSet::with_capacity(lines.len());
    let mut entries = Vec::with_capacity(lines.len());
    for (line, registration_no) in lines {
        if !seen.insert(registration_no) {
            return Err(InputError::DuplicateEntry {
                line,
                registration_no: registration_no.to_string(),
            });
        }
        entries.push(Entry::new(registration_no)?);
    }

    Ok(EntryList {
        entries,
        winners_to_pick,
    })
}
