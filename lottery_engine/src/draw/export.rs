//! CSV rendering of draw results.

use chrono::SecondsFormat;
use std::collections::HashMap;

use super::errors::{DrawError, DrawResult};
use super::models::Winner;

/// Header row of every export.
pub const CSV_HEADER: [&str; 5] = [
    "registration_no",
    "status",
    "rank",
    "picked_at",
    "position_in_sequence",
];

pub const STATUS_WINNER: &str = "winner";
pub const STATUS_REMAINING: &str = "remaining";

/// Render winners followed by the unpicked tail of `sequence`.
///
/// Positions are 1-based indices into the frozen sequence. Records end in
/// CRLF and fields are quoted only when they need it.
pub(crate) fn render_csv(
    winners: &[Winner],
    sequence: &[String],
    cursor: usize,
) -> DrawResult<String> {
    let positions: HashMap<&str, usize> = sequence
        .iter()
        .enumerate()
        .map(|(idx, reg_no)| (reg_no.as_str(), idx + 1))
        .collect();

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(export_error)?;

    for winner in winners {
        let position = positions
            .get(winner.registration_no.as_str())
            .copied()
            .ok_or_else(|| {
                DrawError::Export(format!(
                    "winner {} is missing from the draw sequence",
                    winner.registration_no
                ))
            })?;
        let rank = winner.rank.to_string();
        let picked_at = winner.picked_at.to_rfc3339_opts(SecondsFormat::Micros, true);
        let position = position.to_string();
        writer
            .write_record([
                winner.registration_no.as_str(),
                STATUS_WINNER,
                rank.as_str(),
                picked_at.as_str(),
                position.as_str(),
            ])
            .map_err(export_error)?;
    }

    for (offset, reg_no) in sequence.iter().enumerate().skip(cursor) {
        let position = (offset + 1).to_string();
        writer
            .write_record([reg_no.as_str(), STATUS_REMAINING, "", "", position.as_str()])
            .map_err(export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DrawError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DrawError::Export(e.to_string()))
}

fn export_error(err: csv::Error) -> DrawError {
    DrawError::Export(err.to_string())
}
