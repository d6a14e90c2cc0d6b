//! Lottery draw state machine.

use chrono::Utc;
use log::{debug, info};
use std::collections::HashSet;

use super::{
    audit::compute_input_hash,
    errors::{DrawError, DrawResult},
    export::render_csv,
    models::{DrawState, DrawStatus, Entry, Winner},
    permuter::{Permuter, SecurePermuter, SeededPermuter},
};

/// A single lottery draw moving through `Draft → Shuffled → Completed`.
///
/// The draw order is frozen once by [`shuffle`](Self::shuffle); winners are
/// then revealed one at a time by [`pick_next`](Self::pick_next). With a seed
/// the order is reproducible, without one it comes from a cryptographically
/// secure generator.
///
/// The engine is not synchronized. Callers sharing a draw across threads or
/// requests must serialize access themselves.
#[derive(Debug, Clone)]
pub struct LotteryDraw {
    entries: Vec<Entry>,
    winners_to_pick: usize,
    seed: Option<String>,
    status: DrawStatus,
    sequence: Vec<String>,
    cursor: usize,
    winners: Vec<Winner>,
    input_hash: String,
}

impl LotteryDraw {
    /// Create a new draw in the `Draft` state.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidInput`] if `entries` is empty, if
    /// `winners_to_pick` is zero or exceeds the entry count, or if two entries
    /// share a registration number.
    pub fn new(
        entries: Vec<Entry>,
        winners_to_pick: usize,
        seed: Option<String>,
    ) -> DrawResult<Self> {
        if entries.is_empty() {
            return Err(DrawError::InvalidInput(
                "entries list cannot be empty".to_string(),
            ));
        }
        if winners_to_pick == 0 {
            return Err(DrawError::InvalidInput(
                "winners to pick must be positive".to_string(),
            ));
        }
        if winners_to_pick > entries.len() {
            return Err(DrawError::InvalidInput(format!(
                "cannot pick {winners_to_pick} winners from {} entries",
                entries.len()
            )));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.registration_no()) {
                return Err(DrawError::InvalidInput(format!(
                    "duplicate registration number: {}",
                    entry.registration_no()
                )));
            }
        }

        let input_hash = compute_input_hash(&entries, winners_to_pick, seed.as_deref())?;
        info!(
            "Draw created: {} entries, {} winners, {} mode, input hash {}",
            entries.len(),
            winners_to_pick,
            if seed.is_some() { "seeded" } else { "secure" },
            &input_hash[..16]
        );

        Ok(Self {
            entries,
            winners_to_pick,
            seed,
            status: DrawStatus::Draft,
            sequence: Vec::new(),
            cursor: 0,
            winners: Vec::new(),
            input_hash,
        })
    }

    /// Freeze the draw order and move to `Shuffled`.
    ///
    /// Returns an owned copy of the shuffled registration numbers.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::AlreadyShuffled`] unless the draw is a draft.
    pub fn shuffle(&mut self) -> DrawResult<Vec<String>> {
        if self.status != DrawStatus::Draft {
            return Err(DrawError::AlreadyShuffled);
        }

        let mut sequence: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.registration_no().to_string())
            .collect();

        match self.seed.as_deref() {
            Some(seed) => SeededPermuter::new(seed).permute(&mut sequence),
            None => SecurePermuter::new().permute(&mut sequence),
        }

        self.sequence = sequence;
        self.cursor = 0;
        self.status = DrawStatus::Shuffled;
        info!("Draw {} shuffled", &self.input_hash[..16]);

        Ok(self.sequence.clone())
    }

    /// Reveal the next winner from the frozen sequence.
    ///
    /// # Errors
    ///
    /// Checked in order: [`DrawError::NotShuffled`] for a draft,
    /// [`DrawError::DrawComplete`] once completed, [`DrawError::LimitReached`]
    /// when every winner is picked, [`DrawError::Exhausted`] when the sequence
    /// has run out.
    pub fn pick_next(&mut self) -> DrawResult<Winner> {
        match self.status {
            DrawStatus::Draft => return Err(DrawError::NotShuffled),
            DrawStatus::Completed => return Err(DrawError::DrawComplete),
            DrawStatus::Shuffled => {}
        }
        if self.winners.len() >= self.winners_to_pick {
            return Err(DrawError::LimitReached);
        }
        let Some(registration_no) = self.sequence.get(self.cursor) else {
            return Err(DrawError::Exhausted);
        };

        let winner = Winner {
            registration_no: registration_no.clone(),
            rank: self.winners.len() + 1,
            picked_at: Utc::now(),
        };
        self.winners.push(winner.clone());
        self.cursor += 1;
        debug!(
            "Winner #{} picked: {}",
            winner.rank, winner.registration_no
        );

        if self.winners.len() == self.winners_to_pick {
            self.status = DrawStatus::Completed;
            info!(
                "Draw {} completed with {} winners",
                &self.input_hash[..16],
                self.winners.len()
            );
        }

        Ok(winner)
    }

    /// Snapshot the current state of the draw.
    #[must_use]
    pub fn state(&self) -> DrawState {
        let remaining = match self.status {
            DrawStatus::Draft => self
                .entries
                .iter()
                .map(|entry| entry.registration_no().to_string())
                .collect(),
            DrawStatus::Shuffled | DrawStatus::Completed => {
                let picked: HashSet<&str> = self
                    .winners
                    .iter()
                    .map(|winner| winner.registration_no.as_str())
                    .collect();
                self.sequence[self.cursor..]
                    .iter()
                    .filter(|reg_no| !picked.contains(reg_no.as_str()))
                    .cloned()
                    .collect()
            }
        };

        DrawState {
            winners: self.winners.clone(),
            remaining,
            picked_count: self.winners.len(),
            total: self.entries.len(),
            winners_to_pick: self.winners_to_pick,
            status: self.status,
            input_hash: self.input_hash.clone(),
        }
    }

    /// Export winners and remaining entries as CSV.
    ///
    /// Columns: `registration_no,status,rank,picked_at,position_in_sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotShuffled`] for a draft.
    pub fn export_csv(&self) -> DrawResult<String> {
        if self.status == DrawStatus::Draft {
            return Err(DrawError::NotShuffled);
        }
        let csv = render_csv(&self.winners, &self.sequence, self.cursor)?;
        debug!(
            "Draw {} exported ({} winners)",
            &self.input_hash[..16],
            self.winners.len()
        );
        Ok(csv)
    }

    pub fn status(&self) -> DrawStatus {
        self.status
    }

    pub fn input_hash(&self) -> &str {
        &self.input_hash
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    pub fn winners_to_pick(&self) -> usize {
        self.winners_to_pick
    }

    /// Number of entries in the draw.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<Entry> {
        (1..=n).map(|i| Entry::new(i.to_string()).unwrap()).collect()
    }

    #[test]
    fn test_new_draw_is_draft() {
        let draw = LotteryDraw::new(entries(3), 2, None).unwrap();
        assert_eq!(draw.status(), DrawStatus::Draft);
        assert_eq!(draw.total(), 3);
        assert_eq!(draw.winners_to_pick(), 2);
        assert!(!draw.is_seeded());
        assert_eq!(draw.input_hash().len(), 64);
    }

    #[test]
    fn test_construction_validation() {
        assert!(matches!(
            LotteryDraw::new(Vec::new(), 1, None),
            Err(DrawError::InvalidInput(_))
        ));
        assert!(matches!(
            LotteryDraw::new(entries(2), 0, None),
            Err(DrawError::InvalidInput(_))
        ));
        assert!(matches!(
            LotteryDraw::new(entries(2), 3, None),
            Err(DrawError::InvalidInput(_))
        ));

        let duplicates = vec![
            Entry::new("1").unwrap(),
            Entry::new("1").unwrap(),
            Entry::new("2").unwrap(),
        ];
        let err = LotteryDraw::new(duplicates, 2, None).unwrap_err();
        assert_eq!(
            err,
            DrawError::InvalidInput("duplicate registration number: 1".to_string())
        );
    }

    #[test]
    fn test_shuffle_twice_fails() {
        let mut draw = LotteryDraw::new(entries(3), 1, Some("s".to_string())).unwrap();
        draw.shuffle().unwrap();
        assert_eq!(draw.shuffle(), Err(DrawError::AlreadyShuffled));
        assert_eq!(draw.status(), DrawStatus::Shuffled);
    }

    #[test]
    fn test_shuffle_result_is_a_copy() {
        let mut draw = LotteryDraw::new(entries(5), 2, Some("copy".to_string())).unwrap();
        let mut returned = draw.shuffle().unwrap();
        let expected_first = returned[0].clone();
        returned[0] = "tampered".to_string();

        let winner = draw.pick_next().unwrap();
        assert_eq!(winner.registration_no, expected_first);
    }

    #[test]
    fn test_pick_error_priority() {
        let mut draw = LotteryDraw::new(entries(2), 1, None).unwrap();
        assert_eq!(draw.pick_next(), Err(DrawError::NotShuffled));

        let sequence = draw.shuffle().unwrap();
        let winner = draw.pick_next().unwrap();
        assert_eq!(draw.status(), DrawStatus::Completed);
        let completed = draw.state();

        assert_eq!(draw.pick_next(), Err(DrawError::DrawComplete));
        assert_eq!(draw.state(), completed);
        assert_eq!(draw.state().winners, vec![winner.clone()]);

        let csv = draw.export_csv().unwrap();
        let lines: Vec<&str> = csv.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(&format!("{},winner,1,", winner.registration_no)));
        assert_eq!(lines[2], format!("{},remaining,,,2", sequence[1]));
    }

    #[test]
    fn test_failed_pick_leaves_state_untouched() {
        let mut draw = LotteryDraw::new(entries(3), 1, Some("x".to_string())).unwrap();
        draw.shuffle().unwrap();
        draw.pick_next().unwrap();
        let before = draw.state();

        assert!(draw.pick_next().is_err());
        assert_eq!(draw.state(), before);
    }

    #[test]
    fn test_state_in_draft_lists_input_order() {
        let input = vec![
            Entry::new("c").unwrap(),
            Entry::new("a").unwrap(),
            Entry::new("b").unwrap(),
        ];
        let draw = LotteryDraw::new(input, 1, None).unwrap();
        let state = draw.state();

        assert_eq!(state.remaining, vec!["c", "a", "b"]);
        assert_eq!(state.picked_count, 0);
        assert_eq!(state.status, DrawStatus::Draft);
    }

    #[test]
    fn test_state_after_picks_is_sequence_suffix() {
        let mut draw = LotteryDraw::new(entries(6), 3, Some("suffix".to_string())).unwrap();
        let sequence = draw.shuffle().unwrap();
        draw.pick_next().unwrap();
        draw.pick_next().unwrap();

        let state = draw.state();
        assert_eq!(state.remaining, sequence[2..].to_vec());
        assert_eq!(state.picked_count, 2);
        assert_eq!(state.winners_left(), 1);
    }

    #[test]
    fn test_export_requires_shuffle() {
        let draw = LotteryDraw::new(entries(2), 1, None).unwrap();
        assert_eq!(draw.export_csv(), Err(DrawError::NotShuffled));
    }

    #[test]
    fn test_export_after_shuffle_without_picks() {
        let mut draw = LotteryDraw::new(entries(3), 1, Some("e".to_string())).unwrap();
        let sequence = draw.shuffle().unwrap();
        let csv = draw.export_csv().unwrap();

        let lines: Vec<&str> = csv.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], format!("{},remaining,,,1", sequence[0]));
    }

    #[test]
    fn test_seed_accessor() {
        let draw = LotteryDraw::new(entries(2), 1, Some("abc".to_string())).unwrap();
        assert_eq!(draw.seed(), Some("abc"));
        assert!(draw.is_seeded());
        assert_eq!(draw.entries().len(), 2);
    }
}
