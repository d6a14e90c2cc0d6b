//! The interactive draw flow.

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use lottery_engine::{
    LotteryDraw, Winner,
    input::{EntryList, load_entry_list},
    session::DEFAULT_REPRODUCIBLE_SEED,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::console::Console;
use crate::demo::generate_default_entries;

/// Default CSV export path
pub const DEFAULT_OUTPUT: &str = "lottery_results.csv";

/// Remaining entries shown per page
const PAGE_SIZE: usize = 10;

/// Randomization chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChoice {
    Random,
    /// Reproducible draw keyed by this seed
    Seeded(String),
}

impl ModeChoice {
    fn seed(&self) -> Option<String> {
        match self {
            ModeChoice::Random => None,
            ModeChoice::Seeded(seed) => Some(seed.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Entry file; the demo list is used when absent
    pub file: Option<PathBuf>,
    /// Mode forced by flags; prompted for when absent
    pub mode: Option<ModeChoice>,
    pub output: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file: None,
            mode: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed {
        winners: Vec<Winner>,
        exported: Option<PathBuf>,
    },
    Cancelled,
}

/// Run one draw from start to finish.
///
/// End of input at any required prompt cancels the draw.
pub fn run<R: BufRead, W: Write>(
    options: &Options,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    console.say("🎲 Interactive Lottery Draw")?;
    console.say("=".repeat(40))?;

    let entry_list = load_entries(options, console)?;

    let Some(mode) = choose_mode(options, console)? else {
        return cancelled(console);
    };

    let winners_to_pick = entry_list.winners_to_pick;
    let mut draw = entry_list.into_draw(mode.seed())?;

    if !console.pause("\nPress Enter to shuffle the entries...")? {
        return cancelled(console);
    }
    draw.shuffle()?;
    console.say("✅ Entries have been shuffled!")?;
    console.say("🔀 Draw order has been randomized")?;

    console.say("\n🏆 Now drawing winners one by one...")?;
    console.say("   Press Enter to reveal each winner")?;

    let mut winners = Vec::with_capacity(winners_to_pick);
    for number in 1..=winners_to_pick {
        if !console.pause(&format!("\nPress Enter to draw winner #{number}..."))? {
            return cancelled(console);
        }

        let winner = draw.pick_next()?;
        console.say(format!(
            "🎉 Winner #{}: {}",
            winner.rank, winner.registration_no
        ))?;
        console.say(format!(
            "   Drawn at: {}",
            winner.picked_at.with_timezone(&Local).format("%H:%M:%S")
        ))?;
        let left = winners_to_pick - number;
        if left > 0 {
            console.say(format!("   ({left} winners remaining)"))?;
        }
        winners.push(winner);
    }

    print_results(&draw, &winners, console)?;
    show_remaining(&draw, console)?;
    let exported = export_results(&draw, options, console)?;

    console.say("\n🎊 Interactive lottery draw completed!")?;
    Ok(Outcome::Completed { winners, exported })
}

fn cancelled<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Outcome> {
    console.say("\n⚠️ Draw cancelled by user")?;
    info!("Draw cancelled before completion");
    Ok(Outcome::Cancelled)
}

fn load_entries<R: BufRead, W: Write>(
    options: &Options,
    console: &mut Console<R, W>,
) -> Result<EntryList> {
    let Some(path) = &options.file else {
        console.say("📋 No entry file provided, using demo entries")?;
        let list = generate_default_entries()?;
        let numbers: Vec<&str> = list.registration_numbers().collect();
        console.say(format!(
            "📋 Generated {} entries from {} to {}",
            numbers.len(),
            numbers.first().copied().unwrap_or_default(),
            numbers.last().copied().unwrap_or_default()
        ))?;
        console.say(format!(
            "🎯 Ready to draw {} winners!",
            list.winners_to_pick
        ))?;
        console.say("\n📝 Sample entries:")?;
        for pair in numbers.iter().take(10).collect::<Vec<_>>().chunks(2) {
            let row: Vec<&str> = pair.iter().map(|n| **n).collect();
            console.say(format!("   {}", row.join("  ")))?;
        }
        if numbers.len() > 10 {
            console.say(format!("   ... (and {} more)", numbers.len() - 10))?;
        }
        return Ok(list);
    };

    console.say(format!("📁 Loading entries from: {}", path.display()))?;
    let list = match load_entry_list(path) {
        Ok(list) => list,
        Err(err) => {
            console.say(format!("❌ Error loading entry file: {err}"))?;
            console.say("\n💡 Entry file format:")?;
            console.say("   Line 1: number_of_winners")?;
            console.say("   Line 2+: registration numbers (one per line)")?;
            return Err(err).with_context(|| format!("failed to load {}", path.display()));
        }
    };

    let numbers: Vec<&str> = list.registration_numbers().collect();
    console.say(format!("✅ Loaded {} entries", numbers.len()))?;
    console.say(format!(
        "🎯 Ready to draw {} winners!",
        list.winners_to_pick
    ))?;
    console.say("\n📝 Entries loaded:")?;
    console.say(format!(
        "   First: {}",
        numbers.first().copied().unwrap_or_default()
    ))?;
    console.say(format!(
        "   Last:  {}",
        numbers.last().copied().unwrap_or_default()
    ))?;
    if numbers.len() > 10 {
        console.say(format!("   Sample: {}", numbers[1..6].join(", ")))?;
        console.say(format!("   ... (and {} more)", numbers.len() - 6))?;
    } else {
        console.say(format!("   All: {}", numbers.join(", ")))?;
    }
    Ok(list)
}

fn choose_mode<R: BufRead, W: Write>(
    options: &Options,
    console: &mut Console<R, W>,
) -> Result<Option<ModeChoice>> {
    if let Some(mode) = &options.mode {
        match mode {
            ModeChoice::Random => console.say("🎲 Using random mode (forced via --random)")?,
            ModeChoice::Seeded(seed) => console.say(format!(
                "🔒 Using reproducible mode with seed \"{seed}\""
            ))?,
        }
        return Ok(Some(mode.clone()));
    }

    console.say("\n🎲 Randomization Options:")?;
    console.say("   1. Random draw (different results each time)")?;
    console.say("   2. Reproducible draw (same results with same entries)")?;
    let Some(choice) = console.prompt("Choose option (1 or 2, default: 1): ")? else {
        return Ok(None);
    };

    if choice == "2" {
        console.say("🔒 Using reproducible mode (same results each time)")?;
        Ok(Some(ModeChoice::Seeded(DEFAULT_REPRODUCIBLE_SEED.to_string())))
    } else {
        console.say("🎲 Using random mode (different results each time)")?;
        Ok(Some(ModeChoice::Random))
    }
}

fn print_results<R: BufRead, W: Write>(
    draw: &LotteryDraw,
    winners: &[Winner],
    console: &mut Console<R, W>,
) -> Result<()> {
    let rule = "=".repeat(50);
    console.say(format!("\n{rule}"))?;
    console.say(format!(
        "🏆 FINAL RESULTS - ALL {} WINNERS:",
        winners.len()
    ))?;
    console.say(&rule)?;
    for winner in winners {
        console.say(format!(
            "Rank {:2}: {}",
            winner.rank, winner.registration_no
        ))?;
    }

    let state = draw.state();
    console.say("\n📊 Draw Summary:")?;
    console.say(format!("   Total entries: {}", state.total))?;
    console.say(format!("   Winners selected: {}", state.picked_count))?;
    console.say(format!("   Entries remaining: {}", state.remaining.len()))?;
    console.say(format!("   Status: {}", state.status))?;
    console.say(format!(
        "   Input hash: {}... (for audit)",
        &state.input_hash[..16]
    ))?;
    Ok(())
}

fn show_remaining<R: BufRead, W: Write>(
    draw: &LotteryDraw,
    console: &mut Console<R, W>,
) -> Result<()> {
    // Skipped in non-interactive runs; the export carries the same list.
    if console.assume_yes() {
        return Ok(());
    }
    let Some(true) = console.confirm("\nWould you like to see the remaining entries? (y/N): ")?
    else {
        return Ok(());
    };

    let remaining = draw.state().remaining;
    console.say(format!("\n📋 Remaining {} entries:", remaining.len()))?;
    for (idx, registration_no) in remaining.iter().enumerate() {
        let position = idx + 1;
        console.say(format!("  {position:2}. {registration_no}"))?;
        if position % PAGE_SIZE == 0
            && position < remaining.len()
            && !console.pause("    Press Enter to see next 10 entries...")?
        {
            break;
        }
    }
    Ok(())
}

fn export_results<R: BufRead, W: Write>(
    draw: &LotteryDraw,
    options: &Options,
    console: &mut Console<R, W>,
) -> Result<Option<PathBuf>> {
    let Some(true) = console.confirm("\nWould you like to export results to CSV? (y/N): ")? else {
        return Ok(None);
    };

    let csv = draw.export_csv()?;
    std::fs::write(&options.output, csv)
        .with_context(|| format!("failed to write {}", options.output.display()))?;

    console.say(format!(
        "✅ Results exported to '{}'",
        options.output.display()
    ))?;
    console.say("   CSV contains all entries with winner status and rankings")?;
    info!("Exported draw results to {}", options.output.display());
    Ok(Some(options.output.clone()))
}
