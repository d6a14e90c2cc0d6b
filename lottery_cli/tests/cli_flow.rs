//! Scripted runs of the interactive draw.

use lottery_cli::app::{ModeChoice, Options, Outcome, run};
use lottery_cli::console::Console;
use std::io::Cursor;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}", uuid::Uuid::new_v4(), name))
}

fn run_script(options: &Options, script: &str, assume_yes: bool) -> (Outcome, String) {
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        assume_yes,
    );
    let outcome = run(options, &mut console).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (outcome, output)
}

#[test]
fn test_demo_draw_non_interactive() {
    let output_path = temp_path("results.csv");
    let options = Options {
        output: output_path.clone(),
        ..Options::default()
    };

    let (outcome, output) = run_script(&options, "", true);

    let Outcome::Completed { winners, exported } = outcome else {
        panic!("draw should complete");
    };
    assert_eq!(winners.len(), 15);
    assert_eq!(exported, Some(output_path.clone()));
    assert!(output.contains("Generated 50 entries"));
    assert!(output.contains("Using random mode"));
    assert!(output.contains("FINAL RESULTS - ALL 15 WINNERS"));
    assert!(output.contains("Entries remaining: 35"));

    let csv = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(csv.lines().count(), 51);
    assert_eq!(csv.matches(",winner,").count(), 15);
    std::fs::remove_file(output_path).unwrap();
}

#[test]
fn test_file_draw_with_prompts() {
    let input = temp_path("entries.csv");
    std::fs::write(&input, "2\nA-1\nB-2\nC-3\n").unwrap();

    let options = Options {
        file: Some(input.clone()),
        ..Options::default()
    };
    // mode 2, shuffle, two winners, show remaining, decline export
    let (outcome, output) = run_script(&options, "2\n\n\n\ny\nn\n", false);

    let Outcome::Completed { winners, exported } = outcome else {
        panic!("draw should complete");
    };
    assert_eq!(winners.len(), 2);
    assert_eq!(winners[0].rank, 1);
    assert_eq!(winners[1].rank, 2);
    assert_eq!(exported, None);
    assert!(output.contains("Loaded 3 entries"));
    assert!(output.contains("All: A-1, B-2, C-3"));
    assert!(output.contains("Using reproducible mode"));
    assert!(output.contains("Remaining 1 entries"));
    std::fs::remove_file(input).unwrap();
}

#[test]
fn test_reproducible_runs_pick_the_same_winners() {
    let input = temp_path("entries.csv");
    let body: String = std::iter::once("5".to_string())
        .chain((1..=40).map(|i| format!("REG-{i:03}")))
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&input, body).unwrap();

    let options = Options {
        file: Some(input.clone()),
        mode: Some(ModeChoice::Seeded("county-fair".to_string())),
        output: temp_path("unused.csv"),
    };

    let pick = || {
        let (outcome, _) = run_script(&options, "\n\n\n\n\n\nn\nn\n", false);
        match outcome {
            Outcome::Completed { winners, .. } => winners
                .into_iter()
                .map(|w| w.registration_no)
                .collect::<Vec<_>>(),
            Outcome::Cancelled => panic!("draw should complete"),
        }
    };
    assert_eq!(pick(), pick());
    std::fs::remove_file(input).unwrap();
}

#[test]
fn test_end_of_input_cancels() {
    let options = Options {
        mode: Some(ModeChoice::Random),
        ..Options::default()
    };

    // shuffle, first winner, then input ends
    let (outcome, output) = run_script(&options, "\n\n", false);

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(output.contains("Winner #1"));
    assert!(output.contains("Draw cancelled by user"));
    assert!(!output.contains("FINAL RESULTS"));
}

#[test]
fn test_missing_file_is_an_error() {
    let options = Options {
        file: Some(temp_path("missing.csv")),
        ..Options::default()
    };
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new(), true);

    let err = run(&options, &mut console).unwrap_err();
    assert!(format!("{err:#}").contains("entry file not found"));

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Line 1: number_of_winners"));
}

#[test]
fn test_remaining_entries_are_paged() {
    let input = temp_path("entries.csv");
    let body: String = std::iter::once("1".to_string())
        .chain((1..=25).map(|i| format!("E{i:02}")))
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&input, body).unwrap();

    let options = Options {
        file: Some(input.clone()),
        mode: Some(ModeChoice::Random),
        ..Options::default()
    };
    // shuffle, one winner, show remaining, two page breaks, decline export
    let (_, output) = run_script(&options, "\n\ny\n\n\nn\n", false);

    assert_eq!(output.matches("Press Enter to see next 10 entries").count(), 2);
    assert!(output.contains("24. "));
    std::fs::remove_file(input).unwrap();
}
