//! Interactive lottery draw console.
//!
//! Loads an entry file (or a demo list), then reveals winners one at a time
//! as the operator presses Enter.

use anyhow::{Result, bail};
use ctrlc::set_handler;
use lottery_cli::{
    app::{self, DEFAULT_OUTPUT, ModeChoice, Options},
    console::Console,
};
use lottery_engine::session::DEFAULT_REPRODUCIBLE_SEED;
use pico_args::Arguments;
use std::io;
use std::path::PathBuf;

const HELP: &str = "\
Run an interactive lottery draw

USAGE:
  lottery_cli [OPTIONS] [FILE]

ARGS:
  FILE                  Entry file: winner count on line 1, one registration
                        number per following line [default: 50 demo entries]

OPTIONS:
  --seed SEED           Reproducible draw keyed by SEED
  --output PATH         CSV export path  [default: lottery_results.csv]

FLAGS:
  --random              Random draw, different results each time
  --reproducible        Reproducible draw with the default seed
  -y, --yes             Answer every prompt with yes (non-interactive)
  -h, --help            Print help information

ENVIRONMENT:
  RUST_LOG              Log filter [default: error]
";

struct Args {
    options: Options,
    assume_yes: bool,
}

fn parse_args(mut pargs: Arguments) -> Result<Args> {
    let random = pargs.contains("--random");
    let reproducible = pargs.contains("--reproducible");
    let seed: Option<String> = pargs.opt_value_from_str("--seed")?;
    let output: Option<PathBuf> = pargs.opt_value_from_str("--output")?;
    let assume_yes = pargs.contains(["-y", "--yes"]);
    let file: Option<PathBuf> = pargs.opt_free_from_str()?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}");
    }

    let mode = match (random, reproducible, seed) {
        (true, true, _) => bail!("--random and --reproducible are mutually exclusive"),
        (true, false, Some(_)) => bail!("--seed cannot be combined with --random"),
        (true, false, None) => Some(ModeChoice::Random),
        (false, _, Some(seed)) => Some(ModeChoice::Seeded(seed)),
        (false, true, None) => Some(ModeChoice::Seeded(DEFAULT_REPRODUCIBLE_SEED.to_string())),
        (false, false, None) => None,
    };

    Ok(Args {
        options: Options {
            file,
            mode,
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        },
        assume_yes,
    })
}

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    env_logger::builder().format_target(false).init();

    let args = parse_args(pargs)?;

    // Catching signals for exit.
    set_handler(|| {
        println!("\n\n⚠️ Draw cancelled by user");
        std::process::exit(130);
    })?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), args.assume_yes);
    app::run(&args.options, &mut console)?;
    Ok(())
}
