//! `wraith`: solve a ghost-clearing puzzle and print the optimal emission.
//!
//! Usage: `wraith [--puzzle FILE] [--heuristic max-remaining|zero]
//! [--wildcard-candidates] [--max-expansions N] [--json] [--log FILTER]`
//!
//! Without `--puzzle` the built-in four-ghost puzzle is solved. Logs go to
//! stderr; the report goes to stdout.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wraith_harness::puzzle::PuzzleSpec;
use wraith_harness::runner::{run_puzzle, HeuristicKind, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "wraith")]
#[command(about = "Find the cheapest token emission that clears every ghost")]
struct Args {
    /// Puzzle JSON file. Defaults to the built-in puzzle.
    #[arg(long)]
    puzzle: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = HeuristicKind::MaxRemaining)]
    heuristic: HeuristicKind,

    /// Also branch on the wildcard when no ghost expects it.
    #[arg(long)]
    wildcard_candidates: bool,

    /// Stop after this many expansions.
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let spec = match &args.puzzle {
        Some(path) => PuzzleSpec::load(path)?,
        None => PuzzleSpec::standard(),
    };
    let options = RunOptions {
        heuristic: args.heuristic,
        wildcard_candidates: args.wildcard_candidates,
        max_expansions: args.max_expansions,
    };

    let report = run_puzzle(&spec, &options)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
