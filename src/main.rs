use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use shift_roster::engine::{ScheduleOutcome, ScheduleSummary};
use shift_roster::report::Report;
use shift_roster::roster::{self, RosterFile};

#[derive(Parser, Debug)]
#[command(name = "shift-roster")]
#[command(version)]
#[command(about = "Assign workers to a weekly shift grid from their preferences")]
struct Args {
    /// Roster file (JSON). Runs the built-in demo roster when omitted.
    #[arg(long, short)]
    roster: Option<PathBuf>,

    /// Seed for the repair pass, overriding the roster's config
    #[arg(long)]
    seed: Option<u64>,

    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    outcome: &'a ScheduleOutcome,
    summary: ScheduleSummary,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut roster = match &args.roster {
        Some(path) => RosterFile::load(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => roster::demo(),
    };
    if let Some(seed) = args.seed {
        roster.config.seed = Some(seed);
    }

    let outcome = roster.into_engine()?.assign_shifts();

    if args.json {
        let output = JsonOutput {
            summary: outcome.summary(),
            outcome: &outcome,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", Report::new(&outcome));
    }

    Ok(())
}
