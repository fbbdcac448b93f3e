use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use restock_cli::{build_report, Cli, PlanningInput};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    restock_observability::init(cli.log_filter());

    let input = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            PlanningInput::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        _ => PlanningInput::from_reader(io::stdin().lock()).context("failed to load stdin")?,
    };

    let report = build_report(&input, cli.policy(), cli.window_end(Utc::now()));

    let mut out = io::stdout().lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    writeln!(out)?;

    Ok(())
}
