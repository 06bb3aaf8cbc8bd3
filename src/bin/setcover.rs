//! CLI entrypoint: generate instances and check candidate covers.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use setcover::{Coverage, element_count, generate, read_state};

/// Random set-cover instances and coverage checks.
#[derive(Debug, Parser)]
#[command(name = "setcover")]
#[command(about = "Generate set-cover instances and check candidate covers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one random instance.
    Generate {
        /// Universe size N; elements are drawn from 0..N.
        #[arg(long, default_value_t = 4)]
        size: usize,
        /// Seed for a reproducible instance (entropy if omitted).
        #[arg(long)]
        seed: Option<u64>,
        /// Print the `{"universe", "subsets"}` JSON object instead of the bare list.
        #[arg(long)]
        json: bool,
    },
    /// Check whether a candidate state covers 0..N.
    Check {
        /// Universe size N.
        #[arg(long)]
        size: usize,
        /// JSON array of integer arrays (stdin if omitted).
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Generate { size, seed, json } => {
            let inst = generate(size, seed).context("failed to generate instance")?;
            info!(size, ?seed, subsets = inst.len(), "generated");
            if json {
                println!("{}", serde_json::to_string(&inst)?);
            } else {
                println!("{inst}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { size, input } => {
            let state = match &input {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    read_state(BufReader::new(file))?
                }
                None => read_state(io::stdin().lock())?,
            };

            let (covered, line) = report(&state, size);
            println!("{line}");
            Ok(if covered { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
    }
}

/// Single pass over `state`: whether it covers `0..size` and the line to print.
fn report(state: &[Vec<i64>], size: usize) -> (bool, String) {
    let total = element_count(state);
    if size > 0 && total < size {
        let line = format!("not covered (state has {total} elements, universe has {size})");
        return (false, line);
    }

    let mut cov = Coverage::new(size);
    match cov.scan(state) {
        Some(pos) => {
            info!(set = pos.set, element = pos.element, "covered");
            (true, "covered".to_string())
        }
        None => {
            let missing: Vec<String> = cov.missing().map(|e| e.to_string()).collect();
            (false, format!("not covered (missing: {})", missing.join(", ")))
        }
    }
}
