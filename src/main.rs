//! hgss-breed CLI - rank breeding pairs and plan breeding chains.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// hgss-breed - A deterministic Gen IV breeding planner
#[derive(Parser, Debug)]
#[command(name = "hgss-breed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank every compatible roster pair by success probability
    Rank {
        /// Roster CSV file
        #[arg(long, required = true)]
        parents: PathBuf,

        /// Target JSON file
        #[arg(long, required = true)]
        target: PathBuf,

        /// Random seed (default: 1)
        #[arg(short, long, default_value = "1")]
        seed: u64,

        /// Number of simulations (each item combination runs a tenth of these)
        #[arg(short, long, default_value = "1000")]
        eggs: usize,

        /// Egg-group JSON table (default: built-in table)
        #[arg(long)]
        egg_groups: Option<PathBuf>,

        /// Ability JSON table (default: built-in table)
        #[arg(long)]
        abilities: Option<PathBuf>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Plan direct and one-generation breeding chains
    Plan {
        /// Roster CSV file
        #[arg(long, required = true)]
        parents: PathBuf,

        /// Target JSON file
        #[arg(long, required = true)]
        target: PathBuf,

        /// Random seed (default: 1)
        #[arg(short, long, default_value = "1")]
        seed: u64,

        /// Simulations per step
        #[arg(short, long, default_value = "200")]
        eggs: usize,

        /// Beam width for one-generation plans
        #[arg(short, long, default_value = "3")]
        beam: usize,

        /// Output format: md, json, or csv
        #[arg(short, long, default_value = "md")]
        format: cli::PlanFormat,

        /// Ability JSON table (default: none, parents' own abilities are used)
        #[arg(long)]
        abilities: Option<PathBuf>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Import parents from a save file or PK4 dump
    Ingest {
        /// Save or dump file
        #[arg(long, required = true)]
        save: PathBuf,

        /// Comma-separated species filter
        #[arg(long)]
        species: Option<String>,

        /// CSV file to append to
        #[arg(short, long, default_value = "parents.csv")]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Rank {
            parents,
            target,
            seed,
            eggs,
            egg_groups,
            abilities,
            threads,
            progress,
            out,
        } => cli::rank::execute(cli::rank::RankArgs {
            parents,
            target,
            seed,
            eggs,
            egg_groups,
            abilities,
            threads,
            progress,
            out,
        }),

        Commands::Plan {
            parents,
            target,
            seed,
            eggs,
            beam,
            format,
            abilities,
            threads,
            progress,
            out,
        } => cli::plan::execute(cli::plan::PlanArgs {
            parents,
            target,
            seed,
            eggs,
            beam,
            format,
            abilities,
            threads,
            progress,
            out,
        }),

        Commands::Ingest { save, species, out } => cli::ingest::execute(&save, species.as_deref(), &out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
