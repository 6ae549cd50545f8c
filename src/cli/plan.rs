//! Plan command implementation.

use super::output::{format_plan_csv, format_plan_json, format_plan_markdown};
use super::{configure_threads, emit, BarProgress, CliError, PlanFormat};
use hgss_breed::planner::pair_count;
use hgss_breed::roster::{read_roster, read_target};
use hgss_breed::{plan_breeding_chain_with, AbilityTable, PlanConfig};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the plan command.
#[derive(Debug)]
pub(crate) struct PlanArgs {
    pub(crate) parents: PathBuf,
    pub(crate) target: PathBuf,
    pub(crate) seed: u64,
    pub(crate) eggs: usize,
    pub(crate) beam: usize,
    pub(crate) format: PlanFormat,
    pub(crate) abilities: Option<PathBuf>,
    pub(crate) threads: Option<usize>,
    pub(crate) progress: bool,
    pub(crate) out: Option<PathBuf>,
}

/// Execute the plan command.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or the output cannot be
/// written.
pub(crate) fn execute(args: PlanArgs) -> Result<(), CliError> {
    let roster = read_roster(&args.parents)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", args.parents.display())))?;
    let target = read_target(&args.target)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", args.target.display())))?;
    let abilities = match &args.abilities {
        Some(path) => AbilityTable::from_json(File::open(path)?)?,
        None => AbilityTable::new(),
    };

    configure_threads(args.threads);

    let config = PlanConfig {
        seed: args.seed,
        trials: args.eggs,
        beam_width: args.beam,
    };
    // Direct and one-generation passes each visit every pair once
    let progress = BarProgress::new(2 * pair_count(roster.len()) as u64, args.progress);

    let start = Instant::now();
    let plans = plan_breeding_chain_with(&roster, &target, &abilities, &config, &progress);
    progress.finish();
    log::info!(
        "built {} plans from {} parents in {:.2}s",
        plans.len(),
        roster.len(),
        start.elapsed().as_secs_f64()
    );

    let text = match args.format {
        PlanFormat::Md => format_plan_markdown(&plans),
        PlanFormat::Csv => format_plan_csv(&plans),
        PlanFormat::Json => format_plan_json(&plans)?,
    };
    emit(args.out.as_deref(), &text)
}
