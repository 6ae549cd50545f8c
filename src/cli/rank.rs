//! Rank command implementation.

use super::output::format_ranking_csv;
use super::{configure_threads, emit, BarProgress, CliError};
use hgss_breed::ranking::compatible_pairs;
use hgss_breed::roster::{read_roster, read_target};
use hgss_breed::{rank_pairs_with_progress, AbilityTable, EggGroupTable, RankConfig};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the rank command.
#[derive(Debug)]
pub(crate) struct RankArgs {
    pub(crate) parents: PathBuf,
    pub(crate) target: PathBuf,
    pub(crate) seed: u64,
    pub(crate) eggs: usize,
    pub(crate) egg_groups: Option<PathBuf>,
    pub(crate) abilities: Option<PathBuf>,
    pub(crate) threads: Option<usize>,
    pub(crate) progress: bool,
    pub(crate) out: Option<PathBuf>,
}

/// Execute the rank command.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed.
pub(crate) fn execute(args: RankArgs) -> Result<(), CliError> {
    let roster = read_roster(&args.parents)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", args.parents.display())))?;
    let target = read_target(&args.target)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", args.target.display())))?;

    let egg_groups = match &args.egg_groups {
        Some(path) => EggGroupTable::from_json(File::open(path)?)?,
        None => EggGroupTable::builtin(),
    };
    let abilities = match &args.abilities {
        Some(path) => AbilityTable::from_json(File::open(path)?)?,
        None => AbilityTable::builtin(),
    };

    configure_threads(args.threads);

    let config = RankConfig {
        seed: args.seed,
        trials: args.eggs,
    };
    let pair_total = compatible_pairs(&roster, &egg_groups).len() as u64;
    let progress = BarProgress::new(pair_total, args.progress);

    let start = Instant::now();
    let ranked = rank_pairs_with_progress(&roster, &abilities, &target, &egg_groups, &config, &progress);
    progress.finish();
    log::info!(
        "ranked {} pairs in {:.2}s",
        ranked.len(),
        start.elapsed().as_secs_f64()
    );

    emit(args.out.as_deref(), &format_ranking_csv(&ranked))
}
