//! Output formatting utilities for CLI.

use super::CliError;
use hgss_breed::{PlanResult, RankedPair};
use std::fmt::Write;

/// Header row of the plan CSV.
pub(super) const PLAN_CSV_HEADER: &str = "plan,step,parentA,parentB,probability";

/// Format a ranking as `speciesA,speciesB,probability` lines.
pub(super) fn format_ranking_csv(ranked: &[RankedPair]) -> String {
    ranked
        .iter()
        .map(|r| format!("{},{},{:.4}", r.a.species, r.b.species, r.probability))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format plans as Markdown sections.
pub(super) fn format_plan_markdown(plans: &[PlanResult]) -> String {
    let mut output = String::new();

    for (idx, plan) in plans.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        let _ = writeln!(
            output,
            "## {} (p={:.4}, eggs={})",
            plan.description, plan.probability, plan.eggs
        );
        for (n, step) in plan.steps.iter().enumerate() {
            let _ = writeln!(
                output,
                "{}. {}/{} p={:.4}",
                n + 1,
                step.parents.0.species,
                step.parents.1.species,
                step.probability
            );
        }
    }

    output.trim_end().to_string()
}

/// Format plans as CSV, one row per step, tagged with the plan description.
pub(super) fn format_plan_csv(plans: &[PlanResult]) -> String {
    let mut output = String::from(PLAN_CSV_HEADER);

    for plan in plans {
        for (n, step) in plan.steps.iter().enumerate() {
            let _ = write!(
                output,
                "\n{},{},{},{},{:.4}",
                plan.description,
                n + 1,
                step.parents.0.species,
                step.parents.1.species,
                step.probability
            );
        }
    }

    output
}

/// Format plans as pretty-printed JSON.
pub(super) fn format_plan_json(plans: &[PlanResult]) -> Result<String, CliError> {
    serde_json::to_string_pretty(plans).map_err(|e| CliError::new(format!("JSON serialization error: {e}")))
}
