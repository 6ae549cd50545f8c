//! Breeding-chain planner: direct pairing plus a one-generation beam search.
//!
//! Two strategies always run and are both reported:
//!
//! - **Direct**: the single roster pair with the best item-optimised
//!   probability.
//! - **One generation**: for each roster pair, breed `trials` eggs, keep the
//!   best-scoring child, then pair that child with every roster member. The
//!   top `beam_width` chains survive.
//!
//! The output is the direct plan (if the roster has a pair) followed by the
//! beam, never re-sorted together.
//!
//! # Seeds
//!
//! The direct plan estimates every pair with `seed`. The intermediate child
//! of pair `(i, j)` is bred on `seed + i*131 + j`, and every
//! second-generation item search runs on `seed + 1`.

// Trial counts become probabilities
#![allow(clippy::cast_precision_loss)]

use crate::breeding::{best_items_for_pair, sample_child, ChildTraits, Item, ItemChoice, Parent, Target};
use crate::data::AbilityTable;
use crate::progress::Progress;
use crate::rng::{pair_seed, Rng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Description tag of the direct plan.
pub const DIRECT_DESCRIPTION: &str = "Direct breeding";

/// Description tag of one-generation plans.
pub const ONE_GENERATION_DESCRIPTION: &str = "1-generation plan";

/// Configuration for chain planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Base seed.
    pub seed: u64,
    /// Eggs per estimate and per intermediate-child search.
    pub trials: usize,
    /// Number of one-generation plans kept.
    pub beam_width: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            trials: 200,
            beam_width: 3,
        }
    }
}

/// Expected number of eggs until success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eggs {
    /// `1 / probability` for a positive probability.
    Finite(f64),
    /// The probability was zero.
    Unbounded,
}

impl Eggs {
    /// Expected eggs for a success probability.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.0 {
            Self::Finite(1.0 / probability)
        } else {
            Self::Unbounded
        }
    }

    /// The finite value, if any.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(eggs) => Some(eggs),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for Eggs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(eggs) => write!(f, "{eggs:.1}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl Serialize for Eggs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(eggs) => serializer.serialize_f64(*eggs),
            Self::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

/// One breeding event in a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStep {
    /// The two parents bred.
    pub parents: (Parent, Parent),
    /// Items they hold.
    pub items: (Item, Item),
    /// Probability attributed to this step.
    pub probability: f64,
    /// Intermediate child produced by this step, if it feeds a later step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Parent>,
}

/// A complete plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    /// Steps in breeding order.
    pub steps: Vec<PlanStep>,
    /// Aggregate probability.
    pub probability: f64,
    /// Expected eggs for the aggregate probability.
    pub eggs: Eggs,
    /// Human-readable tag.
    pub description: String,
}

impl PlanResult {
    fn new(steps: Vec<PlanStep>, probability: f64, description: &str) -> Self {
        Self {
            steps,
            probability,
            eggs: Eggs::from_probability(probability),
            description: description.to_string(),
        }
    }
}

/// Number of unordered pairs in a roster of `n`.
#[must_use]
pub const fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Plan with no ability table.
#[must_use]
pub fn plan_breeding_chain(roster: &[Parent], target: &Target, config: &PlanConfig) -> Vec<PlanResult> {
    plan_breeding_chain_with(roster, target, &AbilityTable::new(), config, &())
}

/// Plan with an ability table and a progress observer.
///
/// Progress advances twice per roster pair: once in the direct search and once
/// in the one-generation search.
#[must_use]
pub fn plan_breeding_chain_with(
    roster: &[Parent],
    target: &Target,
    abilities: &AbilityTable,
    config: &PlanConfig,
    progress: &dyn Progress,
) -> Vec<PlanResult> {
    let pairs = all_pairs(roster.len());
    log::info!(
        "planning over {} pairs ({} eggs per estimate, beam width {})",
        pairs.len(),
        config.trials,
        config.beam_width
    );

    let mut plans = Vec::with_capacity(config.beam_width + 1);
    if let Some(direct) = direct_plan(roster, &pairs, target, abilities, config, progress) {
        plans.push(direct);
    }
    plans.extend(one_generation_plans(roster, &pairs, target, abilities, config, progress));
    plans
}

fn all_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect()
}

/// Best single pair by item-optimised probability; first pair wins ties.
fn direct_plan(
    roster: &[Parent],
    pairs: &[(usize, usize)],
    target: &Target,
    abilities: &AbilityTable,
    config: &PlanConfig,
    progress: &dyn Progress,
) -> Option<PlanResult> {
    let scored: Vec<((usize, usize), ItemChoice)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let (a, b) = (&roster[i], &roster[j]);
            let pair_abilities = abilities
                .get(&a.species)
                .unwrap_or((a.ability.as_str(), b.ability.as_str()));
            let best = best_items_for_pair(a, b, pair_abilities, target, config.seed, config.trials);
            progress.advance();
            ((i, j), best)
        })
        .collect();

    let mut best: Option<&((usize, usize), ItemChoice)> = None;
    for entry in &scored {
        if best.is_none_or(|b| entry.1.probability > b.1.probability) {
            best = Some(entry);
        }
    }

    best.map(|&((i, j), choice)| {
        log::debug!("direct plan: pair ({i}, {j}) p={:.4}", choice.probability);
        let step = PlanStep {
            parents: (roster[i].clone(), roster[j].clone()),
            items: choice.items,
            probability: choice.probability,
            child: None,
        };
        PlanResult::new(vec![step], choice.probability, DIRECT_DESCRIPTION)
    })
}

/// Beam of two-step plans, best aggregate probability first.
fn one_generation_plans(
    roster: &[Parent],
    pairs: &[(usize, usize)],
    target: &Target,
    abilities: &AbilityTable,
    config: &PlanConfig,
    progress: &dyn Progress,
) -> Vec<PlanResult> {
    let mut candidates: Vec<PlanResult> = pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            let plan = chain_through_pair(roster, i, j, target, abilities, config);
            progress.advance();
            plan
        })
        .collect();

    candidates.sort_by(|x, y| y.probability.total_cmp(&x.probability));
    candidates.truncate(config.beam_width);
    candidates
}

/// Best child of one roster pair and its best follow-up pairing.
///
/// The first step's probability is the fraction of eggs that reached the top
/// observed score. It approximates the chance of breeding a child as good as
/// the retained one, not that exact genotype.
fn chain_through_pair(
    roster: &[Parent],
    i: usize,
    j: usize,
    target: &Target,
    abilities: &AbilityTable,
    config: &PlanConfig,
) -> Option<PlanResult> {
    let (p1, p2) = (&roster[i], &roster[j]);
    let child_abilities = abilities
        .get(&p1.species)
        .unwrap_or((p1.ability.as_str(), p2.ability.as_str()));

    let mut rng = Rng::new(pair_seed(config.seed, i, j));
    let mut best: Option<(u32, ChildTraits<'_>)> = None;
    let mut best_count = 0usize;
    for _ in 0..config.trials {
        let child = sample_child(p1, p2, child_abilities, &mut rng);
        let score = target.score(&child.ivs, child.nature, child.ability);
        match best {
            Some((top, _)) if score < top => {}
            Some((top, _)) if score == top => best_count += 1,
            _ => {
                best = Some((score, child));
                best_count = 1;
            }
        }
    }
    let (top_score, child) = best?;
    let child_prob = best_count as f64 / config.trials as f64;
    let child = child.into_parent(&p1.species);

    let follow_seed = config.seed.wrapping_add(1);
    let mut follow: Option<(usize, ItemChoice)> = None;
    for (k, partner) in roster.iter().enumerate() {
        let partner_abilities = abilities
            .get(&partner.species)
            .unwrap_or((partner.ability.as_str(), partner.ability.as_str()));
        let choice =
            best_items_for_pair(&child, partner, partner_abilities, target, follow_seed, config.trials);
        if follow.is_none_or(|(_, f)| choice.probability > f.probability) {
            follow = Some((k, choice));
        }
    }
    let (k, final_choice) = follow?;

    let probability = child_prob * final_choice.probability;
    log::debug!(
        "chain via ({i}, {j}) -> partner {k}: score={top_score} child_p={child_prob:.4} final_p={:.4}",
        final_choice.probability
    );

    let steps = vec![
        PlanStep {
            parents: (p1.clone(), p2.clone()),
            items: (Item::None, Item::None),
            probability: child_prob,
            child: Some(child.clone()),
        },
        PlanStep {
            parents: (child, roster[k].clone()),
            items: final_choice.items,
            probability: final_choice.probability,
            child: None,
        },
    ];
    Some(PlanResult::new(steps, probability, ONE_GENERATION_DESCRIPTION))
}
