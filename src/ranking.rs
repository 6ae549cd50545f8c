//! Roster ranking: score every compatible pair by its best item assignment.
//!
//! Pairs are scored in parallel with rayon. Every pair uses the same seed and
//! results are collected in pair order before a stable sort, so the output is
//! identical to a sequential run.

use crate::breeding::{best_items_for_pair, Item, Parent, Target};
use crate::data::{is_compatible, AbilityTable, EggGroupTable};
use crate::progress::Progress;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Divisor applied to the caller's trial count when ranking.
pub const RANK_TRIAL_DIVISOR: usize = 10;

/// Configuration for roster ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Base seed shared by every pair.
    pub seed: u64,
    /// Nominal trial count; each item combination runs `trials / 10` eggs.
    pub trials: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            trials: 1000,
        }
    }
}

impl RankConfig {
    /// Eggs simulated per item combination.
    #[must_use]
    pub fn trials_per_combination(&self) -> usize {
        self.trials / RANK_TRIAL_DIVISOR
    }
}

/// One scored pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPair {
    /// First parent (earlier in the roster).
    pub a: Parent,
    /// Second parent.
    pub b: Parent,
    /// Best estimated probability over all item combinations.
    pub probability: f64,
    /// Items achieving that probability.
    pub items: (Item, Item),
}

/// Index pairs `(i, j)`, `i < j`, whose species can breed.
#[must_use]
pub fn compatible_pairs(roster: &[Parent], egg_groups: &EggGroupTable) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..roster.len() {
        for j in (i + 1)..roster.len() {
            if is_compatible(&roster[i].species, &roster[j].species, egg_groups) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Rank all compatible pairs of a roster, best first.
///
/// Abilities are looked up by the first parent's species. Ties keep roster
/// order.
#[must_use]
pub fn rank_pairs_from_roster(
    roster: &[Parent],
    abilities: &AbilityTable,
    target: &Target,
    egg_groups: &EggGroupTable,
    config: &RankConfig,
) -> Vec<RankedPair> {
    rank_pairs_with_progress(roster, abilities, target, egg_groups, config, &())
}

/// [`rank_pairs_from_roster`] with a progress observer.
#[must_use]
pub fn rank_pairs_with_progress(
    roster: &[Parent],
    abilities: &AbilityTable,
    target: &Target,
    egg_groups: &EggGroupTable,
    config: &RankConfig,
    progress: &dyn Progress,
) -> Vec<RankedPair> {
    let pairs = compatible_pairs(roster, egg_groups);
    let trials = config.trials_per_combination();
    log::info!(
        "ranking {} compatible pairs of {} roster entries ({trials} eggs per item combination)",
        pairs.len(),
        roster.len()
    );

    let mut ranked: Vec<RankedPair> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let (a, b) = (&roster[i], &roster[j]);
            let pair_abilities = abilities.abilities_for(&a.species);
            let best = best_items_for_pair(a, b, pair_abilities, target, config.seed, trials);
            log::debug!(
                "pair ({i}, {j}) {}/{}: p={:.4} items={}/{}",
                a.species,
                b.species,
                best.probability,
                best.items.0,
                best.items.1
            );
            progress.advance();
            RankedPair {
                a: a.clone(),
                b: b.clone(),
                probability: best.probability,
                items: best.items,
            }
        })
        .collect();

    ranked.sort_by(|x, y| y.probability.total_cmp(&x.probability));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::{Nature, Stat, StatBlock};

    fn parent(species: &str, values: [u8; 6]) -> Parent {
        Parent::new(species, StatBlock::new(values).unwrap(), Nature::Hardy, "Run Away")
    }

    #[test]
    fn test_compatible_pairs_filters() {
        let table = EggGroupTable::builtin();
        let roster = vec![
            parent("eevee", [0; 6]),
            parent("mewtwo", [0; 6]),
            parent("arcanine", [0; 6]),
            parent("ditto", [0; 6]),
        ];
        let pairs = compatible_pairs(&roster, &table);
        assert_eq!(pairs, vec![(0, 2), (0, 3), (2, 3)]);
    }

    #[test]
    fn test_ditto_ranks_with_unlisted_species() {
        let table = EggGroupTable::builtin();
        let roster = vec![parent("porygon", [0; 6]), parent("ditto", [0; 6])];
        let ranked = rank_pairs_from_roster(
            &roster,
            &AbilityTable::new(),
            &Target::default(),
            &table,
            &RankConfig::default(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].a.species, "porygon");
        assert_eq!(ranked[0].b.species, "ditto");
    }

    #[test]
    fn test_ranking_sorted_descending() {
        let table = EggGroupTable::builtin();
        let roster = vec![
            parent("eevee", [0; 6]),
            parent("eevee", [31, 0, 0, 0, 0, 0]),
            parent("arcanine", [31, 31, 0, 0, 0, 0]),
        ];
        let target = Target::default().with_iv(Stat::Hp, 31).with_iv(Stat::Atk, 31);
        let config = RankConfig {
            seed: 1,
            trials: 500,
        };

        let ranked = rank_pairs_from_roster(&roster, &AbilityTable::new(), &target, &table, &config);

        assert_eq!(ranked.len(), 3);
        for window in ranked.windows(2) {
            assert!(window[0].probability >= window[1].probability);
        }
        // Only the arcanine pairs can produce atk 31 without luck
        assert_eq!(ranked[0].b.species, "arcanine");
    }

    #[test]
    fn test_small_trials_floor_to_zero() {
        let config = RankConfig { seed: 1, trials: 9 };
        assert_eq!(config.trials_per_combination(), 0);

        let table = EggGroupTable::builtin();
        let roster = vec![parent("eevee", [0; 6]), parent("eevee", [0; 6])];
        let ranked =
            rank_pairs_from_roster(&roster, &AbilityTable::new(), &Target::default(), &table, &config);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].probability.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let table = EggGroupTable::builtin();
        let roster = vec![
            parent("eevee", [0; 6]),
            parent("growlithe", [0; 6]),
            parent("arcanine", [0; 6]),
        ];
        let ranked = rank_pairs_from_roster(
            &roster,
            &AbilityTable::new(),
            &Target::default(),
            &table,
            &RankConfig { seed: 3, trials: 20 },
        );
        let species: Vec<(&str, &str)> = ranked
            .iter()
            .map(|r| (r.a.species.as_str(), r.b.species.as_str()))
            .collect();
        assert_eq!(
            species,
            vec![("eevee", "growlithe"), ("eevee", "arcanine"), ("growlithe", "arcanine")]
        );
    }
}
