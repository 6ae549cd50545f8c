//! Single-trial simulation and Monte-Carlo probability estimation.

// Trial counts become probabilities
#![allow(clippy::cast_precision_loss)]

use super::nature::Nature;
use super::parent::{Parent, Target};
use super::sampler::{sample_child_ability, sample_child_ivs, sample_child_nature};
use super::stats::StatBlock;
use crate::rng::Rng;

/// Traits of one sampled child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildTraits<'a> {
    /// Sampled IVs.
    pub ivs: StatBlock,
    /// Sampled nature.
    pub nature: Nature,
    /// Sampled ability (borrowed from the ability pair).
    pub ability: &'a str,
}

impl ChildTraits<'_> {
    /// Materialise this child as a parent of the given species.
    #[must_use]
    pub fn into_parent(self, species: &str) -> Parent {
        Parent::new(species, self.ivs, self.nature, self.ability)
    }
}

/// Result of one simulated egg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedingOutcome<'a> {
    /// Whether the child meets the target.
    pub success: bool,
    /// The sampled child.
    pub child: ChildTraits<'a>,
}

/// Sample one child without checking it against anything.
pub fn sample_child<'a>(
    a: &Parent,
    b: &Parent,
    abilities: (&'a str, &'a str),
    rng: &mut Rng,
) -> ChildTraits<'a> {
    let ivs = sample_child_ivs(a, b, rng);
    let nature = sample_child_nature(a, b, rng);
    let ability = sample_child_ability(abilities, rng);
    ChildTraits {
        ivs,
        nature,
        ability,
    }
}

/// Simulate one egg and check it against `target`.
///
/// Success needs every threshold plus exact nature and ability matches when
/// those are specified.
pub fn simulate_once<'a>(
    a: &Parent,
    b: &Parent,
    abilities: (&'a str, &'a str),
    target: &Target,
    rng: &mut Rng,
) -> BreedingOutcome<'a> {
    let child = sample_child(a, b, abilities, rng);
    let success = target.is_met_by(&child.ivs, child.nature, child.ability);
    BreedingOutcome { success, child }
}

/// Estimate the success probability from `trials` eggs on one RNG stream.
///
/// Zero trials gives 0.0.
#[must_use]
pub fn estimate_probability(
    a: &Parent,
    b: &Parent,
    abilities: (&str, &str),
    target: &Target,
    seed: u64,
    trials: usize,
) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    let mut rng = Rng::new(seed);
    let successes = (0..trials)
        .filter(|_| simulate_once(a, b, abilities, target, &mut rng).success)
        .count();
    successes as f64 / trials as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::item::Item;
    use crate::breeding::stats::Stat;

    fn parent(values: [u8; 6], nature: Nature) -> Parent {
        Parent::new("eevee", StatBlock::new(values).unwrap(), nature, "Run Away")
    }

    #[test]
    fn test_empty_target_is_certain() {
        let a = parent([0; 6], Nature::Hardy);
        let b = parent([31; 6], Nature::Bold);
        let p = estimate_probability(&a, &b, ("x", "y"), &Target::default(), 9, 50);
        assert!((p - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_trials_is_zero() {
        let a = parent([0; 6], Nature::Hardy);
        let p = estimate_probability(&a, &a, ("x", "y"), &Target::default(), 1, 0);
        assert!(p.abs() < f64::EPSILON);
    }

    #[test]
    fn test_impossible_ability_is_zero() {
        let a = parent([0; 6], Nature::Hardy);
        let target = Target::default().with_ability("Adaptability");
        let p = estimate_probability(&a, &a, ("Run Away", "Run Away"), &target, 3, 200);
        assert!(p.abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_is_reproducible() {
        let a = parent([31, 0, 0, 0, 0, 0], Nature::Timid);
        let b = parent([0, 31, 0, 0, 0, 0], Nature::Jolly);
        let target = Target::default().with_iv(Stat::Hp, 25).with_iv(Stat::Atk, 25);
        let p1 = estimate_probability(&a, &b, ("a", "b"), &target, 42, 300);
        let p2 = estimate_probability(&a, &b, ("a", "b"), &target, 42, 300);
        assert_eq!(p1.to_bits(), p2.to_bits());
    }

    #[test]
    fn test_power_item_raises_probability() {
        let a = parent([31, 0, 0, 0, 0, 0], Nature::Timid);
        let b = parent([0; 6], Nature::Jolly);
        let target = Target::default().with_iv(Stat::Hp, 31);

        let plain = estimate_probability(&a, &b, ("a", "b"), &target, 5, 1000);
        let held = a.with_item(Item::Power(Stat::Hp));
        let forced = estimate_probability(&held, &b, ("a", "b"), &target, 5, 1000);

        assert!((forced - 1.0).abs() < f64::EPSILON);
        assert!(plain < 0.5, "plain={plain}");
    }

    #[test]
    fn test_simulate_once_reports_child() {
        let a = parent([1, 2, 3, 4, 5, 6], Nature::Timid);
        let mut rng = Rng::new(77);
        let outcome = simulate_once(&a, &a, ("Static", "Static"), &Target::default(), &mut rng);
        assert!(outcome.success);
        assert_eq!(outcome.child.ability, "Static");
        let materialised = outcome.child.into_parent("pikachu");
        assert_eq!(materialised.species, "pikachu");
        assert_eq!(materialised.item, Item::None);
    }
}
