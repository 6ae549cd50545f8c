//! Trait samplers: one child's IVs, nature and ability.
//!
//! Each sampler consumes RNG draws in a fixed order, and callers always run
//! them as IVs, then nature, then ability. Changing either order changes every
//! seeded result downstream.

use super::nature::{Nature, NUM_NATURES};
use super::parent::Parent;
use super::stats::{Stat, StatBlock, MAX_IV, NUM_STATS};
use crate::rng::Rng;

/// Number of stats a child inherits from its parents.
pub const INHERITED_STATS: usize = 3;

/// Which parent a stat came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSide {
    /// The first parent of the pair.
    A,
    /// The second parent of the pair.
    B,
}

/// A sampled IV block plus where each inherited stat came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IvInheritance {
    /// The child's IVs.
    pub ivs: StatBlock,
    /// Source parent per stat; `None` for the randomly rolled ones.
    pub sources: [Option<ParentSide>; NUM_STATS],
}

impl IvInheritance {
    /// Number of stats copied from a parent.
    #[must_use]
    pub fn inherited_count(&self) -> usize {
        self.sources.iter().filter(|s| s.is_some()).count()
    }
}

/// Sample a child's IVs from two parents.
pub fn sample_child_ivs(a: &Parent, b: &Parent, rng: &mut Rng) -> StatBlock {
    sample_child_inheritance(a, b, rng).ivs
}

/// Sample a child's IVs and report which parent each inherited stat came from.
///
/// Six uniform IVs are rolled first. A Power item then forces its stat from the
/// holder; when both parents hold one, a coin decides which item applies and
/// the other is ignored. Remaining slots up to three are filled by picking an
/// uninherited stat uniformly and a parent by coin.
#[allow(clippy::cast_possible_truncation)]
pub fn sample_child_inheritance(a: &Parent, b: &Parent, rng: &mut Rng) -> IvInheritance {
    let mut rolled = [0u8; NUM_STATS];
    for slot in &mut rolled {
        // next_int(32) is always < 32
        *slot = rng.next_int(usize::from(MAX_IV) + 1) as u8;
    }
    let mut ivs = StatBlock::from_array_unchecked(rolled);
    let mut sources: [Option<ParentSide>; NUM_STATS] = [None; NUM_STATS];

    let forced = match (a.item.power_stat(), b.item.power_stat()) {
        (Some(_), Some(_)) => {
            if rng.coin() {
                Some(ParentSide::A)
            } else {
                Some(ParentSide::B)
            }
        }
        (Some(_), None) => Some(ParentSide::A),
        (None, Some(_)) => Some(ParentSide::B),
        (None, None) => None,
    };
    if let Some(side) = forced {
        let holder = pick(side, a, b);
        if let Some(stat) = holder.item.power_stat() {
            ivs = ivs.with(stat, holder.ivs.get(stat));
            sources[stat.index()] = Some(side);
        }
    }

    let mut inherited = sources.iter().filter(|s| s.is_some()).count();
    while inherited < INHERITED_STATS {
        // k-th stat not yet inherited, in canonical order
        let k = rng.next_int(NUM_STATS - inherited);
        let Some(stat) = Stat::ALL
            .into_iter()
            .filter(|stat| sources[stat.index()].is_none())
            .nth(k)
        else {
            break;
        };
        let side = if rng.coin() { ParentSide::A } else { ParentSide::B };
        ivs = ivs.with(stat, pick(side, a, b).ivs.get(stat));
        sources[stat.index()] = Some(side);
        inherited += 1;
    }

    IvInheritance { ivs, sources }
}

/// Sample a child's nature.
///
/// A domestic Everstone holder passes its nature half the time; otherwise,
/// and always for international pairs, the nature is uniform over all 25.
pub fn sample_child_nature(a: &Parent, b: &Parent, rng: &mut Rng) -> Nature {
    let a_ever = a.item.is_everstone();
    let b_ever = b.item.is_everstone();

    if !a.is_international_with(b) && (a_ever || b_ever) {
        let holder = match (a_ever, b_ever) {
            (true, true) => {
                if rng.coin() {
                    a
                } else {
                    b
                }
            }
            (true, false) => a,
            _ => b,
        };
        if rng.coin() {
            return holder.nature;
        }
    }

    Nature::ALL[rng.next_int(NUM_NATURES)]
}

/// Sample a child's ability: a fair choice between the two candidates.
pub fn sample_child_ability<'a>(abilities: (&'a str, &'a str), rng: &mut Rng) -> &'a str {
    if rng.coin() { abilities.0 } else { abilities.1 }
}

fn pick<'p>(side: ParentSide, a: &'p Parent, b: &'p Parent) -> &'p Parent {
    match side {
        ParentSide::A => a,
        ParentSide::B => b,
    }
}
