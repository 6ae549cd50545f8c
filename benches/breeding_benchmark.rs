//! Benchmarks for the estimator, item optimizer and planner.
//!
//! The item optimizer runs 64 estimates per pair, so it dominates both the
//! ranker and the planner.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hgss_breed::breeding::{best_items_for_pair, estimate_probability};
use hgss_breed::{
    plan_breeding_chain, rank_pairs_from_roster, AbilityTable, EggGroupTable, Nature, Parent, PlanConfig,
    RankConfig, Stat, StatBlock, Target,
};

fn parent(species: &str, ivs: [u8; 6], nature: Nature) -> Parent {
    Parent::new(species, StatBlock::new(ivs).expect("valid IVs"), nature, "Run Away")
}

fn roster() -> Vec<Parent> {
    vec![
        parent("Eevee", [31, 4, 12, 9, 20, 31], Nature::Timid),
        parent("Ditto", [31, 31, 0, 0, 0, 31], Nature::Timid),
        parent("Growlithe", [0, 31, 5, 5, 5, 12], Nature::Adamant),
        parent("Arcanine", [20, 31, 31, 0, 10, 31], Nature::Jolly),
        parent("Pikachu", [31, 0, 0, 31, 0, 31], Nature::Timid),
        parent("Lucario", [10, 31, 0, 31, 0, 25], Nature::Hasty),
    ]
}

fn target() -> Target {
    Target::default()
        .with_iv(Stat::Hp, 31)
        .with_iv(Stat::Spe, 31)
        .with_nature(Nature::Timid)
}

fn bench_estimate(c: &mut Criterion) {
    let roster = roster();
    let target = target();

    c.bench_function("estimate_1000_eggs", |b| {
        b.iter(|| {
            let p = estimate_probability(
                black_box(&roster[0]),
                black_box(&roster[1]),
                ("Run Away", "Adaptability"),
                black_box(&target),
                black_box(42),
                1000,
            );
            black_box(p)
        });
    });
}

fn bench_optimizer(c: &mut Criterion) {
    let roster = roster();
    let target = target();

    c.bench_function("best_items_100_eggs", |b| {
        b.iter(|| {
            let choice = best_items_for_pair(
                black_box(&roster[0]),
                black_box(&roster[1]),
                ("Run Away", "Adaptability"),
                black_box(&target),
                black_box(42),
                100,
            );
            black_box(choice)
        });
    });
}

fn bench_rank(c: &mut Criterion) {
    let roster = roster();
    let target = target();
    let abilities = AbilityTable::builtin();
    let egg_groups = EggGroupTable::builtin();
    let config = RankConfig::default();

    c.bench_function("rank_6_parents", |b| {
        b.iter(|| {
            let ranked = rank_pairs_from_roster(black_box(&roster), &abilities, &target, &egg_groups, &config);
            black_box(ranked)
        });
    });
}

fn bench_plan(c: &mut Criterion) {
    let roster = roster();
    let target = target();
    // Short plan: 50 eggs per step
    let config = PlanConfig {
        trials: 50,
        ..PlanConfig::default()
    };

    c.bench_function("plan_6_parents_50_eggs", |b| {
        b.iter(|| {
            let plans = plan_breeding_chain(black_box(&roster), black_box(&target), &config);
            black_box(plans)
        });
    });
}

criterion_group!(benches, bench_estimate, bench_optimizer, bench_rank, bench_plan);
criterion_main!(benches);
