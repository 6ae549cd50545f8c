#![no_main]

use arbitrary::Arbitrary;
use hgss_breed::breeding::{sample_child, sample_child_inheritance, ParentSide, INHERITED_STATS};
use hgss_breed::{Item, Nature, Parent, Rng, Stat, StatBlock, Target};
use libfuzzer_sys::fuzz_target;

/// Structured input for one sampled egg.
#[derive(Arbitrary, Debug)]
struct EggInput {
    /// Raw IVs of parent A (masked to 0..=31).
    ivs_a: [u8; 6],
    /// Raw IVs of parent B (masked to 0..=31).
    ivs_b: [u8; 6],
    /// Nature indices.
    natures: (u8, u8),
    /// Item indices into the candidate list.
    items: (u8, u8),
    /// Whether the parents come from different games.
    international: bool,
    /// RNG seed.
    seed: u64,
}

fn parent(ivs: [u8; 6], nature: u8, item: u8, language: &str) -> Parent {
    let ivs = StatBlock::new(ivs.map(|v| v & 31)).expect("masked IVs are in range");
    let nature = Nature::ALL[usize::from(nature) % Nature::ALL.len()];
    let item = Item::CANDIDATES[usize::from(item) % Item::CANDIDATES.len()];
    Parent::new("Eevee", ivs, nature, "Run Away")
        .with_language(language)
        .with_item(item)
}

fuzz_target!(|input: EggInput| {
    let a = parent(input.ivs_a, input.natures.0, input.items.0, "en");
    let b_lang = if input.international { "jp" } else { "en" };
    let b = parent(input.ivs_b, input.natures.1, input.items.1, b_lang);

    let mut rng = Rng::new(input.seed);
    let inheritance = sample_child_inheritance(&a, &b, &mut rng);
    assert_eq!(inheritance.inherited_count(), INHERITED_STATS);
    for stat in Stat::ALL {
        let expected = match inheritance.sources[stat.index()] {
            Some(ParentSide::A) => a.ivs.get(stat),
            Some(ParentSide::B) => b.ivs.get(stat),
            None => continue,
        };
        assert_eq!(inheritance.ivs.get(stat), expected);
    }

    let child = sample_child(&a, &b, ("Run Away", "Adaptability"), &mut rng);
    assert!(child.ability == "Run Away" || child.ability == "Adaptability");
    assert_eq!(Target::default().score(&child.ivs, child.nature, child.ability), 0);
});
