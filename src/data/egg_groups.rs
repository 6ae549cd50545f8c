//! Species → egg-group lookup and breeding compatibility.

use crate::error::DataResult;
use std::collections::HashMap;
use std::io::Read;

/// Group that can never breed.
pub const UNDISCOVERED: &str = "Undiscovered";

/// Group that breeds with anything breedable.
pub const DITTO: &str = "Ditto";

/// Built-in Gen IV egg groups for common breeding species.
const BUILTIN_EGG_GROUPS: &[(&str, &[&str])] = &[
    ("bulbasaur", &["Monster", "Grass"]),
    ("ivysaur", &["Monster", "Grass"]),
    ("venusaur", &["Monster", "Grass"]),
    ("charmander", &["Monster", "Dragon"]),
    ("charmeleon", &["Monster", "Dragon"]),
    ("charizard", &["Monster", "Dragon"]),
    ("squirtle", &["Monster", "Water 1"]),
    ("wartortle", &["Monster", "Water 1"]),
    ("blastoise", &["Monster", "Water 1"]),
    ("pichu", &[UNDISCOVERED]),
    ("pikachu", &["Field", "Fairy"]),
    ("raichu", &["Field", "Fairy"]),
    ("clefairy", &["Fairy"]),
    ("jigglypuff", &["Fairy"]),
    ("growlithe", &["Field"]),
    ("arcanine", &["Field"]),
    ("abra", &["Human-Like"]),
    ("kadabra", &["Human-Like"]),
    ("alakazam", &["Human-Like"]),
    ("machop", &["Human-Like"]),
    ("geodude", &["Mineral"]),
    ("gastly", &["Amorphous"]),
    ("haunter", &["Amorphous"]),
    ("gengar", &["Amorphous"]),
    ("scyther", &["Bug"]),
    ("scizor", &["Bug"]),
    ("magikarp", &["Water 2", "Dragon"]),
    ("gyarados", &["Water 2", "Dragon"]),
    ("lapras", &["Monster", "Water 1"]),
    ("ditto", &[DITTO]),
    ("eevee", &["Field"]),
    ("vaporeon", &["Field"]),
    ("jolteon", &["Field"]),
    ("flareon", &["Field"]),
    ("espeon", &["Field"]),
    ("umbreon", &["Field"]),
    ("leafeon", &["Field"]),
    ("glaceon", &["Field"]),
    ("munchlax", &[UNDISCOVERED]),
    ("snorlax", &["Monster"]),
    ("mewtwo", &[UNDISCOVERED]),
    ("mew", &[UNDISCOVERED]),
    ("dratini", &["Water 1", "Dragon"]),
    ("dragonair", &["Water 1", "Dragon"]),
    ("dragonite", &["Water 1", "Dragon"]),
    ("chikorita", &["Monster", "Grass"]),
    ("cyndaquil", &["Field"]),
    ("quilava", &["Field"]),
    ("typhlosion", &["Field"]),
    ("totodile", &["Monster", "Water 1"]),
    ("togepi", &[UNDISCOVERED]),
    ("togetic", &["Flying", "Fairy"]),
    ("heracross", &["Bug"]),
    ("skarmory", &["Flying"]),
    ("larvitar", &["Monster"]),
    ("pupitar", &["Monster"]),
    ("tyranitar", &["Monster"]),
    ("lugia", &[UNDISCOVERED]),
    ("ho-oh", &[UNDISCOVERED]),
    ("bronzor", &["Mineral"]),
    ("gible", &["Monster", "Dragon"]),
    ("gabite", &["Monster", "Dragon"]),
    ("garchomp", &["Monster", "Dragon"]),
    ("riolu", &[UNDISCOVERED]),
    ("lucario", &["Field", "Human-Like"]),
    ("dialga", &[UNDISCOVERED]),
    ("palkia", &[UNDISCOVERED]),
    ("giratina", &[UNDISCOVERED]),
];

/// Case-insensitive species → egg-group table.
#[derive(Debug, Clone, Default)]
pub struct EggGroupTable {
    groups: HashMap<String, Vec<String>>,
}

impl EggGroupTable {
    /// An empty table (every lookup misses).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Gen IV table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (species, groups) in BUILTIN_EGG_GROUPS {
            table.insert(species, groups.iter().map(|g| (*g).to_string()).collect());
        }
        table
    }

    /// Load a `{"species": ["Group", ...]}` JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the JSON has another shape.
    pub fn from_json<R: Read>(reader: R) -> DataResult<Self> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        let mut table = Self::new();
        for (species, groups) in raw {
            table.insert(&species, groups);
        }
        Ok(table)
    }

    /// Insert or replace a species entry.
    pub fn insert(&mut self, species: &str, groups: Vec<String>) {
        self.groups.insert(species.to_lowercase(), groups);
    }

    /// Egg groups for a species; empty when unknown.
    #[must_use]
    pub fn groups(&self, species: &str) -> &[String] {
        self.groups
            .get(&species.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of species in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the table has no species.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Whether two species can breed.
///
/// Undiscovered on either side never breeds; otherwise Ditto on either side
/// always does, even with a species missing from the table; otherwise the
/// species need a shared group, so unknown species only breed with Ditto.
#[must_use]
pub fn is_compatible(a: &str, b: &str, table: &EggGroupTable) -> bool {
    let ga = table.groups(a);
    let gb = table.groups(b);
    let has = |groups: &[String], name: &str| groups.iter().any(|g| g == name);

    if has(ga, UNDISCOVERED) || has(gb, UNDISCOVERED) {
        return false;
    }
    if has(ga, DITTO) || has(gb, DITTO) {
        return true;
    }
    ga.iter().any(|g| gb.contains(g))
}
