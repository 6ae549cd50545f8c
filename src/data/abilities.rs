//! Species → ability-pair lookup.

use crate::error::DataResult;
use std::collections::HashMap;
use std::io::Read;

/// Pair returned for species missing from the table.
pub const PLACEHOLDER_ABILITIES: (&str, &str) = ("Ability1", "Ability2");

/// Built-in Gen IV ability slots; single-ability species repeat the ability.
const BUILTIN_ABILITIES: &[(&str, &str, &str)] = &[
    ("bulbasaur", "Overgrow", "Overgrow"),
    ("charmander", "Blaze", "Blaze"),
    ("charizard", "Blaze", "Blaze"),
    ("squirtle", "Torrent", "Torrent"),
    ("pikachu", "Static", "Static"),
    ("growlithe", "Intimidate", "Flash Fire"),
    ("arcanine", "Intimidate", "Flash Fire"),
    ("abra", "Synchronize", "Inner Focus"),
    ("gastly", "Levitate", "Levitate"),
    ("scyther", "Swarm", "Technician"),
    ("magikarp", "Swift Swim", "Swift Swim"),
    ("lapras", "Water Absorb", "Shell Armor"),
    ("ditto", "Limber", "Limber"),
    ("eevee", "Run Away", "Adaptability"),
    ("snorlax", "Immunity", "Thick Fat"),
    ("dratini", "Shed Skin", "Shed Skin"),
    ("chikorita", "Overgrow", "Overgrow"),
    ("cyndaquil", "Blaze", "Blaze"),
    ("totodile", "Torrent", "Torrent"),
    ("togepi", "Hustle", "Serene Grace"),
    ("heracross", "Swarm", "Guts"),
    ("skarmory", "Keen Eye", "Sturdy"),
    ("larvitar", "Guts", "Guts"),
    ("gible", "Sand Veil", "Sand Veil"),
    ("riolu", "Steadfast", "Inner Focus"),
    ("lucario", "Steadfast", "Inner Focus"),
];

/// Case-insensitive species → (ability, ability) table.
#[derive(Debug, Clone, Default)]
pub struct AbilityTable {
    abilities: HashMap<String, (String, String)>,
}

impl AbilityTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Gen IV table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (species, first, second) in BUILTIN_ABILITIES {
            table.insert(species, (*first).to_string(), (*second).to_string());
        }
        table
    }

    /// Load a `{"species": ["Ability", "Ability"]}` JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the JSON has another shape.
    pub fn from_json<R: Read>(reader: R) -> DataResult<Self> {
        let raw: HashMap<String, (String, String)> = serde_json::from_reader(reader)?;
        let mut table = Self::new();
        for (species, (first, second)) in raw {
            table.insert(&species, first, second);
        }
        Ok(table)
    }

    /// Insert or replace a species entry.
    pub fn insert(&mut self, species: &str, first: String, second: String) {
        self.abilities.insert(species.to_lowercase(), (first, second));
    }

    /// Ability pair for a species, if known.
    #[must_use]
    pub fn get(&self, species: &str) -> Option<(&str, &str)> {
        self.abilities
            .get(&species.to_lowercase())
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Ability pair for a species, or [`PLACEHOLDER_ABILITIES`].
    #[must_use]
    pub fn abilities_for(&self, species: &str) -> (&str, &str) {
        self.get(species).unwrap_or(PLACEHOLDER_ABILITIES)
    }

    /// Whether the table has no species.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = AbilityTable::builtin();
        assert_eq!(table.abilities_for("Eevee"), ("Run Away", "Adaptability"));
        assert_eq!(table.abilities_for("PIKACHU"), ("Static", "Static"));
    }

    #[test]
    fn test_missing_species_uses_placeholder() {
        let table = AbilityTable::new();
        assert!(table.get("eevee").is_none());
        assert_eq!(table.abilities_for("eevee"), PLACEHOLDER_ABILITIES);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"Growlithe": ["Intimidate", "Flash Fire"]}"#;
        let table = AbilityTable::from_json(json.as_bytes()).unwrap();
        assert_eq!(table.abilities_for("growlithe"), ("Intimidate", "Flash Fire"));
        assert!(AbilityTable::from_json(r#"{"x": "y"}"#.as_bytes()).is_err());
    }
}
