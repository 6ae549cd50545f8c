//! Save-file ingestion.
//!
//! This understands only the simplified JSON fixtures used for testing, not
//! the games' binary formats: a `.pk4` dump is a JSON array of creatures and a
//! `.sav` is an object with optional `party`, `boxes` (array of arrays) and
//! `daycare` arrays. Anything unparseable degrades to an empty result.

use crate::breeding::{Nature, Parent, StatBlock};
use crate::roster::DEFAULT_LANGUAGE;
use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// One creature as stored in a fixture.
#[derive(Debug, Deserialize)]
struct SaveEntry {
    species: String,
    ivs: StatBlock,
    nature: Nature,
    ability: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    pid: Option<Value>,
    #[serde(default)]
    otid: Option<Value>,
    #[serde(default)]
    sid: Option<Value>,
    #[serde(default)]
    nickname: Option<String>,
}

impl SaveEntry {
    /// Identity digest used to drop duplicate creatures.
    fn fingerprint(&self) -> Vec<u8> {
        let ivs = self
            .ivs
            .to_array()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let key = [
            self.species.clone(),
            value_text(self.pid.as_ref()),
            ivs,
            self.nature.to_string(),
            self.ability.clone(),
            value_text(self.otid.as_ref()),
            value_text(self.sid.as_ref()),
            self.nickname.clone().unwrap_or_default(),
        ]
        .join("|");

        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hasher.finalize().to_vec()
    }

    fn into_parent(self) -> Parent {
        let language = self
            .language
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        Parent::new(self.species, self.ivs, self.nature, self.ability).with_language(language)
    }
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Collect the raw creature values from either fixture shape.
fn creature_values(raw: Value) -> Vec<Value> {
    match raw {
        Value::Array(mons) => mons,
        Value::Object(mut save) => {
            let mut take = |key: &str| match save.remove(key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            let party = take("party");
            let boxes = take("boxes");
            let daycare = take("daycare");

            let mut mons = party;
            for slot in boxes {
                match slot {
                    Value::Array(inner) => mons.extend(inner),
                    other => mons.push(other),
                }
            }
            mons.extend(daycare);
            mons
        }
        _ => Vec::new(),
    }
}

/// Parse a save or dump and return its unique parents, in file order.
///
/// `species_filter` is matched case-insensitively; an empty filter keeps
/// everything. Malformed entries are skipped; malformed documents yield an
/// empty vector.
#[must_use]
pub fn ingest_save(bytes: &[u8], species_filter: &[String]) -> Vec<Parent> {
    let raw: Value = match serde_json::from_slice(bytes) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("unsupported save format: {e}");
            return Vec::new();
        }
    };

    let filter: Vec<String> = species_filter.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();
    let mut parents = Vec::new();

    for (idx, value) in creature_values(raw).into_iter().enumerate() {
        let entry: SaveEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping save entry {idx}: {e}");
                continue;
            }
        };
        if !filter.is_empty() && !filter.contains(&entry.species.to_lowercase()) {
            continue;
        }
        if seen.insert(entry.fingerprint()) {
            parents.push(entry.into_parent());
        } else {
            log::debug!("dropping duplicate {} at entry {idx}", entry.species);
        }
    }

    log::info!("ingested {} unique parents", parents.len());
    parents
}

#[cfg(test)]
mod tests {
    use super::*;

    const PK4: &str = r#"[
        {"species": "Eevee", "pid": 1, "otid": 100, "sid": 200,
         "ivs": {"hp": 31, "atk": 0, "def": 0, "spa": 0, "spd": 0, "spe": 31},
         "nature": "Timid", "ability": "Run Away", "language": "en"},
        {"species": "Eevee", "pid": 1, "otid": 100, "sid": 200,
         "ivs": {"hp": 31, "atk": 0, "def": 0, "spa": 0, "spd": 0, "spe": 31},
         "nature": "Timid", "ability": "Run Away", "language": "en"},
        {"species": "Arcanine", "pid": 2, "otid": 100, "sid": 200,
         "ivs": {"hp": 10, "atk": 31, "def": 10, "spa": 0, "spd": 0, "spe": 20},
         "nature": "Adamant", "ability": "Intimidate"}
    ]"#;

    fn names(parents: &[Parent]) -> Vec<&str> {
        parents.iter().map(|p| p.species.as_str()).collect()
    }

    #[test]
    fn test_parses_and_dedupes() {
        let parents = ingest_save(PK4.as_bytes(), &[]);
        assert_eq!(names(&parents), ["Eevee", "Arcanine"]);
        assert_eq!(parents[1].language.as_deref(), Some(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_filters_by_species() {
        let parents = ingest_save(PK4.as_bytes(), &["arcanine".to_string()]);
        assert_eq!(names(&parents), ["Arcanine"]);
    }

    #[test]
    fn test_save_object_shape() {
        let sav = r#"{
            "party": [{"species": "Ditto", "ivs": {"hp": 1, "atk": 1, "def": 1, "spa": 1, "spd": 1, "spe": 1},
                       "nature": "Bold", "ability": "Limber", "nickname": "Blob"}],
            "boxes": [[{"species": "Gible", "ivs": {"hp": 2, "atk": 2, "def": 2, "spa": 2, "spd": 2, "spe": 2},
                        "nature": "Jolly", "ability": "Sand Veil"}], []],
            "daycare": [{"species": "Ditto", "ivs": {"hp": 1, "atk": 1, "def": 1, "spa": 1, "spd": 1, "spe": 1},
                         "nature": "Bold", "ability": "Limber", "nickname": "Other"}]
        }"#;
        let parents = ingest_save(sav.as_bytes(), &[]);
        // Different nicknames make the two Dittos distinct
        assert_eq!(names(&parents), ["Ditto", "Gible", "Ditto"]);
    }

    #[test]
    fn test_garbage_degrades_to_empty() {
        assert!(ingest_save(b"\x00\x01not json", &[]).is_empty());
        assert!(ingest_save(b"42", &[]).is_empty());
        assert!(ingest_save(b"{}", &[]).is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let dump = r#"[
            {"species": "Eevee", "ivs": {"hp": 99, "atk": 0, "def": 0, "spa": 0, "spd": 0, "spe": 0},
             "nature": "Timid", "ability": "Run Away"},
            {"species": "Eevee", "nature": "Timid"},
            {"species": "Pikachu", "ivs": {"hp": 1, "atk": 1, "def": 1, "spa": 1, "spd": 1, "spe": 1},
             "nature": "Hasty", "ability": "Static"}
        ]"#;
        let parents = ingest_save(dump.as_bytes(), &[]);
        assert_eq!(names(&parents), ["Pikachu"]);
    }
}
