//! Breeding candidates and the desired offspring profile.

use super::item::Item;
use super::nature::Nature;
use super::stats::{Stat, StatBlock, MAX_IV};
use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A candidate parent (or a materialised intermediate child).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    /// Species name as supplied by the roster.
    pub species: String,
    /// Individual values.
    pub ivs: StatBlock,
    /// Nature.
    pub nature: Nature,
    /// Ability name.
    pub ability: String,
    /// Held item.
    #[serde(default)]
    pub item: Item,
    /// Game language code; parents with different codes are "international".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Parent {
    /// Create a parent holding no item.
    #[must_use]
    pub fn new(
        species: impl Into<String>,
        ivs: StatBlock,
        nature: Nature,
        ability: impl Into<String>,
    ) -> Self {
        Self {
            species: species.into(),
            ivs,
            nature,
            ability: ability.into(),
            item: Item::None,
            language: None,
        }
    }

    /// Builder-style language setter.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// A copy of this parent holding `item` instead.
    #[must_use]
    pub fn with_item(&self, item: Item) -> Self {
        Self {
            item,
            ..self.clone()
        }
    }

    /// Whether this pair defeats the Everstone (both languages known and different).
    #[must_use]
    pub fn is_international_with(&self, other: &Parent) -> bool {
        match (&self.language, &other.language) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }
}

/// The offspring profile being bred for.
///
/// Missing constraints are always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Minimum IV per constrained stat.
    #[serde(default)]
    pub ivs: BTreeMap<Stat, u8>,
    /// Required nature, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<Nature>,
    /// Required ability, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
}

impl Target {
    /// Builder-style IV threshold.
    #[must_use]
    pub fn with_iv(mut self, stat: Stat, min: u8) -> Self {
        self.ivs.insert(stat, min);
        self
    }

    /// Builder-style nature requirement.
    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = Some(nature);
        self
    }

    /// Builder-style ability requirement.
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    /// Reject thresholds no IV can reach.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::StatOutOfRange`] for a threshold above 31.
    pub fn validate(&self) -> DataResult<()> {
        match self.ivs.values().find(|&&v| v > MAX_IV) {
            Some(&v) => Err(DataError::StatOutOfRange {
                value: u32::from(v),
            }),
            None => Ok(()),
        }
    }

    /// Whether every IV threshold is met.
    #[must_use]
    pub fn ivs_met_by(&self, ivs: &StatBlock) -> bool {
        self.ivs.iter().all(|(&stat, &min)| ivs.get(stat) >= min)
    }

    /// Whether a child with these traits meets the whole target.
    #[must_use]
    pub fn is_met_by(&self, ivs: &StatBlock, nature: Nature, ability: &str) -> bool {
        self.ivs_met_by(ivs)
            && self.nature.is_none_or(|n| n == nature)
            && self.ability.as_deref().is_none_or(|a| a == ability)
    }

    /// Point score: one per satisfied threshold, plus nature and ability matches.
    #[must_use]
    pub fn score(&self, ivs: &StatBlock, nature: Nature, ability: &str) -> u32 {
        let mut score = 0;
        for (&stat, &min) in &self.ivs {
            if ivs.get(stat) >= min {
                score += 1;
            }
        }
        if self.nature == Some(nature) {
            score += 1;
        }
        if self.ability.as_deref() == Some(ability) {
            score += 1;
        }
        score
    }
}
