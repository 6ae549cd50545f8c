//! Held items that bias inheritance.

use super::stats::Stat;
use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Item held by a parent at the day care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stat")]
pub enum Item {
    /// Nothing that affects breeding.
    #[default]
    None,
    /// Forces inheritance of one stat from the holder.
    Power(Stat),
    /// Biases the child toward the holder's nature.
    Everstone,
}

impl Item {
    /// Items the optimizer tries for each parent, in enumeration order.
    ///
    /// The order is load-bearing: ties resolve to the first combination seen.
    pub const CANDIDATES: [Item; 8] = [
        Item::None,
        Item::Everstone,
        Item::Power(Stat::Hp),
        Item::Power(Stat::Atk),
        Item::Power(Stat::Def),
        Item::Power(Stat::Spa),
        Item::Power(Stat::Spd),
        Item::Power(Stat::Spe),
    ];

    /// Stat forced by this item, if it is a Power item.
    #[must_use]
    pub const fn power_stat(self) -> Option<Stat> {
        match self {
            Item::Power(stat) => Some(stat),
            _ => None,
        }
    }

    /// Whether this item is an Everstone.
    #[must_use]
    pub const fn is_everstone(self) -> bool {
        matches!(self, Item::Everstone)
    }

    /// In-game name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Item::None => "none",
            Item::Everstone => "Everstone",
            Item::Power(Stat::Hp) => "Power Weight",
            Item::Power(Stat::Atk) => "Power Bracer",
            Item::Power(Stat::Def) => "Power Belt",
            Item::Power(Stat::Spa) => "Power Lens",
            Item::Power(Stat::Spd) => "Power Band",
            Item::Power(Stat::Spe) => "Power Anklet",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = DataError;

    /// Accepts in-game names, `none`/empty, or `power:<stat>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Item::None);
        }
        if let Some(stat) = trimmed
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("power:"))
            .and_then(|_| trimmed.get(6..))
        {
            return stat
                .parse::<Stat>()
                .map(Item::Power)
                .map_err(|_| DataError::UnknownItem(s.to_string()));
        }
        Item::CANDIDATES
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DataError::UnknownItem(s.to_string()))
    }
}
