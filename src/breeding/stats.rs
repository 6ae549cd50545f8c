//! Stats and IV blocks.

use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest legal IV value.
pub const MAX_IV: u8 = 31;

/// Number of stats carried by every individual.
pub const NUM_STATS: usize = 6;

/// One of the six stats, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Hit points.
    Hp,
    /// Attack.
    Atk,
    /// Defense.
    Def,
    /// Special Attack.
    Spa,
    /// Special Defense.
    Spd,
    /// Speed.
    Spe,
}

impl Stat {
    /// All stats in canonical order.
    pub const ALL: [Stat; NUM_STATS] = [
        Stat::Hp,
        Stat::Atk,
        Stat::Def,
        Stat::Spa,
        Stat::Spd,
        Stat::Spe,
    ];

    /// Position of this stat in [`Stat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name (`hp`, `atk`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stat {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.name() == lower)
            .ok_or_else(|| DataError::UnknownStat(s.to_string()))
    }
}

/// A full set of six IVs, each in `[0, 31]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStatBlock")]
pub struct StatBlock {
    hp: u8,
    atk: u8,
    def: u8,
    spa: u8,
    spd: u8,
    spe: u8,
}

impl StatBlock {
    /// Build a block from values in canonical stat order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::StatOutOfRange`] if any value exceeds 31.
    pub fn new(values: [u8; NUM_STATS]) -> DataResult<Self> {
        if let Some(&bad) = values.iter().find(|&&v| v > MAX_IV) {
            return Err(DataError::StatOutOfRange {
                value: u32::from(bad),
            });
        }
        Ok(Self::from_array_unchecked(values))
    }

    /// Build a block without range checks; callers guarantee `[0, 31]`.
    pub(crate) const fn from_array_unchecked(values: [u8; NUM_STATS]) -> Self {
        let [hp, atk, def, spa, spd, spe] = values;
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Value of one stat.
    #[must_use]
    pub const fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// A new block equal to this one with `stat` replaced by `value`.
    ///
    /// `value` is clamped to 31.
    #[must_use]
    pub fn with(self, stat: Stat, value: u8) -> Self {
        let mut values = self.to_array();
        values[stat.index()] = value.min(MAX_IV);
        Self::from_array_unchecked(values)
    }

    /// Values in canonical stat order.
    #[must_use]
    pub const fn to_array(&self) -> [u8; NUM_STATS] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }
}

/// Unvalidated wire form of a [`StatBlock`].
#[derive(Deserialize)]
struct RawStatBlock {
    hp: u32,
    atk: u32,
    def: u32,
    spa: u32,
    spd: u32,
    spe: u32,
}

impl TryFrom<RawStatBlock> for StatBlock {
    type Error = DataError;

    fn try_from(raw: RawStatBlock) -> Result<Self, Self::Error> {
        let raw_values = [raw.hp, raw.atk, raw.def, raw.spa, raw.spd, raw.spe];
        let mut values = [0u8; NUM_STATS];
        for (slot, value) in values.iter_mut().zip(raw_values) {
            *slot = u8::try_from(value)
                .ok()
                .filter(|v| *v <= MAX_IV)
                .ok_or(DataError::StatOutOfRange { value })?;
        }
        Ok(Self::from_array_unchecked(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_order_matches_index() {
        for (i, stat) in Stat::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn test_stat_parse() {
        assert_eq!("SpA".parse::<Stat>().unwrap(), Stat::Spa);
        assert_eq!(" hp ".parse::<Stat>().unwrap(), Stat::Hp);
        assert!("speed".parse::<Stat>().is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(StatBlock::new([31, 0, 0, 0, 0, 0]).is_ok());
        assert!(matches!(
            StatBlock::new([0, 32, 0, 0, 0, 0]),
            Err(DataError::StatOutOfRange { value: 32 })
        ));
    }

    #[test]
    fn test_with_overrides_single_field() {
        let block = StatBlock::new([1, 2, 3, 4, 5, 6]).unwrap();
        let changed = block.with(Stat::Spd, 31);

        assert_eq!(changed.to_array(), [1, 2, 3, 4, 31, 6]);
        // Original untouched
        assert_eq!(block.get(Stat::Spd), 5);
    }

    #[test]
    fn test_serde_validates_range() {
        let ok: StatBlock =
            serde_json::from_str(r#"{"hp":1,"atk":2,"def":3,"spa":4,"spd":5,"spe":6}"#).unwrap();
        assert_eq!(ok.get(Stat::Spe), 6);

        let bad = serde_json::from_str::<StatBlock>(
            r#"{"hp":1,"atk":2,"def":3,"spa":4,"spd":5,"spe":300}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_uses_stat_names() {
        let block = StatBlock::new([1, 2, 3, 4, 5, 6]).unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"hp":1,"atk":2,"def":3,"spa":4,"spd":5,"spe":6}"#);
    }
}
