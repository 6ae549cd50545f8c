//! Injected lookup data: egg groups and ability pairs per species.
//!
//! Both tables are keyed case-insensitively. The built-in tables cover a
//! handful of Gen IV species; callers can load complete tables from JSON.

mod abilities;
mod egg_groups;

pub use abilities::{AbilityTable, PLACEHOLDER_ABILITIES};
pub use egg_groups::{is_compatible, EggGroupTable, DITTO, UNDISCOVERED};
