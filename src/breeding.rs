//! Inheritance model and Monte-Carlo estimation.
//!
//! This module contains the per-egg mechanics: the data model (stats,
//! natures, items, parents, targets), the three trait samplers, the
//! single-trial simulator, the probability estimator and the held-item
//! optimizer built on it.
//!
//! # Layering
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Item optimizer (64 combos)     │
//! ├─────────────────────────────────────┤
//! │    Probability estimator (N eggs)   │
//! ├─────────────────────────────────────┤
//! │      Single-trial simulator         │
//! ├─────────────────────────────────────┤
//! │   IV │ Nature │ Ability samplers    │
//! ├─────────────────────────────────────┤
//! │         xorshift64 RNG              │
//! └─────────────────────────────────────┘
//! ```

mod item;
mod nature;
mod optimize;
mod parent;
mod sampler;
mod simulate;
mod stats;

pub use item::Item;
pub use nature::{Nature, NUM_NATURES};
pub use optimize::{best_items_for_pair, ItemChoice};
pub use parent::{Parent, Target};
pub use sampler::{
    sample_child_ability, sample_child_inheritance, sample_child_ivs, sample_child_nature,
    IvInheritance, ParentSide, INHERITED_STATS,
};
pub use simulate::{
    estimate_probability, sample_child, simulate_once, BreedingOutcome, ChildTraits,
};
pub use stats::{Stat, StatBlock, MAX_IV, NUM_STATS};
