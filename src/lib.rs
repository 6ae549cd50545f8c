// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! hgss-breed: a deterministic Monte-Carlo planner for Gen IV breeding.
//!
//! Given a roster of candidate parents and a desired offspring profile, this
//! crate:
//! - Ranks every compatible parent pair by its probability of producing a
//!   matching egg, searching all held-item assignments
//! - Plans two-generation chains (parent → intermediate child → target) with a
//!   beam search and reports them next to the best direct pairing
//!
//! Every stochastic decision draws from a seeded xorshift64 stream, so equal
//! inputs always give byte-identical outputs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Roster ranker │ Chain planner     │
//! ├─────────────────────────────────────┤
//! │         Item optimizer              │
//! ├─────────────────────────────────────┤
//! │   Estimator → Simulator → Samplers  │
//! ├─────────────────────────────────────┤
//! │         xorshift64 RNG              │
//! └─────────────────────────────────────┘
//! ```
//!
//! Egg groups and ability pairs are injected lookup data ([`data`]); roster
//! files and save dumps are handled by [`roster`] and [`ingest`].

pub mod breeding;
pub mod data;
pub mod error;
pub mod ingest;
pub mod planner;
pub mod progress;
pub mod ranking;
pub mod rng;
pub mod roster;

pub use error::{DataError, DataResult};

// Re-export the main entry points at crate root for convenience
pub use breeding::{Item, Nature, Parent, Stat, StatBlock, Target};
pub use data::{AbilityTable, EggGroupTable};
pub use planner::{plan_breeding_chain, plan_breeding_chain_with, Eggs, PlanConfig, PlanResult, PlanStep};
pub use progress::Progress;
pub use ranking::{rank_pairs_from_roster, rank_pairs_with_progress, RankConfig, RankedPair};
pub use rng::Rng;
