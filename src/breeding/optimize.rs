//! Held-item search for a fixed parent pair.

use super::item::Item;
use super::parent::{Parent, Target};
use super::simulate::estimate_probability;
use serde::{Deserialize, Serialize};

/// Best item assignment found for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemChoice {
    /// Estimated success probability with these items.
    pub probability: f64,
    /// Items for the first and second parent.
    pub items: (Item, Item),
}

impl Default for ItemChoice {
    fn default() -> Self {
        Self {
            probability: 0.0,
            items: (Item::None, Item::None),
        }
    }
}

/// Try all 64 item combinations from [`Item::CANDIDATES`] and keep the best.
///
/// Every combination is estimated with the same `seed`, so they are compared
/// on a common random stream. Only a strictly higher probability replaces the
/// incumbent, which starts at `(None, None)` with probability 0; the first
/// combination in enumeration order wins ties.
#[must_use]
pub fn best_items_for_pair(
    a: &Parent,
    b: &Parent,
    abilities: (&str, &str),
    target: &Target,
    seed: u64,
    trials: usize,
) -> ItemChoice {
    let mut best = ItemChoice::default();
    for item_a in Item::CANDIDATES {
        let held_a = a.with_item(item_a);
        for item_b in Item::CANDIDATES {
            let held_b = b.with_item(item_b);
            let probability = estimate_probability(&held_a, &held_b, abilities, target, seed, trials);
            if probability > best.probability {
                best = ItemChoice {
                    probability,
                    items: (item_a, item_b),
                };
            }
        }
    }
    best
}
