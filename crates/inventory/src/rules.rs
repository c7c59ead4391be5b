//! Per-category daily aging rules.
//!
//! Each rule is a function of the item's `sell_in` *before* the day's
//! decrement. A day that ends with `sell_in < 0` (i.e. `sell_in <= 0` going in)
//! steps quality twice, clamping after each step.

use crate::item::{Item, ItemCategory};
use crate::policy::AgingPolicy;

/// What one day does to an item's quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Quality is left untouched (not clamped either).
    Unchanged,
    /// Add this amount, then clamp.
    Delta(i32),
    /// Add this amount and clamp, then do it again.
    Twice(i32),
    /// Quality collapses to the floor.
    Reset,
}

impl Adjustment {
    pub fn apply(self, quality: i32, policy: &AgingPolicy) -> i32 {
        match self {
            Adjustment::Unchanged => quality,
            Adjustment::Delta(delta) => policy.clamp(quality.saturating_add(delta)),
            Adjustment::Twice(delta) => {
                let once = policy.clamp(quality.saturating_add(delta));
                policy.clamp(once.saturating_add(delta))
            }
            Adjustment::Reset => policy.clamp(0),
        }
    }
}

/// Quality adjustment for one day, given `sell_in` before it is decremented.
pub fn daily_adjustment(
    category: ItemCategory,
    sell_in_before: i32,
    policy: &AgingPolicy,
) -> Adjustment {
    let expires_today = sell_in_before <= 0;
    match category {
        ItemCategory::Legendary => Adjustment::Unchanged,
        ItemCategory::Ordinary if expires_today => Adjustment::Twice(-1),
        ItemCategory::Ordinary => Adjustment::Delta(-1),
        ItemCategory::Appreciating if expires_today => Adjustment::Twice(1),
        ItemCategory::Appreciating => Adjustment::Delta(1),
        ItemCategory::BackstagePass => {
            if expires_today {
                Adjustment::Reset
            } else if sell_in_before <= policy.backstage_triple_threshold {
                Adjustment::Delta(3)
            } else if sell_in_before <= policy.backstage_double_threshold {
                Adjustment::Delta(2)
            } else {
                Adjustment::Delta(1)
            }
        }
    }
}

/// Advance a single item by one day.
pub(crate) fn age_one_day(item: &mut Item, policy: &AgingPolicy) {
    let category = item.category();
    if category.is_legendary() {
        return;
    }

    let sell_in_before = item.sell_in;
    item.sell_in = sell_in_before.saturating_sub(1);
    item.quality = daily_adjustment(category, sell_in_before, policy).apply(item.quality, policy);
}
