//! The daily quality updater.

use gildedrose_core::DomainResult;

use crate::item::Item;
use crate::policy::AgingPolicy;
use crate::rules::age_one_day;

/// Holds the stock list and advances it one day per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    policy: AgingPolicy,
}

impl GildedRose {
    /// Wrap `items` with the default aging policy.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            policy: AgingPolicy::default(),
        }
    }

    /// Wrap `items` with a custom policy, rejecting inconsistent ones.
    pub fn with_policy(items: Vec<Item>, policy: AgingPolicy) -> DomainResult<Self> {
        if let Err(err) = policy.validate() {
            tracing::debug!(?policy, error = %err, "rejected aging policy");
            return Err(err);
        }
        Ok(Self { items, policy })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn policy(&self) -> &AgingPolicy {
        &self.policy
    }

    /// Advance every item by exactly one day, in place.
    pub fn update_quality(&mut self) {
        tracing::debug!(items = self.items.len(), "advancing inventory one day");

        for item in &mut self.items {
            let (sell_in_before, quality_before) = (item.sell_in, item.quality);
            age_one_day(item, &self.policy);
            tracing::trace!(
                item = item.name(),
                category = ?item.category(),
                sell_in_before,
                quality_before,
                sell_in = item.sell_in,
                quality = item.quality,
                "item aged"
            );
        }
    }

    /// Call [`update_quality`](Self::update_quality) `days` times.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }
}
