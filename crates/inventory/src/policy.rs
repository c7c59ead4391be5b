//! Tunable bounds and thresholds for the aging rules.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

/// Lowest quality any non-legendary item may ever hold.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality any non-legendary item may ever hold.
pub const MAX_QUALITY: i32 = 50;

/// Constants used by the daily aging rules.
///
/// Defaults reproduce the classic catalog behavior. A policy may narrow the
/// quality range but never widen it past `[MIN_QUALITY, MAX_QUALITY]`.
/// Missing fields in a deserialized policy fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgingPolicy {
    /// Lowest quality a non-legendary item can reach.
    pub quality_floor: i32,
    /// Highest quality a non-legendary item can reach.
    pub quality_ceiling: i32,
    /// Passes gain +2 per day once `sell_in` is at or below this.
    pub backstage_double_threshold: i32,
    /// Passes gain +3 per day once `sell_in` is at or below this.
    pub backstage_triple_threshold: i32,
}

impl Default for AgingPolicy {
    fn default() -> Self {
        Self {
            quality_floor: MIN_QUALITY,
            quality_ceiling: MAX_QUALITY,
            backstage_double_threshold: 10,
            backstage_triple_threshold: 5,
        }
    }
}

impl ValueObject for AgingPolicy {}

impl AgingPolicy {
    pub fn validate(&self) -> DomainResult<()> {
        if self.quality_floor < MIN_QUALITY || self.quality_ceiling > MAX_QUALITY {
            return Err(DomainError::invariant(format!(
                "quality range [{}, {}] must stay within [{MIN_QUALITY}, {MAX_QUALITY}]",
                self.quality_floor, self.quality_ceiling
            )));
        }
        if self.quality_floor > self.quality_ceiling {
            return Err(DomainError::validation(format!(
                "quality_floor ({}) must not exceed quality_ceiling ({})",
                self.quality_floor, self.quality_ceiling
            )));
        }
        if self.backstage_triple_threshold < 0 {
            return Err(DomainError::validation(
                "backstage_triple_threshold cannot be negative",
            ));
        }
        if self.backstage_triple_threshold >= self.backstage_double_threshold {
            return Err(DomainError::validation(format!(
                "backstage_triple_threshold ({}) must be below backstage_double_threshold ({})",
                self.backstage_triple_threshold, self.backstage_double_threshold
            )));
        }
        Ok(())
    }

    /// Bring `quality` into `[quality_floor, quality_ceiling]`.
    ///
    /// Written with `max`/`min` so an unvalidated policy never panics.
    pub(crate) fn clamp(&self, quality: i32) -> i32 {
        quality.max(self.quality_floor).min(self.quality_ceiling)
    }
}
