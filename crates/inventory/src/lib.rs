//! Inventory aging domain module.
//!
//! Advances the sell-by countdown and quality of a fixed catalog of items one
//! simulated day at a time. Pure, deterministic domain logic (no IO, no storage).

pub mod gilded_rose;
pub mod item;
pub mod policy;
pub mod rules;

pub use gilded_rose::GildedRose;
pub use item::{Item, ItemCategory};
pub use policy::AgingPolicy;
pub use rules::{daily_adjustment, Adjustment};
