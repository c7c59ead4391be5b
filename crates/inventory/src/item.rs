use serde::{Deserialize, Serialize};

/// Name of the appreciating cheese.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the concert pass.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Aging behavior of an item, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Loses quality every day, twice as fast once expired.
    Ordinary,
    /// Gains quality every day, twice as fast once expired.
    Appreciating,
    /// Never sold, never ages.
    Legendary,
    /// Gains quality faster as the concert nears, worthless afterwards.
    BackstagePass,
}

impl ItemCategory {
    /// Exact-match lookup. Any unknown name ages like an ordinary item.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemCategory::Appreciating,
            SULFURAS => ItemCategory::Legendary,
            BACKSTAGE_PASSES => ItemCategory::BackstagePass,
            _ => ItemCategory::Ordinary,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == ItemCategory::Legendary
    }
}

/// A single stock entry.
///
/// `name` is fixed at construction because it determines the category;
/// `sell_in` and `quality` are owned by the caller and mutated by the updater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    pub sell_in: i32,
    pub quality: i32,
    #[serde(skip_serializing)]
    category: ItemCategory,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item; the category is always re-derived from the name.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}
