use std::{collections::BTreeMap, fmt};

use super::ids::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Shop description, may contain inline markup such as `<stats>`.
    pub description: String,
    pub plaintext: String,
    /// `None` when the upstream record carries no gold block.
    pub gold: Option<Gold>,
    pub image: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub stats: BTreeMap<String, f64>,
    /// Components this item is built from, `None` when not declared.
    pub from: Option<Vec<ItemId>>,
    /// Items this one builds into, `None` when not declared.
    pub into: Option<Vec<ItemId>>,
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gold {
    pub base: u32,
    /// `None` when the gold block omits a total.
    pub total: Option<u32>,
    pub sell: u32,
    pub purchasable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemCategory {
    Starter,
    Basic,
    Epic,
    Legendary,
    Mythic,
    Boots,
    Consumable,
    Trinket,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 8] = [
        ItemCategory::Starter,
        ItemCategory::Basic,
        ItemCategory::Epic,
        ItemCategory::Legendary,
        ItemCategory::Mythic,
        ItemCategory::Boots,
        ItemCategory::Consumable,
        ItemCategory::Trinket,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ItemCategory::Starter => "Starter",
            ItemCategory::Basic => "Basic",
            ItemCategory::Epic => "Epic",
            ItemCategory::Legendary => "Legendary",
            ItemCategory::Mythic => "Mythic",
            ItemCategory::Boots => "Boots",
            ItemCategory::Consumable => "Consumable",
            ItemCategory::Trinket => "Trinket",
        };
        write!(f, "{}", name)
    }
}
