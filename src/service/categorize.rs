use std::collections::{BTreeMap, HashMap};

use crate::model::item::{Item, ItemCategory};

/// Sorts the shop into categories.
///
/// Items without gold data are skipped. Items sharing a name are collapsed to
/// the most expensive one, keeping the position of the first occurrence.
/// Every category is present in the result, possibly empty.
pub fn categorize_items(items: &[Item]) -> BTreeMap<ItemCategory, Vec<Item>> {
    let mut categories: BTreeMap<ItemCategory, Vec<Item>> =
        ItemCategory::ALL.into_iter().map(|c| (c, Vec::new())).collect();

    for item in unique_by_name(items) {
        categories.entry(categorize(item)).or_default().push(item.clone());
    }

    categories
}

/// Tag checks win over the description check, which wins over the
/// component heuristic.
pub fn categorize(item: &Item) -> ItemCategory {
    let has_tag = |tag: &str| item.tags.iter().any(|t| t == tag);
    let total = item.gold.and_then(|g| g.total);

    if has_tag("Boots") {
        ItemCategory::Boots
    } else if has_tag("Consumable") {
        ItemCategory::Consumable
    } else if has_tag("Trinket") {
        ItemCategory::Trinket
    } else if item.description.contains("Mythic") {
        ItemCategory::Mythic
    } else {
        match (&item.from, &item.into) {
            (None, Some(_)) => ItemCategory::Basic,
            (Some(_), None) => ItemCategory::Legendary,
            (Some(_), Some(_)) => ItemCategory::Epic,
            (None, None) if matches!(total, Some(t) if t < 500) => ItemCategory::Starter,
            (None, None) => ItemCategory::Basic,
        }
    }
}

fn unique_by_name(items: &[Item]) -> Vec<&Item> {
    let mut unique: Vec<&Item> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let Some(gold) = item.gold else {
            continue;
        };

        match positions.get(item.name.as_str()) {
            Some(&pos) => {
                let current = unique[pos].gold.and_then(|g| g.total).unwrap_or(0);
                if gold.total.unwrap_or(0) > current {
                    unique[pos] = item;
                }
            }
            None => {
                positions.insert(item.name.as_str(), unique.len());
                unique.push(item);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{ids::ItemId, item::Gold};

    fn item(id: &str, name: &str, total: Option<u32>) -> Item {
        Item {
            id: id.into(),
            name: name.to_string(),
            description: String::new(),
            plaintext: String::new(),
            gold: total.map(|total| Gold {
                base: total,
                total: Some(total),
                sell: total * 7 / 10,
                purchasable: true,
            }),
            image: format!("{}.png", id),
            image_url: String::new(),
            tags: Vec::new(),
            stats: BTreeMap::new(),
            from: None,
            into: None,
            depth: None,
        }
    }

    fn with_tags(mut item: Item, tags: &[&str]) -> Item {
        item.tags = tags.iter().map(|t| t.to_string()).collect();
        item
    }

    fn ids(list: &[&str]) -> Option<Vec<ItemId>> {
        Some(list.iter().map(|id| ItemId::from(*id)).collect())
    }

    #[test]
    fn tags_take_precedence() {
        let mut boots = with_tags(item("1001", "Boots", Some(300)), &["Boots"]);
        boots.into = ids(&["3006"]);
        assert_eq!(categorize(&boots), ItemCategory::Boots);
        assert_eq!(
            categorize(&with_tags(item("2003", "Health Potion", Some(50)), &["Consumable"])),
            ItemCategory::Consumable
        );
        assert_eq!(
            categorize(&with_tags(item("3340", "Stealth Ward", Some(0)), &["Trinket", "Vision"])),
            ItemCategory::Trinket
        );
    }

    #[test]
    fn mythic_description_beats_component_heuristic() {
        let mut mythic = item("6630", "Goredrinker", Some(3300));
        mythic.description = "<rarityMythic>Mythic Passive:</rarityMythic>".to_string();
        mythic.from = ids(&["3044", "3067"]);
        assert_eq!(categorize(&mythic), ItemCategory::Mythic);
    }

    #[test]
    fn component_heuristic() {
        let mut basic = item("1036", "Long Sword", Some(350));
        basic.into = ids(&["3134"]);
        assert_eq!(categorize(&basic), ItemCategory::Basic);

        let mut epic = item("3134", "Serrated Dirk", Some(1100));
        epic.from = ids(&["1036"]);
        epic.into = ids(&["3142"]);
        assert_eq!(categorize(&epic), ItemCategory::Epic);

        let mut legendary = item("3142", "Youmuu's Ghostblade", Some(2800));
        legendary.from = ids(&["3134"]);
        assert_eq!(categorize(&legendary), ItemCategory::Legendary);
    }

    #[test]
    fn standalone_items_split_on_price() {
        assert_eq!(categorize(&item("1055", "Doran's Blade", Some(450))), ItemCategory::Starter);
        assert_eq!(categorize(&item("3070", "Tear", Some(500))), ItemCategory::Basic);
    }

    #[test]
    fn standalone_item_without_total_is_basic() {
        let mut unpriced = item("7050", "Gangplank Placeholder", Some(0));
        if let Some(gold) = unpriced.gold.as_mut() {
            gold.total = None;
        }
        assert_eq!(categorize(&unpriced), ItemCategory::Basic);
    }

    #[test]
    fn empty_from_list_still_counts_as_declared() {
        let mut odd = item("9999", "Odd", Some(1000));
        odd.from = Some(Vec::new());
        assert_eq!(categorize(&odd), ItemCategory::Legendary);
    }

    #[test]
    fn duplicates_keep_most_expensive_and_goldless_are_skipped() {
        let items = vec![
            item("1", "Dark Seal", Some(350)),
            item("2", "Poro Snax", None),
            item("3", "Dark Seal", Some(400)),
            item("4", "Dark Seal", Some(300)),
            item("5", "Cull", Some(450)),
        ];
        let categories = categorize_items(&items);

        assert_eq!(categories.len(), ItemCategory::ALL.len());
        let starters: Vec<_> = categories[&ItemCategory::Starter]
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(starters, ["3", "5"]);
        assert!(categories[&ItemCategory::Mythic].is_empty());
    }
}
