use std::collections::BTreeMap;

use crossterm::style::{style, Stylize};

use crate::{
    model::item::{Item, ItemCategory},
    ui::{strip_markup, Lines},
};

use super::heading;

/// Categories in shop order; `only` restricts the output to one of them.
pub fn item_categories_view(categories: &BTreeMap<ItemCategory, Vec<Item>>, only: Option<ItemCategory>) -> Lines {
    let mut lines = Vec::new();

    for (category, items) in categories {
        if only.is_some_and(|c| c != *category) {
            continue;
        }

        lines.push(heading(&format!("{} ({})", category, items.len())));
        for item in items {
            let total = item.gold.and_then(|g| g.total).unwrap_or(0);
            lines.push(format!(
                "  • {:<32} {:>5}g  {}",
                item.name,
                total,
                style(summary(item)).dark_grey()
            ));
        }
        lines.push(String::new());
    }

    lines
}

fn summary(item: &Item) -> String {
    if item.plaintext.is_empty() {
        strip_markup(&item.description)
    } else {
        item.plaintext.clone()
    }
}
