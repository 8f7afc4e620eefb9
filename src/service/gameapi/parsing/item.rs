use json::JsonValue;

use crate::{
    model::{
        ids::{ItemId, Version},
        item::{Gold, Item},
    },
    service::gameapi::endpoints::Endpoints,
};

use super::{str_or, string_list};

/// Items in catalog order.
pub fn parse_items(raw: &JsonValue, version: &Version, endpoints: &Endpoints) -> Vec<Item> {
    raw.entries()
        .map(|(id, entry)| parse_item(id, entry, version, endpoints))
        .collect()
}

fn parse_item(id: &str, raw: &JsonValue, version: &Version, endpoints: &Endpoints) -> Item {
    let image = raw["image"]["full"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.png", id));

    Item {
        id: id.into(),
        name: str_or(&raw["name"], id).to_string(),
        description: str_or(&raw["description"], "").to_string(),
        plaintext: str_or(&raw["plaintext"], "").to_string(),
        gold: parse_gold(&raw["gold"]),
        image_url: endpoints.item_image(version, &image),
        image,
        tags: string_list(&raw["tags"]),
        stats: raw["stats"]
            .entries()
            .filter_map(|(stat, value)| value.as_f64().map(|v| (stat.to_string(), v)))
            .collect(),
        from: id_list(&raw["from"]),
        into: id_list(&raw["into"]),
        depth: raw["depth"].as_u8(),
    }
}

fn parse_gold(raw: &JsonValue) -> Option<Gold> {
    if !raw.is_object() {
        return None;
    }

    Some(Gold {
        base: raw["base"].as_u32().unwrap_or(0),
        total: raw["total"].as_u32(),
        sell: raw["sell"].as_u32().unwrap_or(0),
        purchasable: raw["purchasable"].as_bool().unwrap_or(false),
    })
}

fn id_list(raw: &JsonValue) -> Option<Vec<ItemId>> {
    if !raw.is_array() {
        return None;
    }

    Some(raw.members().filter_map(|m| m.as_str()).map(ItemId::from).collect())
}
