use json::JsonValue;

use crate::{
    model::{
        champion::{Ability, AttributeScores, BaseStats, Champion, ChampionDetail, Skin},
        ids::Version,
    },
    service::gameapi::endpoints::Endpoints,
};

use super::{str_or, string_list};

pub const PLACEHOLDER_TITLE: &str = "The Champion";
pub const PLACEHOLDER_LORE: &str =
    "Champion lore is currently unavailable. Please check back later for the complete story of this champion.";
const DEFAULT_SCORE: u8 = 5;

/// Buckets a 0-10 difficulty rating: above 7 is 3, above 4 is 2, anything else 1.
pub fn difficulty_tier(score: u8) -> u8 {
    if score > 7 {
        3
    } else if score > 4 {
        2
    } else {
        1
    }
}

pub fn to_display_champion(raw: &JsonValue, endpoints: &Endpoints) -> Champion {
    champion_entry(None, raw, endpoints)
}

/// One display record per catalog key, in catalog order.
pub fn to_display_collection(raw: &JsonValue, endpoints: &Endpoints) -> Vec<Champion> {
    raw.entries()
        .map(|(key, entry)| champion_entry(Some(key), entry, endpoints))
        .collect()
}

fn champion_entry(key: Option<&str>, raw: &JsonValue, endpoints: &Endpoints) -> Champion {
    let id = raw["id"].as_str().or(key).unwrap_or_default();
    let splash = endpoints.splash(id, 0);

    Champion {
        id: id.to_lowercase(),
        name: str_or(&raw["name"], id).to_string(),
        title: str_or(&raw["title"], PLACEHOLDER_TITLE).to_string(),
        roles: string_list(&raw["tags"]),
        image: splash.clone(),
        splash,
        difficulty: difficulty_tier(score(&raw["info"]["difficulty"])),
    }
}

pub fn to_champion_detail(raw: &JsonValue, version: &Version, endpoints: &Endpoints) -> ChampionDetail {
    let id = str_or(&raw["id"], "");
    let info = AttributeScores {
        attack: score(&raw["info"]["attack"]),
        defense: score(&raw["info"]["defense"]),
        magic: score(&raw["info"]["magic"]),
        difficulty: score(&raw["info"]["difficulty"]),
    };
    let splash = endpoints.splash(id, 0);

    ChampionDetail {
        id: id.to_string(),
        name: str_or(&raw["name"], id).to_string(),
        title: str_or(&raw["title"], PLACEHOLDER_TITLE).to_string(),
        lore: str_or(&raw["lore"], PLACEHOLDER_LORE).to_string(),
        blurb: str_or(&raw["blurb"], "").to_string(),
        roles: string_list(&raw["tags"]),
        info,
        difficulty: difficulty_tier(info.difficulty),
        stats: parse_stats(&raw["stats"]),
        passive: parse_ability(&raw["passive"], |file| endpoints.passive_icon(version, file)),
        spells: raw["spells"]
            .members()
            .map(|spell| parse_ability(spell, |file| endpoints.spell_icon(version, file)))
            .collect(),
        skins: raw["skins"]
            .members()
            .map(|skin| parse_skin(id, skin, endpoints))
            .collect(),
        image: splash.clone(),
        splash,
    }
}

fn parse_stats(raw: &JsonValue) -> BaseStats {
    BaseStats {
        hp: whole(&raw["hp"]),
        mp: whole(&raw["mp"]),
        movespeed: number(&raw["movespeed"]),
        armor: whole(&raw["armor"]),
        spellblock: whole(&raw["spellblock"]),
        attackrange: number(&raw["attackrange"]),
        hpregen: one_decimal(&raw["hpregen"]),
        mpregen: one_decimal(&raw["mpregen"]),
        attackdamage: whole(&raw["attackdamage"]),
        attackspeed: number(&raw["attackspeed"]),
    }
}

fn parse_ability<F>(raw: &JsonValue, icon_url: F) -> Ability
where
    F: Fn(&str) -> String,
{
    Ability {
        name: str_or(&raw["name"], "").to_string(),
        description: str_or(&raw["description"], "").to_string(),
        icon: raw["image"]["full"].as_str().map(icon_url).unwrap_or_default(),
    }
}

fn parse_skin(champion_id: &str, raw: &JsonValue, endpoints: &Endpoints) -> Skin {
    let num = raw["num"].as_u32().unwrap_or(0);

    Skin {
        id: str_or(&raw["id"], "").to_string(),
        num,
        name: str_or(&raw["name"], "default").to_string(),
        chromas: raw["chromas"].as_bool().unwrap_or(false),
        splash: endpoints.splash(champion_id, num),
    }
}

fn score(value: &JsonValue) -> u8 {
    value
        .as_f64()
        .map(|v| v.clamp(0.0, 10.0).round() as u8)
        .unwrap_or(DEFAULT_SCORE)
}

fn number(value: &JsonValue) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

fn whole(value: &JsonValue) -> i64 {
    number(value).round() as i64
}

fn one_decimal(value: &JsonValue) -> f64 {
    (number(value) * 10.0).round() / 10.0
}
