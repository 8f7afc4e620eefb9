//! Static substitutes handed out when Data Dragon cannot be reached.

use json::JsonValue;

use crate::model::ids::ChampionId;

use super::normalize::capitalize_first;

pub const UNAVAILABLE_LORE: &str = "This champion is currently unavailable. Please try again later.";
pub const UNAVAILABLE_BLURB: &str = "Data temporarily unavailable.";

/// A minimal raw champion record that renders without gaps.
pub fn default_detail(id: &ChampionId) -> JsonValue {
    let raw = id.as_str();
    let name = capitalize_first(raw);

    let mut detail = JsonValue::new_object();
    detail["id"] = raw.into();
    detail["name"] = name.as_str().into();
    detail["title"] = "The Champion".into();
    detail["lore"] = UNAVAILABLE_LORE.into();
    detail["blurb"] = UNAVAILABLE_BLURB.into();
    detail["info"] = scores(5);
    detail["image"]["full"] = format!("{}.png", raw).into();
    detail["tags"] = JsonValue::Array(vec!["Fighter".into()]);
    detail["stats"] = base_stats();
    detail["spells"] = JsonValue::Array(
        ["Q Ability", "W Ability", "E Ability", "R Ability"]
            .into_iter()
            .map(|name| placeholder_ability(name, "ability.png"))
            .collect(),
    );
    detail["passive"] = placeholder_ability("Passive", "passive.png");
    detail["skins"] = JsonValue::Array(vec![
        skin(0, "default".to_string()),
        skin(1, format!("{} Skin 1", name)),
        skin(2, format!("{} Skin 2", name)),
    ]);
    detail
}

/// An empty catalog: callers render an empty list rather than an error.
pub fn default_catalog() -> JsonValue {
    JsonValue::new_object()
}

/// (id, title, tags, [attack, defense, magic, difficulty])
const ROSTER: [(&str, &str, &[&str], [u8; 4]); 7] = [
    ("Aatrox", "the Darkin Blade", &["Fighter", "Tank"], [8, 4, 3, 4]),
    ("Ahri", "the Nine-Tailed Fox", &["Mage", "Assassin"], [3, 4, 8, 5]),
    ("Ashe", "the Frost Archer", &["Marksman", "Support"], [7, 3, 2, 4]),
    ("Garen", "The Might of Demacia", &["Fighter", "Tank"], [7, 7, 1, 5]),
    ("Lux", "the Lady of Luminosity", &["Mage", "Support"], [2, 4, 9, 5]),
    ("Yasuo", "the Unforgiven", &["Fighter", "Assassin"], [8, 4, 4, 10]),
    ("Zed", "the Master of Shadows", &["Assassin"], [9, 2, 1, 7]),
];

/// A small static champion catalog in upstream shape, keyed by id.
pub fn default_roster() -> JsonValue {
    let mut roster = JsonValue::new_object();
    for (id, title, tags, [attack, defense, magic, difficulty]) in ROSTER {
        let mut entry = JsonValue::new_object();
        entry["id"] = id.into();
        entry["name"] = id.into();
        entry["title"] = title.into();
        entry["blurb"] = UNAVAILABLE_BLURB.into();
        entry["info"]["attack"] = attack.into();
        entry["info"]["defense"] = defense.into();
        entry["info"]["magic"] = magic.into();
        entry["info"]["difficulty"] = difficulty.into();
        entry["image"]["full"] = format!("{}.png", id).into();
        entry["tags"] = JsonValue::Array(tags.iter().map(|&tag| tag.into()).collect());
        roster[id] = entry;
    }
    roster
}

fn scores(value: u8) -> JsonValue {
    let mut info = JsonValue::new_object();
    for axis in ["attack", "defense", "magic", "difficulty"] {
        info[axis] = value.into();
    }
    info
}

fn base_stats() -> JsonValue {
    let mut stats = JsonValue::new_object();
    let values: [(&str, f64); 10] = [
        ("hp", 600.0),
        ("mp", 300.0),
        ("movespeed", 335.0),
        ("armor", 30.0),
        ("spellblock", 30.0),
        ("attackrange", 150.0),
        ("hpregen", 8.0),
        ("mpregen", 7.0),
        ("attackdamage", 65.0),
        ("attackspeed", 0.65),
    ];
    for (stat, value) in values {
        stats[stat] = value.into();
    }
    stats
}

fn placeholder_ability(name: &str, icon: &str) -> JsonValue {
    let mut ability = JsonValue::new_object();
    ability["name"] = name.into();
    ability["description"] = "Description unavailable".into();
    ability["image"]["full"] = icon.into();
    ability
}

fn skin(num: u32, name: String) -> JsonValue {
    let mut skin = JsonValue::new_object();
    skin["id"] = num.to_string().into();
    skin["num"] = num.into();
    skin["name"] = name.into();
    skin["chromas"] = false.into();
    skin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_named_after_raw_id() {
        let detail = default_detail(&"zed".into());
        assert_eq!(detail["id"].as_str(), Some("zed"));
        assert_eq!(detail["name"].as_str(), Some("Zed"));
        assert_eq!(detail["lore"].as_str(), Some(UNAVAILABLE_LORE));
        assert_eq!(detail["image"]["full"].as_str(), Some("zed.png"));
    }

    #[test]
    fn detail_has_mid_range_scores_and_placeholders() {
        let detail = default_detail(&"zed".into());
        assert_eq!(detail["info"]["difficulty"].as_u8(), Some(5));
        assert_eq!(detail["stats"]["attackspeed"].as_f64(), Some(0.65));
        assert_eq!(detail["spells"].len(), 4);
        assert_eq!(detail["passive"]["name"].as_str(), Some("Passive"));

        let skins: Vec<_> = detail["skins"].members().filter_map(|s| s["name"].as_str()).collect();
        assert_eq!(skins, ["default", "Zed Skin 1", "Zed Skin 2"]);
    }

    #[test]
    fn detail_is_deterministic() {
        assert_eq!(default_detail(&"ahri".into()), default_detail(&"ahri".into()));
    }

    #[test]
    fn roster_is_keyed_by_upstream_id() {
        let roster = default_roster();
        assert_eq!(roster.len(), ROSTER.len());
        assert_eq!(roster["Ahri"]["title"].as_str(), Some("the Nine-Tailed Fox"));
        assert_eq!(roster["Yasuo"]["info"]["difficulty"].as_u8(), Some(10));
        assert_eq!(roster["Zed"]["tags"][0].as_str(), Some("Assassin"));
    }

    #[test]
    fn catalog_is_empty_object() {
        let catalog = default_catalog();
        assert!(catalog.is_object());
        assert!(catalog.is_empty());
    }
}
