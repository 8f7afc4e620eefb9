use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::ids::{CanonicalId, ChampionId};

/// Champions whose Data Dragon id is not the capitalized lower-case name.
/// Keys are lower-case.
static SPECIAL_CASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("aurelionsol", "AurelionSol"),
        ("drmundo", "DrMundo"),
        ("jarvaniv", "JarvanIV"),
        ("kogmaw", "KogMaw"),
        ("leesin", "LeeSin"),
        ("masteryi", "MasterYi"),
        ("missfortune", "MissFortune"),
        ("nunu", "Nunu"),
        ("reksai", "RekSai"),
        ("tahmkench", "TahmKench"),
        ("twistedfate", "TwistedFate"),
        ("xinzhao", "XinZhao"),
        ("monkeyking", "MonkeyKing"),
        ("khazix", "Khazix"),
        ("chogath", "Chogath"),
        ("velkoz", "Velkoz"),
    ])
});

/// Maps a caller-supplied id to the casing Data Dragon expects.
///
/// The table is consulted with the lower-cased id. On a miss only the first
/// character of the original input is uppercased, the rest is kept as given.
pub fn normalize(id: &ChampionId) -> CanonicalId {
    let raw = id.as_str();
    match SPECIAL_CASES.get(raw.to_lowercase().as_str()) {
        Some(canonical) => (*canonical).into(),
        None => capitalize_first(raw).into(),
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
