/// Roster entry as shown in champion lists and grids.
#[derive(Debug, Clone, PartialEq)]
pub struct Champion {
    /// Lower-cased Data Dragon id, used for routing.
    pub id: String,
    pub name: String,
    pub title: String,
    pub roles: Vec<String>,
    pub image: String,
    pub splash: String,
    /// Difficulty tier in `1..=3`.
    pub difficulty: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionDetail {
    pub id: String,
    pub name: String,
    pub title: String,
    pub lore: String,
    pub blurb: String,
    pub roles: Vec<String>,
    pub info: AttributeScores,
    /// Difficulty tier in `1..=3`, derived from `info.difficulty`.
    pub difficulty: u8,
    pub stats: BaseStats,
    pub passive: Ability,
    pub spells: Vec<Ability>,
    pub skins: Vec<Skin>,
    pub image: String,
    pub splash: String,
}

/// Upstream 0-10 ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeScores {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

/// Level one stats, rounded for display: flat values to integers, regeneration
/// to one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseStats {
    pub hp: i64,
    pub mp: i64,
    pub movespeed: f64,
    pub armor: i64,
    pub spellblock: i64,
    pub attackrange: f64,
    pub hpregen: f64,
    pub mpregen: f64,
    pub attackdamage: i64,
    pub attackspeed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skin {
    pub id: String,
    pub num: u32,
    pub name: String,
    pub chromas: bool,
    pub splash: String,
}
