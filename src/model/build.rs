use super::ids::ItemId;

/// Recommended item path for a champion.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedBuild {
    pub starter: Vec<ItemId>,
    pub core: Vec<ItemId>,
    pub situational: Vec<ItemId>,
    pub boots: Vec<ItemId>,
    pub win_rate: String,
    pub pick_rate: String,
    pub lanes: Vec<LaneStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaneStats {
    pub name: String,
    pub win_rate: String,
    pub pick_rate: String,
}
