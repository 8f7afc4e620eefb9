use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::{
    build::{LaneStats, RecommendedBuild},
    ids::{ChampionId, ItemId},
};

struct BuildEntry {
    starter: &'static [&'static str],
    core: &'static [&'static str],
    situational: &'static [&'static str],
    boots: &'static [&'static str],
    win_rate: &'static str,
    pick_rate: &'static str,
    lanes: &'static [(&'static str, &'static str, &'static str)],
}

const DEFAULT_BUILD: BuildEntry = BuildEntry {
    starter: &["1055", "2003"],
    core: &["3031", "3036", "3072"],
    situational: &["3139", "3156", "3026"],
    boots: &["3006", "3047"],
    win_rate: "50.0%",
    pick_rate: "5.0%",
    lanes: &[("Mid", "50.0%", "50.0%"), ("Top", "50.0%", "50.0%")],
};

/// Curated builds keyed by lower-case champion id.
static BUILDS: Lazy<HashMap<&'static str, BuildEntry>> = Lazy::new(|| {
    HashMap::from([
        (
            "aatrox",
            BuildEntry {
                starter: &["1054", "2003"],
                core: &["3074", "3053", "3071"],
                situational: &["3026", "3065", "3143"],
                boots: &["3111", "3047"],
                win_rate: "52.3%",
                pick_rate: "8.7%",
                lanes: &[("Top", "53.1%", "92.3%"), ("Jungle", "48.7%", "7.7%")],
            },
        ),
        (
            "ahri",
            BuildEntry {
                starter: &["1056", "2003"],
                core: &["3165", "3089", "3157"],
                situational: &["3135", "3116", "3152"],
                boots: &["3020", "3158"],
                win_rate: "51.8%",
                pick_rate: "7.2%",
                lanes: &[("Mid", "51.9%", "98.1%"), ("Support", "47.2%", "1.9%")],
            },
        ),
        (
            "yasuo",
            BuildEntry {
                starter: &["1055", "2003"],
                core: &["3031", "3036", "3072"],
                situational: &["3139", "3156", "3026"],
                boots: &["3006", "3047"],
                win_rate: "49.5%",
                pick_rate: "12.3%",
                lanes: &[("Mid", "49.8%", "67.4%"), ("Top", "48.9%", "32.6%")],
            },
        ),
    ])
});

/// The curated build for a champion, or the generic one when none exists.
pub fn recommended_build(id: &ChampionId) -> RecommendedBuild {
    let key = id.as_str().to_lowercase();
    BUILDS.get(key.as_str()).unwrap_or(&DEFAULT_BUILD).to_build()
}

impl BuildEntry {
    fn to_build(&self) -> RecommendedBuild {
        let ids = |list: &[&str]| list.iter().map(|id| ItemId::from(*id)).collect::<Vec<_>>();

        RecommendedBuild {
            starter: ids(self.starter),
            core: ids(self.core),
            situational: ids(self.situational),
            boots: ids(self.boots),
            win_rate: self.win_rate.to_string(),
            pick_rate: self.pick_rate.to_string(),
            lanes: self
                .lanes
                .iter()
                .map(|(name, win_rate, pick_rate)| LaneStats {
                    name: name.to_string(),
                    win_rate: win_rate.to_string(),
                    pick_rate: pick_rate.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_champion_gets_its_build() {
        let build = recommended_build(&"ahri".into());
        assert_eq!(build.core, vec![ItemId::from("3165"), ItemId::from("3089"), ItemId::from("3157")]);
        assert_eq!(build.win_rate, "51.8%");
        assert_eq!(build.lanes[0].name, "Mid");
    }

    #[test]
    fn lookup_ignores_casing() {
        assert_eq!(recommended_build(&"Aatrox".into()), recommended_build(&"aatrox".into()));
    }

    #[test]
    fn unknown_champion_gets_default_build() {
        let build = recommended_build(&"zed".into());
        assert_eq!(build.win_rate, "50.0%");
        assert_eq!(build.pick_rate, "5.0%");
        assert_eq!(build.boots, vec![ItemId::from("3006"), ItemId::from("3047")]);
        assert_eq!(build.lanes.len(), 2);
    }
}
