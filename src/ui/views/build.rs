use std::collections::HashMap;

use crossterm::style::{style, Stylize};

use crate::{
    model::{
        build::RecommendedBuild,
        ids::{ChampionId, ItemId},
        item::Item,
    },
    ui::Lines,
};

use super::heading;

/// Item ids are resolved against the catalog; unknown ids are shown as-is.
pub fn build_view(champion: &ChampionId, build: &RecommendedBuild, items: &[Item]) -> Lines {
    let names: HashMap<&ItemId, &str> = items.iter().map(|i| (&i.id, i.name.as_str())).collect();
    let resolve = |ids: &[ItemId]| {
        ids.iter()
            .map(|id| names.get(id).map(|n| n.to_string()).unwrap_or_else(|| id.to_string()))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        heading(&format!("Recommended build for {}", champion)),
        format!(
            "  Win rate {}   Pick rate {}",
            style(&build.win_rate).green(),
            build.pick_rate
        ),
        String::new(),
        format!("  Starter      {}", resolve(&build.starter)),
        format!("  Core         {}", resolve(&build.core)),
        format!("  Situational  {}", resolve(&build.situational)),
        format!("  Boots        {}", resolve(&build.boots)),
        String::new(),
        heading("Lanes"),
    ];

    for lane in &build.lanes {
        lines.push(format!(
            "  • {:<8} win {:<7} pick {}",
            lane.name, lane.win_rate, lane.pick_rate
        ));
    }

    lines
}
