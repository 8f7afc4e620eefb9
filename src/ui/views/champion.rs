use crossterm::style::{style, Stylize};

use crate::{
    model::{
        champion::{Champion, ChampionDetail},
        ids::Version,
    },
    ui::{strip_markup, Lines},
};

use super::{heading, tier_pips};

pub fn version_view(version: &Version) -> Lines {
    vec![format!("Data Dragon version: {}", style(version).cyan().bold())]
}

pub fn champion_list_view(champions: &[Champion]) -> Lines {
    let mut lines = vec![heading("Champions"), String::new()];

    for champ in champions {
        lines.push(format!(
            "  • {:<16} {:<32} {} {}",
            champ.name,
            champ.title,
            tier_pips(champ.difficulty),
            style(champ.roles.join(", ")).dark_grey()
        ));
    }

    lines.push(String::new());
    lines.push(format!("{}", style(format!("{} champion(s) total", champions.len())).cyan()));
    lines
}

pub fn champion_detail_view(detail: &ChampionDetail) -> Lines {
    let mut lines = vec![
        format!("{}, {}", style(&detail.name).bold(), detail.title),
        format!("{}", style(detail.roles.join(" / ")).dark_grey()),
        String::new(),
        detail.lore.clone(),
        String::new(),
        heading("Ratings"),
        format!(
            "  Attack {:>2}   Defense {:>2}   Magic {:>2}   Difficulty {:>2} {}",
            detail.info.attack,
            detail.info.defense,
            detail.info.magic,
            detail.info.difficulty,
            tier_pips(detail.difficulty)
        ),
        String::new(),
        heading("Base stats"),
    ];

    let s = &detail.stats;
    lines.push(format!("  HP {:<6} HP regen {:<6.1} MP {:<6} MP regen {:.1}", s.hp, s.hpregen, s.mp, s.mpregen));
    lines.push(format!(
        "  AD {:<6} AS {:<14} Armor {:<6} MR {}",
        s.attackdamage, s.attackspeed, s.armor, s.spellblock
    ));
    lines.push(format!("  Move speed {:<6} Range {}", s.movespeed, s.attackrange));
    lines.push(String::new());

    lines.push(heading("Abilities"));
    lines.push(format!(
        "  {} {}: {}",
        style("[P]").yellow(),
        detail.passive.name,
        strip_markup(&detail.passive.description)
    ));
    for (key, spell) in ["Q", "W", "E", "R"].iter().zip(&detail.spells) {
        lines.push(format!(
            "  {} {}: {}",
            style(format!("[{}]", key)).yellow(),
            spell.name,
            strip_markup(&spell.description)
        ));
    }
    lines.push(String::new());

    lines.push(heading("Skins"));
    for skin in &detail.skins {
        let chroma = if skin.chromas { " (chromas)" } else { "" };
        lines.push(format!("  • {}{}", skin.name, chroma));
    }

    lines
}
