pub mod build;
pub mod champion;
pub mod item;

pub use build::*;
pub use champion::*;
pub use item::*;

use crossterm::style::{style, Stylize};

fn heading(text: &str) -> String {
    format!("━━ {} ━━", style(text).cyan().bold())
}

fn tier_pips(tier: u8) -> String {
    (1..=3).map(|i| if i <= tier { '●' } else { '○' }).collect()
}
