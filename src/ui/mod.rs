//! Plain-text rendering of display records for the terminal front-end.

pub mod views;

use std::{
    env,
    io::{self, Write},
};

use crossterm::tty::IsTty;

pub type Lines = Vec<String>;

/// Writes the lines to stdout, without colors when piped or `NO_COLOR` is set.
pub fn print_lines(lines: &[String]) -> io::Result<()> {
    let color = color_enabled();
    let mut out = io::stdout().lock();
    for line in lines {
        if color {
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", strip_ansi(line))?;
        }
    }
    out.flush()
}

pub fn color_enabled() -> bool {
    let no_color = env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    !no_color && io::stdout().is_tty()
}

/// Removes terminal escape sequences (`ESC [ ... m`) from styled text.
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

/// Removes inline markup (`<stats>`, `<br>`) from upstream descriptions.
pub fn strip_markup(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                plain.push(' ');
            }
            _ if !in_tag => plain.push(c),
            _ => {}
        }
    }
    plain.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use crossterm::style::{style, Stylize};

    use super::*;

    #[test]
    fn styled_text_loses_escape_codes() {
        let styled = format!("  • {} {}", style("Zed").bold().red(), style("(Assassin)").dark_grey());
        assert_ne!(styled, "  • Zed (Assassin)");
        assert_eq!(strip_ansi(&styled), "  • Zed (Assassin)");
    }

    #[test]
    fn plain_text_is_untouched_by_ansi_stripping() {
        assert_eq!(strip_ansi("━━ Boots (2) ━━"), "━━ Boots (2) ━━");
    }

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        assert_eq!(
            strip_markup("<mainText><stats><attention>25</attention> Move Speed</stats></mainText>"),
            "25 Move Speed"
        );
        assert_eq!(strip_markup("Line one.<br><br>Line two."), "Line one. Line two.");
        assert_eq!(strip_markup("no markup"), "no markup");
    }
}
