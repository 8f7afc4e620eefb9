//! Reshapes raw Data Dragon records into display records.
//!
//! Nothing here fails: absent or mistyped optional fields are replaced with
//! defaults at the point they are read.

pub mod champion;
pub mod item;

use json::JsonValue;

fn str_or<'a>(value: &'a JsonValue, default: &'a str) -> &'a str {
    value.as_str().unwrap_or(default)
}

fn string_list(value: &JsonValue) -> Vec<String> {
    value.members().filter_map(|m| m.as_str()).map(str::to_string).collect()
}
