//! Boolean flags written the way administrators write them
//!
//! Accepts TOML booleans as well as the strings `1/yes/true/on` and
//! `0/no/false/off` (case-insensitive).

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Parse a textual flag value
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Serde `deserialize_with` helper for flag fields
///
/// # Errors
///
/// Returns an error if the value is neither a boolean nor a recognized flag
/// string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(value) => Ok(value),
        FlagRepr::Int(0) => Ok(false),
        FlagRepr::Int(1) => Ok(true),
        FlagRepr::Int(other) => Err(de::Error::custom(format!(
            "invalid flag value {other}: expected 0 or 1"
        ))),
        FlagRepr::Text(text) => parse_flag(&text).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid flag value '{text}': expected on/off, yes/no, true/false or 1/0"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn test_parse_flag() {
        for on in ["1", "yes", "true", "on", "ON", " Yes "] {
            assert_eq!(parse_flag(on), Some(true), "{on}");
        }
        for off in ["0", "no", "false", "off", "OFF"] {
            assert_eq!(parse_flag(off), Some(false), "{off}");
        }
        assert_eq!(parse_flag("maybe"), None);
    }
}
