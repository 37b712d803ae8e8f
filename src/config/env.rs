//! Runtime environment detection.

use std::env;

/// Environment variable set by the container image.
pub const DOCKERIZED_VAR: &str = "DOCKERIZED";

/// Whether the process runs inside the published container image.
pub fn is_dockerized() -> bool {
    env::var(DOCKERIZED_VAR)
        .ok()
        .and_then(|value| parse_bool(&value))
        .unwrap_or(false)
}

/// Parse the boolean spellings accepted in environment flags.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts; anything else is rejected.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
