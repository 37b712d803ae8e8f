//! JSON rendering.

use crate::error::{OutputError, OutputResult};
use crate::scanner::PortResult;

/// Render results as a pretty-printed JSON array.
pub fn render_json(results: &[PortResult]) -> OutputResult<String> {
    serde_json::to_string_pretty(results).map_err(|e| OutputError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;

    #[test]
    fn test_render_json_parses_back() {
        let results = vec![
            PortResult::new(Port::new(22).unwrap(), true),
            PortResult::new(Port::new(23).unwrap(), false),
        ];
        let json = render_json(&results).unwrap();

        let parsed: Vec<PortResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);
        assert!(json.contains("\"status\": true"));
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }
}
