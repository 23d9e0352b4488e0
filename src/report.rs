//! Rendering validation results for stdout

use crate::config::OutputFormat;
use crate::validation::ValidationResult;

/// Serialize a result as JSON in the requested layout
pub fn render(result: &ValidationResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(result),
        OutputFormat::Compact => serde_json::to_string(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileMap;

    #[test]
    fn test_pretty_valid_output() {
        let map: TileMap = r#"{"width":1,"height":1,"tiles":[["a"]]}"#.parse().unwrap();
        let out = render(&map.validate(), OutputFormat::Pretty).unwrap();
        assert_eq!(out, "{\n  \"valid\": true,\n  \"errors\": []\n}");
    }

    #[test]
    fn test_compact_invalid_output() {
        let map: TileMap = r#"{"width":3,"height":1,"tiles":[["a","b"]]}"#.parse().unwrap();
        let out = render(&map.validate(), OutputFormat::Compact).unwrap();
        assert_eq!(
            out,
            r#"{"valid":false,"errors":["Row 0 has width 2, expected 3"]}"#
        );
    }
}
