//! Output format value object

use serde::{Deserialize, Serialize};

/// How a resolved task is reported
///
/// This is a domain concept shared by the configuration file and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline of every step (default)
    #[default]
    Outline,
    /// Counts by step kind plus the error list
    Summary,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_outline() {
        assert_eq!(OutputFormat::default(), OutputFormat::Outline);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Summary).unwrap();
        assert_eq!(json, "\"summary\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
