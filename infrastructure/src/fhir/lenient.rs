//! Field deserializers for questionnaire fragments
//!
//! A wrong-typed field or list entry is logged and dropped so the rest of the
//! document still parses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// A value of the wrong shape becomes `None`
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!("Ignoring malformed value {}: {}", value, e);
            Ok(None)
        }
    }
}

/// Entries that fail to parse are skipped; a non-array becomes empty
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warn!("Ignoring {} where a list was expected", other);
            return Ok(Vec::new());
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed entry: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "optional")]
        count: Option<i64>,
        #[serde(deserialize_with = "list")]
        flags: Vec<bool>,
    }

    #[test]
    fn test_wrong_types_are_dropped() {
        let sample: Sample =
            serde_json::from_str(r#"{ "count": 1.5, "flags": [true, "yes", false] }"#).unwrap();
        assert_eq!(sample.count, None);
        assert_eq!(sample.flags, [true, false]);
    }

    #[test]
    fn test_well_formed_and_missing_values() {
        let sample: Sample = serde_json::from_str(r#"{ "count": 4, "flags": {} }"#).unwrap();
        assert_eq!(sample.count, Some(4));
        assert!(sample.flags.is_empty());

        let sample: Sample = serde_json::from_str(r#"{ "count": null }"#).unwrap();
        assert_eq!(sample.count, None);
    }
}
