//! Fallback values used when a coded concept is incomplete

use serde::{Deserialize, Serialize};

/// Terminology system assumed for concepts that do not name one
pub const DEFAULT_TERMINOLOGY_SYSTEM: &str = "https://fhir.smalthealthit.org";

/// Code used for concepts that do not carry one
pub const MISSING_CODE_PLACEHOLDER: &str = "⚠️";

/// Separator between system and code in a choice value
const SYSTEM_CODE_SEPARATOR: char = ' ';

/// Defaults injected into a resolution at construction time.
///
/// Choice values are rendered as `"{system} {code}"`; these values fill in
/// whichever half is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverDefaults {
    /// Fallback terminology system URI
    pub default_system: String,
    /// Fallback code glyph
    pub missing_code: String,
}

impl Default for ResolverDefaults {
    fn default() -> Self {
        Self {
            default_system: DEFAULT_TERMINOLOGY_SYSTEM.to_string(),
            missing_code: MISSING_CODE_PLACEHOLDER.to_string(),
        }
    }
}

impl ResolverDefaults {
    pub fn new(default_system: impl Into<String>, missing_code: impl Into<String>) -> Self {
        Self {
            default_system: default_system.into(),
            missing_code: missing_code.into(),
        }
    }

    /// The code to use, falling back to the placeholder
    pub fn code_or_placeholder<'a>(&'a self, code: Option<&'a str>) -> &'a str {
        code.unwrap_or(self.missing_code.as_str())
    }

    /// Render the value of a choice from its system and code
    pub fn choice_value(&self, system: Option<&str>, code: Option<&str>) -> String {
        format!(
            "{}{}{}",
            system.unwrap_or(self.default_system.as_str()),
            SYSTEM_CODE_SEPARATOR,
            self.code_or_placeholder(code)
        )
    }
}
