//! Terminology configuration from TOML (`[terminology]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stepwise_application::ResolutionParams;
use stepwise_domain::ResolverDefaults;
use stepwise_domain::config::{DEFAULT_TERMINOLOGY_SYSTEM, MISSING_CODE_PLACEHOLDER};

/// Raw terminology configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTerminologyConfig {
    /// System URI for concepts that do not name one
    pub default_system: String,
    /// Code shown for concepts that do not carry one
    pub missing_code: String,
    /// Directory searched for referenced value sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set_dir: Option<PathBuf>,
    /// Look each value set up at most once per build
    pub deduplicate_lookups: bool,
}

impl Default for FileTerminologyConfig {
    fn default() -> Self {
        Self {
            default_system: DEFAULT_TERMINOLOGY_SYSTEM.to_string(),
            missing_code: MISSING_CODE_PLACEHOLDER.to_string(),
            value_set_dir: None,
            deduplicate_lookups: true,
        }
    }
}

impl FileTerminologyConfig {
    pub fn to_resolver_defaults(&self) -> ResolverDefaults {
        ResolverDefaults::new(self.default_system.clone(), self.missing_code.clone())
    }

    pub fn to_resolution_params(&self) -> ResolutionParams {
        ResolutionParams::default()
            .with_defaults(self.to_resolver_defaults())
            .with_deduplicate_lookups(self.deduplicate_lookups)
    }
}
