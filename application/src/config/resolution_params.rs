//! Resolution parameters: per-build settings.
//!
//! [`ResolutionParams`] groups what
//! [`BuildTaskUseCase`](crate::use_cases::build_task::BuildTaskUseCase)
//! injects into every resolver of a build.

use serde::{Deserialize, Serialize};
use stepwise_domain::ResolverDefaults;

/// Per-build settings for a task resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionParams {
    /// Fallback system and code for incomplete concepts.
    pub defaults: ResolverDefaults,
    /// Route terminology through a per-build [`LookupCache`](crate::LookupCache)
    /// so each distinct reference is resolved once.
    pub deduplicate_lookups: bool,
}

impl Default for ResolutionParams {
    fn default() -> Self {
        Self {
            defaults: ResolverDefaults::default(),
            deduplicate_lookups: true,
        }
    }
}

impl ResolutionParams {
    // ==================== Builder Methods ====================

    pub fn with_defaults(mut self, defaults: ResolverDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_deduplicate_lookups(mut self, enabled: bool) -> Self {
        self.deduplicate_lookups = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deduplicates() {
        let params = ResolutionParams::default();
        assert!(params.deduplicate_lookups);
        assert_eq!(params.defaults, ResolverDefaults::default());
    }

    #[test]
    fn test_builder() {
        let params = ResolutionParams::default()
            .with_defaults(ResolverDefaults::new("urn:x", "?"))
            .with_deduplicate_lookups(false);
        assert!(!params.deduplicate_lookups);
        assert_eq!(params.defaults.default_system, "urn:x");
    }
}
