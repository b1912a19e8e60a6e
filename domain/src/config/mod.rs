//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod output_format;
mod resolver_defaults;

pub use output_format::OutputFormat;
pub use resolver_defaults::{DEFAULT_TERMINOLOGY_SYSTEM, MISSING_CODE_PLACEHOLDER, ResolverDefaults};
