//! Application-level configuration.
//!
//! - [`ResolutionParams`]: what a task build injects into its resolvers

pub mod resolution_params;

pub use resolution_params::ResolutionParams;
