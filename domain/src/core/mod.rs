//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ResolutionError`]: recoverable, per-node resolution errors
//! - [`error::BuildTaskError`]: the fatal outcome of a task build
//! - [`string`]: text normalisation helpers

pub mod error;
pub mod string;
