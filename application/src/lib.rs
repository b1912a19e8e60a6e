//! Application layer for stepwise
//!
//! This crate contains the resolution use cases, the ports they depend on,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolutionParams;
pub use ports::{
    progress::{NoProgress, ResolutionProgress},
    terminology::{NoTerminology, TerminologyError, TerminologyResolver},
};
pub use use_cases::build_task::BuildTaskUseCase;
pub use use_cases::context::ResolutionContext;
pub use use_cases::lookup_cache::LookupCache;
pub use use_cases::resolve_answer_format::AnswerFormatResolver;
pub use use_cases::resolve_group::GroupResolver;
pub use use_cases::resolve_question::QuestionResolver;
