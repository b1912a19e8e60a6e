//! Use cases
//!
//! Application-level operations that orchestrate domain logic. The
//! resolvers nest leaves-first:
//!
//! - [`resolve_answer_format`]: one question's answer format
//! - [`resolve_question`]: one question's step plus its nested groups
//! - [`resolve_group`]: concurrent fan-out over a group's children
//! - [`build_task`]: the top-level entry point

pub mod build_task;
pub mod context;
pub mod lookup_cache;
pub mod resolve_answer_format;
pub mod resolve_group;
pub mod resolve_question;

#[cfg(test)]
pub(crate) mod test_support;
