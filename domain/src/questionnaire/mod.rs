//! Questionnaire definition tree
//!
//! The read-only input of a resolution. Parsers populate every typed field
//! once; resolvers never probe raw extensions.

pub mod definition;
pub mod item_type;
mod text;
