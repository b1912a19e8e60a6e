//! Answer formats and the mapping from declared question types

pub mod format;
pub mod plan;
