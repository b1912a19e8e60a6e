//! Terminology adapters implementing the `TerminologyResolver` port

mod chained;
mod contained;
mod directory;

pub use chained::ChainedTerminology;
pub use contained::ContainedValueSets;
pub use directory::DirectoryTerminology;
