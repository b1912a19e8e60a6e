//! Terminology model: value sets and the choice options derived from them

mod choices;
pub mod value_set;

pub use choices::options_from_codings;
