//! Conditional visibility ("enable-when") rules

pub mod extract;
pub mod rule;
