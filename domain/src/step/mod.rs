//! Resolved steps, resolution results and the finished task

pub mod entities;
pub mod result;
pub mod task;
