//! Progress reporting for task builds

pub mod reporter;
