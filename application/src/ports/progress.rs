//! Progress notification port
//!
//! Defines the interface for reporting progress during a task build.

/// Callback for progress updates during a task build
///
/// Implementations live in the presentation layer. Node callbacks arrive
/// from concurrently running branches, in completion order.
pub trait ResolutionProgress: Send + Sync {
    /// Called when a build starts with the number of top-level items
    fn on_build_start(&self, task_id: &str, top_level_items: usize);

    /// Called when a node has decided its own step
    fn on_node_complete(&self, link_id: &str, produced_step: bool, errors: usize);

    /// Called when the build has joined every branch
    fn on_build_complete(&self, task_id: &str, steps: usize, errors: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ResolutionProgress for NoProgress {
    fn on_build_start(&self, _task_id: &str, _top_level_items: usize) {}
    fn on_node_complete(&self, _link_id: &str, _produced_step: bool, _errors: usize) {}
    fn on_build_complete(&self, _task_id: &str, _steps: usize, _errors: usize) {}
}
