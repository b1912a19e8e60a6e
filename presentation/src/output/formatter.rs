//! Output formatter trait

use stepwise_domain::{OutputFormat, ResolutionError, Task};

/// Trait for formatting resolved tasks
pub trait OutputFormatter {
    /// Every step with its answer format and requirements
    fn format_outline(&self, task: &Task) -> String;

    /// Step counts and collected errors only
    fn format_summary(&self, task: &Task) -> String;

    /// Format as JSON
    fn format_json(&self, task: &Task) -> String;

    /// Errors of a build that produced no task
    fn format_errors(&self, task_id: &str, errors: &[ResolutionError]) -> String;

    /// Dispatch on the selected output format
    fn render(&self, task: &Task, format: OutputFormat) -> String {
        match format {
            OutputFormat::Outline => self.format_outline(task),
            OutputFormat::Summary => self.format_summary(task),
            OutputFormat::Json => self.format_json(task),
        }
    }
}
