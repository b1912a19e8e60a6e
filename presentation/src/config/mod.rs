//! Presentation-level configuration
//!
//! Settings for how a report is printed, after command-line flags have been
//! laid over the configuration file.

use crate::cli::commands::Cli;
use stepwise_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators while building
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Command-line flags win over the file settings
    pub fn resolve(cli: &Cli, file_format: Option<OutputFormat>, file_color: bool) -> Self {
        let format = cli
            .output
            .map(OutputFormat::from)
            .or(file_format)
            .unwrap_or_default();

        Self {
            format,
            color: file_color && !cli.no_color,
            // Progress would interleave with machine-readable output
            show_progress: !cli.quiet && format != OutputFormat::Json,
        }
    }
}
