//! Progress reporting for task builds

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use stepwise_application::ports::progress::ResolutionProgress;

/// Reports build progress with a spinner on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos} nodes {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionProgress for ProgressReporter {
    fn on_build_start(&self, task_id: &str, top_level_items: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Resolving {}", task_id));
        pb.set_message(format!("({} top-level items)", top_level_items));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_node_complete(&self, link_id: &str, produced_step: bool, errors: usize) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if errors > 0 {
                format!("{} {}", "x".red(), link_id)
            } else if produced_step {
                format!("{} {}", "v".green(), link_id)
            } else {
                format!("{} {}", "-".dimmed(), link_id)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_build_complete(&self, _task_id: &str, steps: usize, errors: usize) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            let summary = if errors == 0 {
                format!("{} steps", steps).green()
            } else {
                format!("{} steps, {} errors", steps, errors).yellow()
            };
            pb.finish_with_message(format!("done: {}", summary));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ResolutionProgress for SimpleProgress {
    fn on_build_start(&self, task_id: &str, top_level_items: usize) {
        eprintln!(
            "{} {} ({} top-level items)",
            "->".cyan(),
            format!("Resolving {}", task_id).bold(),
            top_level_items
        );
    }

    fn on_node_complete(&self, link_id: &str, produced_step: bool, errors: usize) {
        if errors > 0 {
            eprintln!("  {} {} ({} errors)", "x".red(), link_id, errors);
        } else if produced_step {
            eprintln!("  {} {}", "v".green(), link_id);
        }
    }

    fn on_build_complete(&self, _task_id: &str, steps: usize, errors: usize) {
        eprintln!("{} {} steps, {} errors", "<-".cyan(), steps, errors);
    }
}
