//! CLI entrypoint for stepwise
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stepwise_application::{BuildTaskUseCase, ResolutionProgress};
use stepwise_domain::BuildTaskError;
use stepwise_infrastructure::{
    ChainedTerminology, ConfigLoader, ContainedValueSets, DirectoryTerminology, FileConfig,
    QuestionnaireLoader,
};
use stepwise_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, SimpleProgress,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keeps the file writer flushing until exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting stepwise");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let file_config = load_config(&cli)?;

    if cli.print_config {
        print!("{}", file_config.to_toml()?);
        return Ok(());
    }

    let Some(path) = cli.questionnaire.as_deref() else {
        bail!("A questionnaire file is required. Use --help for usage.");
    };

    let output = OutputConfig::resolve(&cli, file_config.output.format, file_config.output.color);
    if !output.color {
        colored::control::set_override(false);
    }

    let parsed = QuestionnaireLoader::load_file(path).await?;

    // === Dependency Injection ===
    // Contained value sets first, then the value set directory
    let value_set_dir = cli
        .value_sets
        .clone()
        .or_else(|| file_config.terminology.value_set_dir.clone())
        .unwrap_or_else(|| parent_dir(path));
    info!("Looking up value sets in {}", value_set_dir.display());

    let terminology = ChainedTerminology::default()
        .with(Arc::new(ContainedValueSets::new(parsed.contained)))
        .with(Arc::new(DirectoryTerminology::new(value_set_dir)));

    let mut params = file_config.terminology.to_resolution_params();
    if cli.no_dedupe {
        params = params.with_deduplicate_lookups(false);
    }

    let use_case = BuildTaskUseCase::new(Arc::new(terminology)).with_params(params);

    // Execute with or without progress reporting
    let result = if output.show_progress {
        let progress: Arc<dyn ResolutionProgress> = if std::io::stderr().is_terminal() {
            Arc::new(ProgressReporter::new())
        } else {
            Arc::new(SimpleProgress)
        };
        use_case
            .execute_with_progress(&parsed.questionnaire, progress)
            .await
    } else {
        use_case.execute(&parsed.questionnaire).await
    };

    let task = match result {
        Ok(task) => task,
        Err(BuildTaskError::EmptyTask { task_id, errors }) => {
            eprint!("{}", ConsoleFormatter::format_errors(&task_id, &errors));
            bail!("No interview steps could be resolved from {}", path.display());
        }
    };

    if task.is_partial() {
        warn!(
            "Task {} resolved with {} errors; affected steps were left out",
            task.id,
            task.errors.len()
        );
    }

    println!("{}", ConsoleFormatter.render(&task, output.format));

    Ok(())
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(parent_dir(path), name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;
    Ok(config)
}

/// Directory holding `path`, `.` for bare file names
fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
