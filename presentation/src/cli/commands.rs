//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use stepwise_domain::OutputFormat as DomainOutputFormat;

/// Report format for a resolved task
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every step with its answer format and conditions
    Outline,
    /// Step counts and the error list
    Summary,
    /// The task as JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Outline => DomainOutputFormat::Outline,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for stepwise
#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(author, version, about = "Resolve FHIR questionnaires into ordered interview steps")]
#[command(long_about = r#"
Stepwise turns a FHIR Questionnaire into the ordered steps of a guided
interview: answer formats are resolved, choice options are looked up in
value sets, and enable-when conditions become requirements on each step.

Value sets are looked up in the questionnaire's contained resources first,
then in the --value-sets directory (as <id>.json or ValueSet_<id>.json).

Configuration files are loaded from (in priority order):
1. STEPWISE_* environment variables
2. --config <path>     Explicit config file
3. ./stepwise.toml     Project-level config
4. ~/.config/stepwise/config.toml   Global config

Example:
  stepwise questionnaire.json
  stepwise -s valuesets/ -o json survey.json
  stepwise --print-config
"#)]
pub struct Cli {
    /// Questionnaire JSON file to resolve
    pub questionnaire: Option<PathBuf>,

    /// Directory containing value set JSON files
    #[arg(short = 's', long, value_name = "DIR")]
    pub value_sets: Option<PathBuf>,

    /// Output format [default: outline]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Look value sets up once per question instead of once per reference
    #[arg(long)]
    pub no_dedupe: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::parse_from([
            "stepwise",
            "-vv",
            "-s",
            "valuesets",
            "--output",
            "json",
            "survey.json",
        ]);
        assert_eq!(cli.questionnaire, Some(PathBuf::from("survey.json")));
        assert_eq!(cli.value_sets, Some(PathBuf::from("valuesets")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_questionnaire_is_optional_for_config_flags() {
        let cli = Cli::parse_from(["stepwise", "--show-config"]);
        assert!(cli.questionnaire.is_none());
        assert!(cli.show_config);
    }

    #[test]
    fn test_into_domain_format() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Summary),
            DomainOutputFormat::Summary
        );
    }
}
