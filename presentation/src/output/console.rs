//! Console output formatter for resolved tasks

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use stepwise_domain::core::string::ellipsize;
use stepwise_domain::{
    AnswerFormat, ChoiceStyle, NumericFormat, NumericStyle, ResolutionError, ScaleFormat, Step,
    Task,
};

const TITLE_WIDTH: usize = 60;

/// Formats tasks for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every step of the task in order
    pub fn format_outline(task: &Task) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(task.title.as_deref().unwrap_or("Interview Steps")));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Task:".cyan().bold(), task.id));

        output.push_str(&Self::section_header("Steps"));
        for (index, step) in task.steps.iter().enumerate() {
            output.push_str(&Self::format_step(index + 1, step));
        }

        if task.is_partial() {
            output.push_str(&Self::error_section(&task.errors));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Counts and errors only (concise output)
    pub fn format_summary(task: &Task) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Task Summary ===".cyan().bold()));
        if let Some(title) = &task.title {
            output.push_str(&format!("{} {}\n", "Title:".bold(), title));
        }
        output.push_str(&format!("{} {}\n", "Task:".bold(), task.id));

        let questions = task.question_count();
        let instructions = task.steps.len() - questions;
        output.push_str(&format!(
            "{} {} ({} questions, {} instructions)\n",
            "Steps:".bold(),
            task.steps.len(),
            questions,
            instructions
        ));

        let conditional = task
            .steps
            .iter()
            .filter(|s| !s.requirements().is_empty())
            .count();
        if conditional > 0 {
            output.push_str(&format!("{} {}\n", "Conditional:".bold(), conditional));
        }

        if task.is_partial() {
            output.push_str(&Self::error_section(&task.errors));
        } else {
            output.push_str(&format!("\n{}\n", "Resolved without errors".green()));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(task: &Task) -> String {
        serde_json::to_string_pretty(task).unwrap_or_else(|_| "{}".to_string())
    }

    /// Report a build that produced no steps
    pub fn format_errors(task_id: &str, errors: &[ResolutionError]) -> String {
        let mut output = format!(
            "{} questionnaire {} produced no steps\n",
            "Error:".red().bold(),
            task_id
        );
        if !errors.is_empty() {
            output.push_str(&Self::error_section(errors));
        }
        output
    }

    /// One-line description of an answer format
    pub fn describe_format(format: &AnswerFormat) -> String {
        match format {
            AnswerFormat::Numeric(numeric) => Self::describe_numeric(numeric),
            AnswerFormat::Scale(scale) => Self::describe_scale(scale),
            AnswerFormat::Choice(choice) => {
                let style = match choice.style {
                    ChoiceStyle::Single => "single choice",
                    ChoiceStyle::Multiple => "multiple choice",
                };
                format!("{}, {} options", style, choice.options.len())
            }
            other => other.kind().to_string(),
        }
    }

    fn describe_numeric(numeric: &NumericFormat) -> String {
        let mut parts = vec![
            match numeric.style {
                NumericStyle::Integer => "integer",
                NumericStyle::Decimal => "decimal",
            }
            .to_string(),
        ];
        match (numeric.min, numeric.max) {
            (Some(min), Some(max)) => parts.push(format!("{}..{}", min, max)),
            (Some(min), None) => parts.push(format!(">= {}", min)),
            (None, Some(max)) => parts.push(format!("<= {}", max)),
            (None, None) => {}
        }
        if let Some(unit) = &numeric.unit {
            parts.push(unit.clone());
        }
        if let Some(default) = numeric.default {
            parts.push(format!("default {}", default));
        }
        parts.join(" ")
    }

    fn describe_scale(scale: &ScaleFormat) -> String {
        let mut text = format!(
            "scale {}..{} step {} default {}",
            scale.min, scale.max, scale.step, scale.default
        );
        if scale.vertical {
            text.push_str(" vertical");
        }
        if scale.min_label.is_some() || scale.max_label.is_some() {
            text.push_str(&format!(
                " (\"{}\" to \"{}\")",
                scale.min_label.as_deref().unwrap_or(""),
                scale.max_label.as_deref().unwrap_or("")
            ));
        }
        text
    }

    fn format_step(number: usize, step: &Step) -> String {
        let heading = step.title().or(step.text()).unwrap_or(step.id());
        let mut output = format!(
            "\n{:>3}. {} {}\n",
            number,
            ellipsize(heading, TITLE_WIDTH).bold(),
            format!("[{}]", step.id()).dimmed()
        );

        if let (Some(_), Some(text)) = (step.title(), step.text()) {
            output.push_str(&Self::indent(&ellipsize(text, TITLE_WIDTH * 2), 5));
            output.push('\n');
        }

        match step {
            Step::Instruction(_) => {
                output.push_str(&format!("     {}\n", "instruction".yellow()));
            }
            Step::Question(question) => {
                let optional = if question.optional { " (optional)" } else { "" };
                output.push_str(&format!(
                    "     {}{}\n",
                    Self::describe_format(&question.answer_format).green(),
                    optional.dimmed()
                ));
                if let Some(choice) = question.answer_format.as_choice() {
                    for option in &choice.options {
                        output.push_str(&format!(
                            "       - {} {}\n",
                            option.display,
                            format!("<{}>", option.value).dimmed()
                        ));
                    }
                }
            }
        }

        for rule in step.requirements() {
            output.push_str(&format!("     {} {}\n", "when".magenta(), rule));
        }

        output
    }

    fn error_section(errors: &[ResolutionError]) -> String {
        let mut output = Self::section_header(&format!("Errors ({})", errors.len()));
        for error in errors {
            output.push_str(&format!("  {} {}\n", "x".red(), error));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn indent(text: &str, width: usize) -> String {
        let pad = " ".repeat(width);
        text.lines()
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outline(&self, task: &Task) -> String {
        ConsoleFormatter::format_outline(task)
    }

    fn format_summary(&self, task: &Task) -> String {
        ConsoleFormatter::format_summary(task)
    }

    fn format_json(&self, task: &Task) -> String {
        ConsoleFormatter::format_json(task)
    }

    fn format_errors(&self, task_id: &str, errors: &[ResolutionError]) -> String {
        ConsoleFormatter::format_errors(task_id, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_domain::{
        ChoiceFormat, ChoiceOption, Comparator, ExpectedValue, InstructionStep, OutputFormat,
        QuestionStep, RequirementRule,
    };

    fn sample_task() -> Task {
        Task::new(
            "survey",
            vec![
                Step::Instruction(InstructionStep {
                    id: "intro".to_string(),
                    title: Some("Welcome".to_string()),
                    text: Some("Please answer honestly.".to_string()),
                    requirements: vec![],
                }),
                Step::Question(QuestionStep {
                    id: "smoker".to_string(),
                    title: Some("Do you smoke?".to_string()),
                    text: None,
                    item_type: None,
                    answer_format: AnswerFormat::Choice(ChoiceFormat {
                        style: ChoiceStyle::Single,
                        options: vec![
                            ChoiceOption {
                                display: "Yes".to_string(),
                                value: "urn:yn Y".to_string(),
                            },
                            ChoiceOption {
                                display: "No".to_string(),
                                value: "urn:yn N".to_string(),
                            },
                        ],
                    }),
                    optional: true,
                    requirements: vec![],
                }),
                Step::Question(QuestionStep {
                    id: "packs".to_string(),
                    title: Some("Packs per day".to_string()),
                    text: None,
                    item_type: None,
                    answer_format: AnswerFormat::Numeric(
                        NumericFormat::new(NumericStyle::Integer)
                            .with_unit(Some("packs".to_string())),
                    ),
                    optional: false,
                    requirements: vec![RequirementRule::new(
                        "smoker",
                        Comparator::Equal,
                        ExpectedValue::Choice("urn:yn Y".to_string()),
                    )],
                }),
            ],
            vec![],
        )
        .with_title(Some("Smoking".to_string()))
    }

    #[test]
    fn test_outline_lists_steps_in_order() {
        let output = ConsoleFormatter::format_outline(&sample_task());

        let welcome = output.find("Welcome").unwrap();
        let smoke = output.find("Do you smoke?").unwrap();
        let packs = output.find("Packs per day").unwrap();
        assert!(welcome < smoke && smoke < packs);

        assert!(output.contains("Please answer honestly."));
        assert!(output.contains("single choice, 2 options"));
        assert!(output.contains("urn:yn N"));
        assert!(output.contains("integer packs"));
        assert!(output.contains("smoker = <urn:yn Y>"));
        assert!(!output.contains("Errors"));
    }

    #[test]
    fn test_outline_lists_errors_of_partial_task() {
        let mut task = sample_task();
        task.errors.push(ResolutionError::NoChoicesAvailable {
            link_id: "empty".to_string(),
        });

        let output = ConsoleFormatter::format_outline(&task);
        assert!(output.contains("Errors (1)"));
        assert!(output.contains("There are no choices in question [linkId: empty]"));
    }

    #[test]
    fn test_summary_counts() {
        let output = ConsoleFormatter::format_summary(&sample_task());
        assert!(output.contains("2 questions, 1 instructions"));
        assert!(output.contains("Resolved without errors"));
    }

    #[test]
    fn test_json_is_parseable() {
        let output = ConsoleFormatter.render(&sample_task(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["id"], "survey");
        assert_eq!(value["steps"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_format_errors() {
        let output = ConsoleFormatter::format_errors(
            "survey",
            &[ResolutionError::UnsupportedQuestionType {
                link_id: "q".to_string(),
                item_type: "attachment".to_string(),
            }],
        );
        assert!(output.contains("produced no steps"));
        assert!(output.contains("attachment"));
    }

    #[test]
    fn test_describe_scale() {
        let scale = AnswerFormat::Scale(ScaleFormat {
            min: 0,
            max: 10,
            default: 5,
            step: 1,
            vertical: false,
            min_label: Some("none".to_string()),
            max_label: Some("worst".to_string()),
        });
        assert_eq!(
            ConsoleFormatter::describe_format(&scale),
            "scale 0..10 step 1 default 5 (\"none\" to \"worst\")"
        );
        assert_eq!(ConsoleFormatter::describe_format(&AnswerFormat::Date), "date");
    }
}
