//! Mapping declared question types to answer formats
//!
//! Everything here is synchronous. The one case that needs terminology,
//! choice questions, is returned as [`FormatPlan::Choices`] and finished by
//! the application layer once options are known.

use super::format::{AnswerFormat, ChoiceStyle, NumericFormat, NumericStyle, ScaleFormat};
use crate::core::error::ResolutionError;
use crate::questionnaire::definition::QuestionDefinition;
use crate::questionnaire::item_type::ItemType;

/// Scales wider than this are laid out vertically
const VERTICAL_SCALE_SPAN: u64 = 5;

/// What it takes to produce a question's answer format
#[derive(Debug, Clone, PartialEq)]
pub enum FormatPlan {
    /// The format is fully determined by the declaration
    Ready(AnswerFormat),
    /// The item carries no answer (display text, group headers)
    NoAnswer,
    /// Options must be resolved first
    Choices(ChoiceStyle),
}

/// Decide the answer format for `question`, short of resolving choices.
///
/// A missing type plans a text answer. Unknown types fail with
/// [`ResolutionError::UnsupportedQuestionType`].
pub fn plan_answer_format(
    question: &QuestionDefinition,
    link_id: &str,
) -> Result<FormatPlan, ResolutionError> {
    let Some(item_type) = &question.item_type else {
        return Ok(FormatPlan::Ready(AnswerFormat::Text));
    };

    let format = match item_type {
        ItemType::Boolean => AnswerFormat::Boolean,
        ItemType::Decimal | ItemType::Quantity => AnswerFormat::Numeric(decimal_format(question)),
        ItemType::Integer => integer_format(question),
        ItemType::Date => AnswerFormat::Date,
        ItemType::DateTime | ItemType::Instant => AnswerFormat::DateTime,
        ItemType::Time => AnswerFormat::Time,
        ItemType::String | ItemType::Url => AnswerFormat::Text,
        ItemType::Choice | ItemType::OpenChoice => {
            return Ok(FormatPlan::Choices(choice_style(question)));
        }
        ItemType::Display | ItemType::Group => return Ok(FormatPlan::NoAnswer),
        ItemType::Unknown(code) => {
            return Err(ResolutionError::UnsupportedQuestionType {
                link_id: link_id.to_string(),
                item_type: code.clone(),
            });
        }
    };

    Ok(FormatPlan::Ready(format))
}

/// Multiple selection when `repeats` is true, or when `repeats` is absent and
/// max-occurrences is absent or greater than one.
pub fn choice_style(question: &QuestionDefinition) -> ChoiceStyle {
    let multiple = question
        .repeats
        .unwrap_or_else(|| question.max_occurs.is_none_or(|max| max > 1));

    if multiple {
        ChoiceStyle::Multiple
    } else {
        ChoiceStyle::Single
    }
}

fn decimal_format(question: &QuestionDefinition) -> NumericFormat {
    NumericFormat {
        style: NumericStyle::Decimal,
        min: question.min_value.as_ref().and_then(|b| b.as_decimal()),
        max: question.max_value.as_ref().and_then(|b| b.as_decimal()),
        default: question.default_value.map(|v| v as f64),
        unit: question.unit.clone(),
    }
}

fn integer_format(question: &QuestionDefinition) -> AnswerFormat {
    let min = question.min_value.as_ref();
    let max = question.max_value.as_ref();

    match (min.and_then(|b| b.integer), max.and_then(|b| b.integer)) {
        (Some(lo), Some(hi)) if hi > lo => AnswerFormat::Scale(ScaleFormat {
            min: lo,
            max: hi,
            default: question.default_value.unwrap_or(lo),
            step: 1,
            vertical: hi.abs_diff(lo) > VERTICAL_SCALE_SPAN,
            min_label: min.and_then(|b| b.label.clone()),
            max_label: max.and_then(|b| b.label.clone()),
        }),
        (lo, hi) => AnswerFormat::Numeric(NumericFormat {
            style: NumericStyle::Integer,
            min: lo.map(|v| v as f64),
            max: hi.map(|v| v as f64),
            default: question.default_value.map(|v| v as f64),
            unit: question.unit.clone(),
        }),
    }
}
