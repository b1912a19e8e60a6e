//! Step entities

use crate::answer::format::AnswerFormat;
use crate::questionnaire::item_type::ItemType;
use crate::requirement::rule::RequirementRule;
use serde::Serialize;

/// A step that only shows text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstructionStep {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rules inherited from ancestors; an instruction hides with its section
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<RequirementRule>,
}

/// A step that collects one answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionStep {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Declared type, for consumers that store answers by type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    pub answer_format: AnswerFormat,
    pub optional: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<RequirementRule>,
}

/// One step of a guided interview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Instruction(InstructionStep),
    Question(QuestionStep),
}

impl Step {
    pub fn id(&self) -> &str {
        match self {
            Step::Instruction(step) => &step.id,
            Step::Question(step) => &step.id,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Step::Instruction(step) => step.title.as_deref(),
            Step::Question(step) => step.title.as_deref(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Step::Instruction(step) => step.text.as_deref(),
            Step::Question(step) => step.text.as_deref(),
        }
    }

    /// Rules that must all hold for the step to be shown
    pub fn requirements(&self) -> &[RequirementRule] {
        match self {
            Step::Instruction(step) => &step.requirements,
            Step::Question(step) => &step.requirements,
        }
    }

    pub fn as_question(&self) -> Option<&QuestionStep> {
        match self {
            Step::Question(step) => Some(step),
            Step::Instruction(_) => None,
        }
    }

    pub fn is_instruction(&self) -> bool {
        matches!(self, Step::Instruction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::rule::{Comparator, ExpectedValue};

    #[test]
    fn test_accessors() {
        let rule = RequirementRule::new("q0", Comparator::Exists, ExpectedValue::Boolean(true));
        let step = Step::Question(QuestionStep {
            id: "q1".to_string(),
            title: Some("Title".to_string()),
            text: None,
            item_type: Some(ItemType::Boolean),
            answer_format: AnswerFormat::Boolean,
            optional: true,
            requirements: vec![rule.clone()],
        });

        assert_eq!(step.id(), "q1");
        assert_eq!(step.title(), Some("Title"));
        assert_eq!(step.requirements(), &[rule]);
        assert!(step.as_question().is_some());
        assert!(!step.is_instruction());
    }

    #[test]
    fn test_serialize_instruction() {
        let step = Step::Instruction(InstructionStep {
            id: "intro".to_string(),
            title: Some("Welcome".to_string()),
            text: None,
            requirements: vec![],
        });
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "instruction");
        assert_eq!(json["id"], "intro");
        assert!(json.get("text").is_none());
        assert!(json.get("requirements").is_none());
    }
}
