//! Deriving requirement rules from enable-when declarations

use super::rule::{Comparator, ExpectedValue, RequirementRule};
use crate::config::ResolverDefaults;
use crate::core::error::ResolutionError;
use crate::questionnaire::definition::{AnswerValue, EnableWhen};

/// Rules extracted from one node, plus one error per malformed declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub rules: Vec<RequirementRule>,
    pub errors: Vec<ResolutionError>,
}

/// Turns enable-when declarations into [`RequirementRule`]s.
///
/// Declarations are handled one by one: a malformed entry yields a
/// [`ResolutionError::MalformedRequirement`] and no rule, while the other
/// entries of the same node still produce theirs.
pub struct RequirementExtractor<'a> {
    defaults: &'a ResolverDefaults,
}

impl<'a> RequirementExtractor<'a> {
    pub fn new(defaults: &'a ResolverDefaults) -> Self {
        Self { defaults }
    }

    /// Extract the rules declared on the node identified by `link_id`
    pub fn extract(&self, link_id: &str, declarations: &[EnableWhen]) -> Extraction {
        let mut extraction = Extraction::default();

        for declaration in declarations {
            match self.extract_one(declaration) {
                Ok(rule) => extraction.rules.push(rule),
                Err(reason) => extraction.errors.push(ResolutionError::MalformedRequirement {
                    link_id: link_id.to_string(),
                    reason,
                }),
            }
        }

        extraction
    }

    fn extract_one(&self, declaration: &EnableWhen) -> Result<RequirementRule, String> {
        let dependent = declaration
            .question
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or("condition does not name a question")?;

        if declaration.answers.len() > 1 {
            return Err(format!(
                "condition on `{}` declares {} expected answers, at most one is allowed",
                dependent,
                declaration.answers.len()
            ));
        }
        let answer = declaration.answers.first();

        let comparator = match (&declaration.operator, declaration.answered) {
            (Some(operator), _) => operator.parse::<Comparator>()?,
            (None, Some(answered)) => {
                return Ok(RequirementRule::new(
                    dependent,
                    Comparator::Exists,
                    ExpectedValue::Boolean(answered),
                ));
            }
            (None, None) => {
                return Err(format!("condition on `{}` has no operator", dependent));
            }
        };

        let expected = match (comparator, answer) {
            (Comparator::Exists, Some(AnswerValue::Boolean(b))) => ExpectedValue::Boolean(*b),
            (Comparator::Exists, Some(_)) => {
                return Err(format!(
                    "`exists` condition on `{}` needs a boolean answer",
                    dependent
                ));
            }
            (Comparator::Exists, None) => {
                ExpectedValue::Boolean(declaration.answered.unwrap_or(true))
            }
            (_, Some(answer)) => self.expected_value(answer),
            (_, None) => {
                return Err(format!(
                    "`{}` condition on `{}` has no expected answer",
                    comparator, dependent
                ));
            }
        };

        if comparator.is_ordering() && !expected.is_ordered() {
            return Err(format!(
                "`{}` cannot compare the answer of `{}` with {}",
                comparator, dependent, expected
            ));
        }

        Ok(RequirementRule::new(dependent, comparator, expected))
    }

    fn expected_value(&self, answer: &AnswerValue) -> ExpectedValue {
        match answer {
            AnswerValue::Boolean(v) => ExpectedValue::Boolean(*v),
            AnswerValue::Integer(v) => ExpectedValue::Integer(*v),
            AnswerValue::Decimal(v) => ExpectedValue::Decimal(*v),
            AnswerValue::String(v) => ExpectedValue::Text(v.clone()),
            AnswerValue::Date(v) | AnswerValue::DateTime(v) | AnswerValue::Time(v) => {
                ExpectedValue::Date(v.clone())
            }
            AnswerValue::Coding(coding) => ExpectedValue::Choice(
                self.defaults
                    .choice_value(coding.system.as_deref(), coding.code.as_deref()),
            ),
        }
    }
}
