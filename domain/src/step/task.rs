//! The finished task handed to the presentation layer

use super::entities::{QuestionStep, Step};
use crate::core::error::ResolutionError;
use serde::Serialize;

/// An ordered interview built from a questionnaire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub steps: Vec<Step>,
    /// Recoverable errors met while building; the caller decides whether a
    /// partial task is acceptable
    pub errors: Vec<ResolutionError>,
}

impl Task {
    pub fn new(id: impl Into<String>, steps: Vec<Step>, errors: Vec<ResolutionError>) -> Self {
        Self {
            id: id.into(),
            title: None,
            steps,
            errors,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Find a step by its identifier
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// Find a question step by its identifier
    pub fn question(&self, id: &str) -> Option<&QuestionStep> {
        self.step(id).and_then(Step::as_question)
    }

    pub fn question_count(&self) -> usize {
        self.steps.iter().filter(|s| s.as_question().is_some()).count()
    }

    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}
