//! Resolution result: ordered steps plus recoverable errors

use super::entities::Step;
use crate::core::error::ResolutionError;

/// What resolving a node (or a whole group) produced.
///
/// Steps and errors travel together: an error never discards steps that
/// were already produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionResult {
    pub steps: Vec<Step>,
    pub errors: Vec<ResolutionError>,
}

impl ResolutionResult {
    pub fn new(steps: Vec<Step>, errors: Vec<ResolutionError>) -> Self {
        Self { steps, errors }
    }

    pub fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn push_error(&mut self, error: ResolutionError) {
        self.errors.push(error);
    }

    pub fn extend_errors(&mut self, errors: impl IntoIterator<Item = ResolutionError>) {
        self.errors.extend(errors);
    }

    /// Append another result after this one, keeping both orders
    pub fn append(&mut self, other: ResolutionResult) {
        self.steps.extend(other.steps);
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl FromIterator<ResolutionResult> for ResolutionResult {
    fn from_iter<I: IntoIterator<Item = ResolutionResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut acc, next| {
            acc.append(next);
            acc
        })
    }
}
