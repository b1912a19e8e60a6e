//! Domain error types

use serde::Serialize;
use thiserror::Error;

/// Recoverable errors raised while resolving a single node.
///
/// None of these stop the build: the node's step is omitted (or produced
/// without the failed rule) and the error travels upward with the result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionError {
    #[error("Cannot map question type \"{item_type}\" to an answer format [linkId: {link_id}]")]
    UnsupportedQuestionType { link_id: String, item_type: String },

    #[error("There are no choices in question [linkId: {link_id}]")]
    NoChoicesAvailable { link_id: String },

    #[error("Malformed enable-when condition [linkId: {link_id}]: {reason}")]
    MalformedRequirement { link_id: String, reason: String },

    #[error("Value set {reference} could not be resolved [linkId: {link_id}]: {reason}")]
    TerminologyLookup {
        link_id: String,
        reference: String,
        reason: String,
    },

    #[error(
        "Resolution branch failed [linkId: {}]: {reason}",
        .link_id.as_deref().unwrap_or("-")
    )]
    BranchFailed {
        link_id: Option<String>,
        reason: String,
    },
}

impl ResolutionError {
    /// Link identifier of the node that raised the error, if known
    pub fn link_id(&self) -> Option<&str> {
        match self {
            ResolutionError::UnsupportedQuestionType { link_id, .. }
            | ResolutionError::NoChoicesAvailable { link_id }
            | ResolutionError::MalformedRequirement { link_id, .. }
            | ResolutionError::TerminologyLookup { link_id, .. } => Some(link_id),
            ResolutionError::BranchFailed { link_id, .. } => link_id.as_deref(),
        }
    }
}

/// Fatal outcome of a task build
#[derive(Error, Debug)]
pub enum BuildTaskError {
    /// Nothing in the questionnaire produced a step; no task is returned.
    #[error("Questionnaire {task_id} did not produce any steps ({} errors)", .errors.len())]
    EmptyTask {
        task_id: String,
        errors: Vec<ResolutionError>,
    },
}

impl BuildTaskError {
    /// The recoverable errors collected before the build gave up
    pub fn errors(&self) -> &[ResolutionError] {
        match self {
            BuildTaskError::EmptyTask { errors, .. } => errors,
        }
    }
}
