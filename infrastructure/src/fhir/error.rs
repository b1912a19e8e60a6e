//! Error types for FHIR parsing

use thiserror::Error;

/// Errors raised while turning FHIR JSON into domain types
#[derive(Error, Debug)]
pub enum FhirFormatError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a {expected} resource, found {found}")]
    UnexpectedResource {
        expected: &'static str,
        found: String,
    },
}

impl FhirFormatError {
    pub(crate) fn check_resource_type(
        expected: &'static str,
        found: Option<&str>,
    ) -> Result<(), FhirFormatError> {
        match found {
            Some(found) if found != expected => Err(FhirFormatError::UnexpectedResource {
                expected,
                found: found.to_string(),
            }),
            _ => Ok(()),
        }
    }
}
