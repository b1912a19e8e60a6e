//! Terminology resolver port.
//!
//! Defines the interface for resolving a value set reference to its coded
//! concepts. Infrastructure adapters implement this to read contained value
//! sets, local files, or anything else that can answer.

use async_trait::async_trait;
use stepwise_domain::ValueSet;
use thiserror::Error;

/// Errors a terminology adapter can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerminologyError {
    /// The adapter does not know the reference; a chain may try the next one
    #[error("Value set not found: {0}")]
    NotFound(String),

    /// The adapter could not be reached or read
    #[error("Terminology not available: {0}")]
    Unavailable(String),

    /// The value set was found but could not be understood
    #[error("Invalid value set {reference}: {reason}")]
    Invalid { reference: String, reason: String },
}

impl TerminologyError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TerminologyError::NotFound(_))
    }
}

/// Port for resolving value set references.
///
/// Implementations may be called concurrently from many resolution
/// branches. Time bounds, if any, are the implementation's business.
#[async_trait]
pub trait TerminologyResolver: Send + Sync {
    /// Resolve a single reference to its value set.
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError>;
}

/// A resolver that knows nothing; every lookup is `NotFound`.
pub struct NoTerminology;

#[async_trait]
impl TerminologyResolver for NoTerminology {
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
        Err(TerminologyError::NotFound(reference.to_string()))
    }
}
