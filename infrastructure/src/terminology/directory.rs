//! Value sets stored as JSON files in a directory

use crate::fhir::parse_value_set;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stepwise_application::{TerminologyError, TerminologyResolver};
use stepwise_domain::ValueSet;
use tracing::debug;

/// Resolves references to files in one directory.
///
/// The value set id is the last path segment of the reference, so
/// `ValueSet/answers` and `http://example.org/fhir/ValueSet/answers` both
/// look for `answers.json`, then `ValueSet_answers.json`.
#[derive(Debug, Clone)]
pub struct DirectoryTerminology {
    root: PathBuf,
}

impl DirectoryTerminology {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, reference: &str) -> Vec<PathBuf> {
        let id = reference
            .split(['?', '|'])
            .next()
            .unwrap_or(reference)
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .trim_start_matches('#');

        if id.is_empty() || id == "." || id == ".." {
            return Vec::new();
        }

        vec![
            self.root.join(format!("{id}.json")),
            self.root.join(format!("ValueSet_{id}.json")),
        ]
    }
}

#[async_trait]
impl TerminologyResolver for DirectoryTerminology {
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
        for path in self.candidates(reference) {
            let json = match tokio::fs::read_to_string(&path).await {
                Ok(json) => json,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(TerminologyError::Unavailable(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )));
                }
            };

            debug!("Reading value set {} from {}", reference, path.display());
            return parse_value_set(&json).map_err(|e| TerminologyError::Invalid {
                reference: reference.to_string(),
                reason: e.to_string(),
            });
        }

        Err(TerminologyError::NotFound(reference.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &str = include_str!("../../fixtures/ValueSet_answers-3-levels.json");

    #[tokio::test]
    async fn test_prefixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ValueSet_answers-3-levels.json"), LEVELS).unwrap();

        let terminology = DirectoryTerminology::new(dir.path());
        let value_set = terminology.resolve("ValueSet/answers-3-levels").await.unwrap();

        assert_eq!(value_set.id.as_deref(), Some("answers-3-levels"));
        assert_eq!(value_set.defined.unwrap().concepts.len(), 3);
    }

    #[tokio::test]
    async fn test_plain_file_name_from_canonical_url() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("answers-3-levels.json"), LEVELS).unwrap();

        let terminology = DirectoryTerminology::new(dir.path());
        assert!(
            terminology
                .resolve("http://sf-36.org/fhir/ValueSet/answers-3-levels|1.0")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectoryTerminology::new(dir.path())
            .resolve("ValueSet/nothing")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unparsable_file_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let err = DirectoryTerminology::new(dir.path())
            .resolve("ValueSet/broken")
            .await
            .unwrap_err();
        assert!(matches!(err, TerminologyError::Invalid { .. }));
    }

    #[test]
    fn test_no_path_escape() {
        let terminology = DirectoryTerminology::new("/tmp/vs");
        assert!(terminology.candidates("ValueSet/..").is_empty());
        assert!(terminology.candidates("").is_empty());
    }
}
