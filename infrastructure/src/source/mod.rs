//! Questionnaire file loading

use crate::fhir::{FhirFormatError, ParsedQuestionnaire, parse_questionnaire};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a questionnaire file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FhirFormatError,
    },
}

/// Reads FHIR questionnaires from disk
pub struct QuestionnaireLoader;

impl QuestionnaireLoader {
    /// Read and parse the questionnaire at `path`
    pub async fn load_file(path: &Path) -> Result<ParsedQuestionnaire, LoadError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let parsed = parse_questionnaire(&json).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded questionnaire {} from {}",
            parsed.questionnaire.id.as_deref().unwrap_or("<no id>"),
            path.display()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminology::{ChainedTerminology, ContainedValueSets, DirectoryTerminology};
    use std::sync::Arc;
    use stepwise_application::BuildTaskUseCase;
    use stepwise_domain::{AnswerFormat, Comparator, ExpectedValue};

    const SF36: &str = "http://sf-36.org/fhir/StructureDefinition/answers-3-levels";

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let parsed = QuestionnaireLoader::load_file(&fixture("Questionnaire_ValueSet-relative.json"))
            .await
            .unwrap();
        assert_eq!(
            parsed.questionnaire.id.as_deref(),
            Some("ValueSet-relative")
        );
        assert!(parsed.contained.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = QuestionnaireLoader::load_file(&fixture("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_wrong_resource() {
        let err = QuestionnaireLoader::load_file(&fixture("ValueSet_answers-3-levels.json"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format {
                source: FhirFormatError::UnexpectedResource { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_contained_value_set_builds_task() {
        let parsed = QuestionnaireLoader::load_file(&fixture("Questionnaire_ValueSet-contained.json"))
            .await
            .unwrap();
        let terminology = Arc::new(ContainedValueSets::new(parsed.contained));

        let task = BuildTaskUseCase::new(terminology)
            .execute(&parsed.questionnaire)
            .await
            .unwrap();

        assert_eq!(task.id, "ValueSet-contained");
        assert!(task.errors.is_empty());

        let choice_step = task.question("choice-valueSet").unwrap();
        assert_eq!(choice_step.title.as_deref(), Some("Limited simple choice?"));
        let options = &choice_step.answer_format.as_choice().unwrap().options;
        let rendered: Vec<_> = options
            .iter()
            .map(|o| (o.display.as_str(), o.value.clone()))
            .collect();
        assert_eq!(
            rendered,
            [
                ("Yes, limited a lot!", format!("{SF36} 1")),
                ("Yes, limited a little!", format!("{SF36} 2")),
                ("No, not limited at all!", format!("{SF36} 3")),
            ]
        );

        let boolean_step = task.question("choice-boolean").unwrap();
        assert_eq!(
            boolean_step.text.as_deref(),
            Some("And this is additional, very useful, instructional text.")
        );
        assert_eq!(boolean_step.answer_format, AnswerFormat::Boolean);
        assert!(!boolean_step.optional);
        assert_eq!(boolean_step.requirements.len(), 1);
        assert_eq!(boolean_step.requirements[0].comparator, Comparator::Equal);
        assert_eq!(
            boolean_step.requirements[0].expected,
            ExpectedValue::Choice(format!("{SF36} 3"))
        );
    }

    #[tokio::test]
    async fn test_relative_value_set_builds_task() {
        let parsed = QuestionnaireLoader::load_file(&fixture("Questionnaire_ValueSet-relative.json"))
            .await
            .unwrap();
        let terminology = ChainedTerminology::default()
            .with(Arc::new(ContainedValueSets::new(parsed.contained)))
            .with(Arc::new(DirectoryTerminology::new(fixture(""))));

        let task = BuildTaskUseCase::new(Arc::new(terminology))
            .execute(&parsed.questionnaire)
            .await
            .unwrap();

        assert_eq!(task.title.as_deref(), Some("Relative ValueSet"));

        let choice_step = task.question("choice-valueSet").unwrap();
        assert_eq!(choice_step.title.as_deref(), Some("A Limited Choice?"));
        let options = &choice_step.answer_format.as_choice().unwrap().options;
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].display, "Yes, limited a lot");
        assert_eq!(options[2].value, format!("{SF36} 3"));

        let boolean_step = task.question("choice-boolean").unwrap();
        assert_eq!(
            boolean_step.text.as_deref(),
            Some("And it has this additional instructional text.")
        );
    }
}
