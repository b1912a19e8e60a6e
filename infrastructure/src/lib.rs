//! Infrastructure layer for stepwise
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: FHIR parsing, terminology sources,
//! questionnaire loading and configuration file loading.

pub mod config;
pub mod fhir;
pub mod source;
pub mod terminology;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileTerminologyConfig,
};
pub use fhir::{FhirFormatError, ParsedQuestionnaire, parse_questionnaire, parse_value_set};
pub use source::{LoadError, QuestionnaireLoader};
pub use terminology::{ChainedTerminology, ContainedValueSets, DirectoryTerminology};
