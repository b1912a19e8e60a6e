//! FHIR JSON parsing
//!
//! Reads `Questionnaire` and `ValueSet` resources into the domain model.
//! Extensions are looked up once here, so the resolvers only ever see typed
//! fields.

pub mod error;
mod extension;
mod lenient;
pub mod questionnaire;
mod raw;
pub mod value_set;

pub use error::FhirFormatError;
pub use questionnaire::{ParsedQuestionnaire, parse_questionnaire};
pub use value_set::{parse_value_set, value_set_from_json};
