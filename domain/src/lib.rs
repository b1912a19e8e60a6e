//! Domain layer for stepwise
//!
//! This crate contains the questionnaire definition tree, the resolved step
//! model and the pure mapping rules between them. It has no dependencies on
//! infrastructure, async runtimes or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Definition tree
//!
//! A [`Questionnaire`] owns a root [`GroupDefinition`]; each group owns an
//! ordered list of [`QuestionDefinition`]s, and each question may own nested
//! groups of its own. The tree is read-only once parsed.
//!
//! ## Steps
//!
//! Resolution turns the tree into an ordered list of [`Step`]s packaged in a
//! [`Task`]. Question steps carry an [`AnswerFormat`] and the
//! [`RequirementRule`]s inherited from every ancestor.

pub mod answer;
pub mod config;
pub mod core;
pub mod questionnaire;
pub mod requirement;
pub mod step;
pub mod terminology;

// Re-export commonly used types
pub use answer::{
    format::{AnswerFormat, ChoiceFormat, ChoiceOption, ChoiceStyle, NumericFormat, NumericStyle, ScaleFormat},
    plan::{FormatPlan, choice_style, plan_answer_format},
};
pub use config::{OutputFormat, ResolverDefaults};
pub use core::error::{BuildTaskError, ResolutionError};
pub use questionnaire::{
    definition::{AnswerValue, Bound, Coding, EnableWhen, GroupDefinition, QuestionDefinition, Questionnaire},
    item_type::ItemType,
};
pub use requirement::{
    extract::{Extraction, RequirementExtractor},
    rule::{Comparator, ExpectedValue, RequirementRule},
};
pub use step::{
    entities::{InstructionStep, QuestionStep, Step},
    result::ResolutionResult,
    task::Task,
};
pub use terminology::value_set::{Concept, ConceptInclude, DefinedConcepts, ValueSet};
