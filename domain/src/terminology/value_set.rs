//! Value set entities

use crate::questionnaire::definition::Coding;

/// A concept defined or included under a single system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concept {
    pub code: Option<String>,
    pub display: Option<String>,
}

impl Concept {
    pub fn new(code: Option<&str>, display: Option<&str>) -> Self {
        Self {
            code: code.map(str::to_string),
            display: display.map(str::to_string),
        }
    }
}

/// Concepts the value set defines itself, all under one system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinedConcepts {
    pub system: Option<String>,
    pub concepts: Vec<Concept>,
}

/// One `compose.include` entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptInclude {
    pub system: Option<String>,
    pub concepts: Vec<Concept>,
}

/// A resolved value set.
///
/// A value set can list its concepts in three places; see
/// [`ValueSet::choice_options`] for which one is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    pub id: Option<String>,
    /// `expansion.contains`
    pub expansion: Vec<Coding>,
    /// Concepts defined by the value set (`codeSystem` / `define`)
    pub defined: Option<DefinedConcepts>,
    /// `compose.include`
    pub includes: Vec<ConceptInclude>,
}

impl ValueSet {
    pub fn from_expansion(expansion: Vec<Coding>) -> Self {
        Self {
            expansion,
            ..Self::default()
        }
    }

    pub fn from_defined(system: Option<&str>, concepts: Vec<Concept>) -> Self {
        Self {
            defined: Some(DefinedConcepts {
                system: system.map(str::to_string),
                concepts,
            }),
            ..Self::default()
        }
    }

    pub fn from_includes(includes: Vec<ConceptInclude>) -> Self {
        Self {
            includes,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether no source lists a single concept
    pub fn is_empty(&self) -> bool {
        self.expansion.is_empty()
            && self.defined.as_ref().is_none_or(|d| d.concepts.is_empty())
            && self.includes.iter().all(|i| i.concepts.is_empty())
    }
}
