//! Value sets contained in the questionnaire itself

use async_trait::async_trait;
use std::collections::HashMap;
use stepwise_application::{TerminologyError, TerminologyResolver};
use stepwise_domain::ValueSet;

/// Resolves `#id` references against the questionnaire's contained value sets
#[derive(Debug, Default)]
pub struct ContainedValueSets {
    by_id: HashMap<String, ValueSet>,
}

impl ContainedValueSets {
    /// Index `value_sets` by id; value sets without an id cannot be referenced
    pub fn new(value_sets: Vec<ValueSet>) -> Self {
        let by_id = value_sets
            .into_iter()
            .filter_map(|vs| vs.id.clone().map(|id| (id, vs)))
            .collect();
        Self { by_id }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[async_trait]
impl TerminologyResolver for ContainedValueSets {
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
        reference
            .strip_prefix('#')
            .and_then(|id| self.by_id.get(id))
            .cloned()
            .ok_or_else(|| TerminologyError::NotFound(reference.to_string()))
    }
}
