//! Test mocks shared by the resolver tests

use crate::ports::terminology::{TerminologyError, TerminologyResolver};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use stepwise_domain::{Coding, ValueSet};

pub const SF36: &str = "http://sf-36.org/fhir/StructureDefinition/answers-3-levels";

/// In-memory terminology with optional per-reference latency
#[derive(Default)]
pub struct MockTerminology {
    value_sets: HashMap<String, ValueSet>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    calls: Mutex<Vec<String>>,
    total: AtomicUsize,
}

impl MockTerminology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reference: &str, value_set: ValueSet) -> Self {
        self.value_sets.insert(reference.to_string(), value_set);
        self
    }

    pub fn with_delay(mut self, reference: &str, delay: Duration) -> Self {
        self.delays.insert(reference.to_string(), delay);
        self
    }

    /// Looking `reference` up panics inside the resolving task
    pub fn with_panic(mut self, reference: &str) -> Self {
        self.panics.insert(reference.to_string());
        self
    }

    pub fn calls_for(&self, reference: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.as_str() == reference)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TerminologyResolver for MockTerminology {
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(reference.to_string());

        if self.panics.contains(reference) {
            panic!("terminology lookup for {} exploded", reference);
        }

        if let Some(delay) = self.delays.get(reference) {
            tokio::time::sleep(*delay).await;
        }

        self.value_sets
            .get(reference)
            .cloned()
            .ok_or_else(|| TerminologyError::NotFound(reference.to_string()))
    }
}

/// The three-level SF-36 answer set
pub fn sf36_levels() -> ValueSet {
    ValueSet::from_expansion(vec![
        Coding::new(Some(SF36), Some("1"), Some("Yes, limited a lot")),
        Coding::new(Some(SF36), Some("2"), Some("Yes, limited a little")),
        Coding::new(Some(SF36), Some("3"), Some("No, not limited at all")),
    ])
}
