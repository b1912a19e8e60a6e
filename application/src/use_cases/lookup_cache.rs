//! Per-build terminology lookup deduplication
//!
//! Questionnaires often point many questions at the same value set. The
//! cache makes sure every distinct reference reaches the underlying
//! resolver at most once per build, even when the lookups race.

use crate::ports::terminology::{TerminologyError, TerminologyResolver};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use stepwise_domain::ValueSet;
use tokio::sync::OnceCell;
use tracing::debug;

type Slot = Arc<OnceCell<Result<ValueSet, TerminologyError>>>;

/// A [`TerminologyResolver`] that memoizes another one
pub struct LookupCache {
    inner: Arc<dyn TerminologyResolver>,
    slots: Mutex<HashMap<String, Slot>>,
}

impl LookupCache {
    pub fn new(inner: Arc<dyn TerminologyResolver>) -> Self {
        Self {
            inner,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct references seen so far
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, reference: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap();
        Arc::clone(slots.entry(reference.to_string()).or_default())
    }
}

#[async_trait]
impl TerminologyResolver for LookupCache {
    async fn resolve(&self, reference: &str) -> Result<ValueSet, TerminologyError> {
        let slot = self.slot(reference);

        slot.get_or_init(|| async {
            debug!("Looking up value set {}", reference);
            self.inner.resolve(reference).await
        })
        .await
        .clone()
    }
}
