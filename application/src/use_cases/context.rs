//! Shared collaborators of one resolution

use crate::ports::progress::{NoProgress, ResolutionProgress};
use crate::ports::terminology::TerminologyResolver;
use std::sync::Arc;
use stepwise_domain::ResolverDefaults;

/// Everything a resolver needs besides the node it resolves.
///
/// Cloning is cheap; every spawned branch carries its own clone. Nothing in
/// here is mutated during a build.
#[derive(Clone)]
pub struct ResolutionContext {
    pub terminology: Arc<dyn TerminologyResolver>,
    pub defaults: Arc<ResolverDefaults>,
    pub progress: Arc<dyn ResolutionProgress>,
}

impl ResolutionContext {
    pub fn new(terminology: Arc<dyn TerminologyResolver>, defaults: ResolverDefaults) -> Self {
        Self {
            terminology,
            defaults: Arc::new(defaults),
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ResolutionProgress>) -> Self {
        self.progress = progress;
        self
    }
}
