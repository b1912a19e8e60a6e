//! Build Task use case
//!
//! Turns a whole questionnaire into a [`Task`]: an ordered list of steps
//! plus the recoverable errors met on the way.

use super::context::ResolutionContext;
use super::lookup_cache::LookupCache;
use super::resolve_group::GroupResolver;
use crate::config::ResolutionParams;
use crate::ports::progress::{NoProgress, ResolutionProgress};
use crate::ports::terminology::TerminologyResolver;
use std::sync::Arc;
use stepwise_domain::{BuildTaskError, Questionnaire, Task};
use tracing::{info, warn};
use uuid::Uuid;

/// Use case for building a task from a questionnaire
pub struct BuildTaskUseCase<T: TerminologyResolver + 'static> {
    terminology: Arc<T>,
    params: ResolutionParams,
}

impl<T: TerminologyResolver + 'static> BuildTaskUseCase<T> {
    pub fn new(terminology: Arc<T>) -> Self {
        Self {
            terminology,
            params: ResolutionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ResolutionParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, questionnaire: &Questionnaire) -> Result<Task, BuildTaskError> {
        self.execute_with_progress(questionnaire, Arc::new(NoProgress))
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        questionnaire: &Questionnaire,
        progress: Arc<dyn ResolutionProgress>,
    ) -> Result<Task, BuildTaskError> {
        let task_id = questionnaire
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let children = questionnaire.root.questions.clone();

        info!(
            "Building task {} from {} top-level items",
            task_id,
            children.len()
        );
        progress.on_build_start(&task_id, children.len());

        let context = ResolutionContext::new(self.terminology(), self.params.defaults.clone())
            .with_progress(Arc::clone(&progress));

        let result = GroupResolver::new(context).resolve(children, vec![]).await;

        progress.on_build_complete(&task_id, result.steps.len(), result.errors.len());

        if result.steps.is_empty() {
            warn!(
                "Task {} has no steps ({} errors)",
                task_id,
                result.errors.len()
            );
            return Err(BuildTaskError::EmptyTask {
                task_id,
                errors: result.errors,
            });
        }

        info!(
            "Task {} built with {} steps and {} errors",
            task_id,
            result.steps.len(),
            result.errors.len()
        );

        Ok(Task::new(task_id, result.steps, result.errors).with_title(questionnaire.title.clone()))
    }

    /// The resolver for one build; a fresh cache when deduplication is on
    fn terminology(&self) -> Arc<dyn TerminologyResolver> {
        let inner: Arc<dyn TerminologyResolver> = self.terminology.clone();
        if self.params.deduplicate_lookups {
            Arc::new(LookupCache::new(inner))
        } else {
            inner
        }
    }
}
