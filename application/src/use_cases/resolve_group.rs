//! Resolve Group use case
//!
//! Fans a group's children out onto the runtime and joins them back in
//! declaration order, whatever order they finish in.

use super::context::ResolutionContext;
use super::resolve_question::QuestionResolver;
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::sync::Arc;
use stepwise_domain::{QuestionDefinition, RequirementRule, ResolutionError, ResolutionResult};
use tokio::task::JoinSet;
use tracing::{debug, error};

/// Resolves every child of a group concurrently
pub struct GroupResolver {
    context: ResolutionContext,
}

impl GroupResolver {
    pub fn new(context: ResolutionContext) -> Self {
        Self { context }
    }

    /// Resolve `questions`, each under the same inherited rules.
    ///
    /// Steps come back in child order. A child task that panics or is
    /// cancelled contributes no steps and a [`ResolutionError::BranchFailed`].
    pub fn resolve(
        self,
        questions: Vec<Arc<QuestionDefinition>>,
        inherited: Vec<RequirementRule>,
    ) -> BoxFuture<'static, ResolutionResult> {
        async move { self.resolve_children(questions, inherited).await }.boxed()
    }

    async fn resolve_children(
        self,
        questions: Vec<Arc<QuestionDefinition>>,
        inherited: Vec<RequirementRule>,
    ) -> ResolutionResult {
        if questions.is_empty() {
            return ResolutionResult::default();
        }

        debug!("Resolving group of {} children", questions.len());

        let mut join_set = JoinSet::new();
        let mut positions = HashMap::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            let resolver = QuestionResolver::new(self.context.clone());
            let question = Arc::clone(question);
            let inherited = inherited.clone();

            let handle = join_set.spawn(resolver.resolve(question, inherited));
            positions.insert(handle.id(), index);
        }

        let mut slots: Vec<Option<ResolutionResult>> = vec![None; questions.len()];
        let mut failures = Vec::new();

        while let Some(joined) = join_set.join_next_with_id().await {
            match joined {
                Ok((id, result)) => {
                    if let Some(&index) = positions.get(&id) {
                        slots[index] = Some(result);
                    }
                }
                Err(e) => {
                    let link_id = positions
                        .get(&e.id())
                        .and_then(|&index| questions[index].link_id.clone());
                    error!(
                        "Resolution branch {} failed: {}",
                        link_id.as_deref().unwrap_or("-"),
                        e
                    );
                    failures.push(ResolutionError::BranchFailed {
                        link_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let mut result: ResolutionResult = slots.into_iter().flatten().collect();
        result.extend_errors(failures);
        result
    }
}
