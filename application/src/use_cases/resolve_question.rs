//! Resolve Question use case
//!
//! Turns one question node into its own step (if any), followed by the steps
//! of its nested groups.

use super::context::ResolutionContext;
use super::resolve_answer_format::AnswerFormatResolver;
use super::resolve_group::GroupResolver;
use futures::future::{BoxFuture, FutureExt, join_all};
use std::sync::Arc;
use stepwise_domain::{
    InstructionStep, QuestionDefinition, QuestionStep, RequirementExtractor, RequirementRule,
    ResolutionResult, Step,
};
use tracing::{debug, warn};
use uuid::Uuid;

/// Resolves a single question node
pub struct QuestionResolver {
    context: ResolutionContext,
}

impl QuestionResolver {
    pub fn new(context: ResolutionContext) -> Self {
        Self { context }
    }

    /// Resolve `question` under the rules inherited from its ancestors.
    ///
    /// The returned future owns everything it touches, so it can be spawned.
    pub fn resolve(
        self,
        question: Arc<QuestionDefinition>,
        inherited: Vec<RequirementRule>,
    ) -> BoxFuture<'static, ResolutionResult> {
        async move { self.resolve_node(&question, inherited).await }.boxed()
    }

    async fn resolve_node(
        &self,
        question: &QuestionDefinition,
        inherited: Vec<RequirementRule>,
    ) -> ResolutionResult {
        let link_id = question
            .link_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let (title, text) = question.title_and_text();
        let mut result = ResolutionResult::default();

        // Answer format first; this may wait on terminology
        let format = AnswerFormatResolver::new(&self.context)
            .resolve(question, &link_id)
            .await;

        let extraction =
            RequirementExtractor::new(&self.context.defaults).extract(&link_id, &question.enable_when);
        for error in &extraction.errors {
            warn!("{}", error);
        }
        result.extend_errors(extraction.errors);

        let mut requirements = inherited;
        requirements.extend(extraction.rules);

        let produced_step = match format {
            Ok(Some(answer_format)) => {
                result.push_step(Step::Question(QuestionStep {
                    id: link_id.clone(),
                    title,
                    text,
                    item_type: question.item_type.clone(),
                    answer_format,
                    optional: !question.is_required(),
                    requirements: requirements.clone(),
                }));
                true
            }
            Err(error) => {
                warn!("{}", error);
                result.push_error(error);
                false
            }
            Ok(None) if title.is_some() || text.is_some() => {
                result.push_step(Step::Instruction(InstructionStep {
                    id: link_id.clone(),
                    title,
                    text,
                    requirements: requirements.clone(),
                }));
                true
            }
            Ok(None) => {
                debug!("Nothing to show [linkId: {}]", link_id);
                false
            }
        };

        self.context
            .progress
            .on_node_complete(&link_id, produced_step, result.errors.len());

        if !question.groups.is_empty() {
            let branches = question.groups.iter().map(|group| {
                GroupResolver::new(self.context.clone())
                    .resolve(group.questions.clone(), requirements.clone())
            });
            for nested in join_all(branches).await {
                result.append(nested);
            }
        }

        result
    }
}
