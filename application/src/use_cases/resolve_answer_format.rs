//! Resolve Answer Format use case
//!
//! Maps one question to its answer format, resolving choice options through
//! the terminology port when the declaration alone is not enough.

use super::context::ResolutionContext;
use stepwise_domain::terminology::options_from_codings;
use stepwise_domain::{
    AnswerFormat, ChoiceFormat, ChoiceOption, FormatPlan, QuestionDefinition, ResolutionError,
    plan_answer_format,
};
use tracing::{debug, warn};

/// Resolves the answer format of a single question
pub struct AnswerFormatResolver<'a> {
    context: &'a ResolutionContext,
}

impl<'a> AnswerFormatResolver<'a> {
    pub fn new(context: &'a ResolutionContext) -> Self {
        Self { context }
    }

    /// Resolve the format.
    ///
    /// Returns `Ok(None)` for items that intentionally carry no answer
    /// (display text, group headers).
    pub async fn resolve(
        &self,
        question: &QuestionDefinition,
        link_id: &str,
    ) -> Result<Option<AnswerFormat>, ResolutionError> {
        if question.item_type.is_none() {
            warn!(
                "Question «{}» does not have an answer type, assuming text answer [linkId: {}]",
                question.text.as_deref().unwrap_or_default(),
                link_id
            );
        }

        match plan_answer_format(question, link_id)? {
            FormatPlan::Ready(format) => Ok(Some(format)),
            FormatPlan::NoAnswer => Ok(None),
            FormatPlan::Choices(style) => {
                let options = self.resolve_choices(question, link_id).await?;
                Ok(Some(AnswerFormat::Choice(ChoiceFormat { style, options })))
            }
        }
    }

    /// Options from the inline list, else from the referenced value set
    async fn resolve_choices(
        &self,
        question: &QuestionDefinition,
        link_id: &str,
    ) -> Result<Vec<ChoiceOption>, ResolutionError> {
        let defaults = self.context.defaults.as_ref();

        let inline = options_from_codings(&question.options, defaults);
        if !inline.is_empty() {
            debug!("Using {} inline options [linkId: {}]", inline.len(), link_id);
            return Ok(inline);
        }

        let no_choices = || ResolutionError::NoChoicesAvailable {
            link_id: link_id.to_string(),
        };

        let Some(reference) = question.value_set.as_deref() else {
            return Err(no_choices());
        };

        debug!("Resolving value set {} [linkId: {}]", reference, link_id);
        let value_set = self
            .context
            .terminology
            .resolve(reference)
            .await
            .map_err(|e| ResolutionError::TerminologyLookup {
                link_id: link_id.to_string(),
                reference: reference.to_string(),
                reason: e.to_string(),
            })?;

        let options = value_set.choice_options(defaults);
        if options.is_empty() {
            Err(no_choices())
        } else {
            Ok(options)
        }
    }
}
