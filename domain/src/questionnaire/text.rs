//! Title and text selection for steps

use super::definition::QuestionDefinition;
use crate::core::string::collapse_whitespace;

impl QuestionDefinition {
    /// Pick the best title and text to show for this question.
    ///
    /// The title comes from the first concept display, then the first concept
    /// code, then the `text` field. Text is whatever `text` remains, else the
    /// instruction extension, else the help extension. Help text never becomes
    /// a title.
    pub fn title_and_text(&self) -> (Option<String>, Option<String>) {
        let concept_title = self
            .concepts
            .iter()
            .find_map(|c| c.display.as_deref())
            .or_else(|| self.concepts.iter().find_map(|c| c.code.as_deref()));

        let (title, text) = match concept_title {
            Some(title) => (Some(title), self.text.as_deref()),
            None => (self.text.as_deref(), None),
        };
        let text = text
            .or(self.instruction.as_deref())
            .or(self.help.as_deref());

        (
            title.and_then(collapse_whitespace),
            text.and_then(collapse_whitespace),
        )
    }
}
