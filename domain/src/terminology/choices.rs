//! Turning coded concepts into choice options

use super::value_set::ValueSet;
use crate::answer::format::ChoiceOption;
use crate::config::ResolverDefaults;
use crate::questionnaire::definition::Coding;

fn option(
    defaults: &ResolverDefaults,
    system: Option<&str>,
    code: Option<&str>,
    display: Option<&str>,
) -> ChoiceOption {
    let code = defaults.code_or_placeholder(code);
    ChoiceOption {
        display: display.unwrap_or(code).to_string(),
        value: defaults.choice_value(system, Some(code)),
    }
}

/// One option per coding, in order
pub fn options_from_codings(codings: &[Coding], defaults: &ResolverDefaults) -> Vec<ChoiceOption> {
    codings
        .iter()
        .map(|c| {
            option(
                defaults,
                c.system.as_deref(),
                c.code.as_deref(),
                c.display.as_deref(),
            )
        })
        .collect()
}

impl ValueSet {
    /// Choice options from the first non-empty source.
    ///
    /// Sources are tried in order: the expansion, the concepts the value set
    /// defines, then the composed includes (flattened in declaration order).
    pub fn choice_options(&self, defaults: &ResolverDefaults) -> Vec<ChoiceOption> {
        if !self.expansion.is_empty() {
            return options_from_codings(&self.expansion, defaults);
        }

        if let Some(defined) = self.defined.as_ref().filter(|d| !d.concepts.is_empty()) {
            return defined
                .concepts
                .iter()
                .map(|c| {
                    option(
                        defaults,
                        defined.system.as_deref(),
                        c.code.as_deref(),
                        c.display.as_deref(),
                    )
                })
                .collect();
        }

        self.includes
            .iter()
            .flat_map(|include| {
                include.concepts.iter().map(move |c| {
                    option(
                        defaults,
                        include.system.as_deref(),
                        c.code.as_deref(),
                        c.display.as_deref(),
                    )
                })
            })
            .collect()
    }
}
