//! Typed lookups of the questionnaire extensions the engine understands

use super::raw::RawExtension;
use stepwise_domain::Bound;

const SD: &str = "http://hl7.org/fhir/StructureDefinition/";

type Names = &'static [&'static str];

pub const MIN_OCCURS: Names = &["questionnaire-minOccurs"];
pub const MAX_OCCURS: Names = &["questionnaire-maxOccurs"];
pub const INSTRUCTION: Names = &["questionnaire-instruction"];
pub const HELP: Names = &["questionnaire-help"];
pub const UNITS: Names = &["questionnaire-units", "questionnaire-unit"];
pub const DEFAULT_VALUE: Names = &["questionnaire-defaultValue"];
pub const MIN_VALUE: Names = &["minValue", "questionnaire-minValue"];
pub const MAX_VALUE: Names = &["maxValue", "questionnaire-maxValue"];

/// The extensions of one node.
///
/// Names are matched against the full structure-definition URL.
pub struct Extensions<'a>(pub &'a [RawExtension]);

impl<'a> Extensions<'a> {
    fn named(&self, names: Names) -> impl Iterator<Item = &'a RawExtension> {
        self.0.iter().filter(move |ext| {
            ext.url
                .strip_prefix(SD)
                .is_some_and(|name| names.contains(&name))
        })
    }

    pub fn integer(&self, names: Names) -> Option<i64> {
        self.named(names).find_map(|ext| ext.value_integer)
    }

    pub fn string(&self, names: Names) -> Option<String> {
        self.named(names).find_map(|ext| ext.value_string.clone())
    }

    /// A unit as a plain string or as a coding's display/code
    pub fn unit(&self) -> Option<String> {
        self.named(UNITS).find_map(|ext| {
            ext.value_string.clone().or_else(|| {
                ext.value_coding
                    .as_ref()
                    .and_then(|c| c.display.clone().or_else(|| c.code.clone()))
            })
        })
    }

    /// A bound spread over one or more extensions carrying the value and
    /// the label separately
    pub fn bound(&self, names: Names) -> Option<Bound> {
        let bound = Bound {
            integer: self.integer(names),
            decimal: self.named(names).find_map(|ext| ext.value_decimal),
            label: self.string(names),
        };
        (bound != Bound::default()).then_some(bound)
    }
}
