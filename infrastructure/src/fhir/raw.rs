//! Raw FHIR JSON shapes
//!
//! These structs mirror the JSON exactly as it arrives. One `RawItem` covers
//! DSTU2 groups, DSTU2 questions and the later `item` layout; unknown fields
//! are ignored and malformed fragments are dropped field by field. Nothing
//! outside the `fhir` module sees these types.

use super::lenient;
use serde::Deserialize;

/// A `Questionnaire` resource
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawQuestionnaire {
    #[serde(deserialize_with = "lenient::optional")]
    pub resource_type: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    /// DSTU2 root group
    #[serde(deserialize_with = "lenient::optional")]
    pub group: Option<RawItem>,
    /// Items of the later layout
    #[serde(deserialize_with = "lenient::list")]
    pub item: Vec<RawItem>,
    /// Contained resources, kept as JSON until their type is known
    #[serde(deserialize_with = "lenient::list")]
    pub contained: Vec<serde_json::Value>,
}

/// A group, question or item node
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawItem {
    #[serde(deserialize_with = "lenient::optional")]
    pub link_id: Option<String>,
    /// DSTU2 group title
    #[serde(deserialize_with = "lenient::optional")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub text: Option<String>,
    #[serde(alias = "code", deserialize_with = "lenient::list")]
    pub concept: Vec<RawCoding>,
    #[serde(rename = "type", deserialize_with = "lenient::optional")]
    pub item_type: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub required: Option<bool>,
    #[serde(deserialize_with = "lenient::optional")]
    pub repeats: Option<bool>,
    /// Value set reference (DSTU2, STU3)
    #[serde(deserialize_with = "lenient::optional")]
    pub options: Option<RawReference>,
    /// Value set canonical (R4)
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_value_set: Option<String>,
    #[serde(alias = "answerOption", deserialize_with = "lenient::list")]
    pub option: Vec<RawOption>,
    #[serde(deserialize_with = "lenient::list")]
    pub initial: Vec<RawInitial>,
    #[serde(deserialize_with = "lenient::list")]
    pub enable_when: Vec<RawEnableWhen>,
    #[serde(deserialize_with = "lenient::list")]
    pub extension: Vec<RawExtension>,
    /// DSTU2 questions of a group
    #[serde(deserialize_with = "lenient::list")]
    pub question: Vec<RawItem>,
    /// DSTU2 sub-groups of a group or question
    #[serde(deserialize_with = "lenient::list")]
    pub group: Vec<RawItem>,
    /// Children in the later layout
    #[serde(deserialize_with = "lenient::list")]
    pub item: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCoding {
    #[serde(deserialize_with = "lenient::optional")]
    pub system: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReference {
    #[serde(deserialize_with = "lenient::optional")]
    pub reference: Option<String>,
}

/// An inline answer option.
///
/// DSTU2 lists bare codings; later versions wrap them in `valueCoding`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOption {
    #[serde(deserialize_with = "lenient::optional")]
    pub system: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub display: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub value_coding: Option<RawCoding>,
    #[serde(deserialize_with = "lenient::optional")]
    pub value_string: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInitial {
    #[serde(deserialize_with = "lenient::optional")]
    pub value_integer: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEnableWhen {
    #[serde(deserialize_with = "lenient::optional")]
    pub question: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub operator: Option<String>,
    #[serde(alias = "hasAnswer", deserialize_with = "lenient::optional")]
    pub answered: Option<bool>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_boolean: Option<bool>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_integer: Option<i64>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_decimal: Option<f64>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_string: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_date_time: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_time: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub answer_coding: Option<RawCoding>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawExtension {
    pub url: String,
    #[serde(deserialize_with = "lenient::optional")]
    pub value_integer: Option<i64>,
    #[serde(deserialize_with = "lenient::optional")]
    pub value_decimal: Option<f64>,
    #[serde(deserialize_with = "lenient::optional")]
    pub value_string: Option<String>,
    #[serde(deserialize_with = "lenient::optional")]
    pub value_coding: Option<RawCoding>,
}

/// A `ValueSet` resource
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawValueSet {
    pub resource_type: Option<String>,
    pub id: Option<String>,
    pub expansion: Option<RawExpansion>,
    /// DSTU2 inline code system; `define` in earlier drafts
    #[serde(alias = "define")]
    pub code_system: Option<RawCodeSystem>,
    pub compose: Option<RawCompose>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExpansion {
    pub contains: Vec<RawContains>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawContains {
    pub system: Option<String>,
    pub code: Option<String>,
    pub display: Option<String>,
    pub contains: Vec<RawContains>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCodeSystem {
    pub system: Option<String>,
    pub concept: Vec<RawConcept>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConcept {
    pub code: Option<String>,
    pub display: Option<String>,
    pub concept: Vec<RawConcept>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCompose {
    pub include: Vec<RawInclude>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInclude {
    pub system: Option<String>,
    pub concept: Vec<RawConcept>,
}
