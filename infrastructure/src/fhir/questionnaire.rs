//! `Questionnaire` JSON to the definition tree
//!
//! Both layouts end up in the same tree. In the DSTU2 layout every group
//! becomes a `group`-typed question owning one nested group of its
//! children, so group titles and conditions survive; the root group's title
//! names the questionnaire.

use super::error::FhirFormatError;
use super::extension::{self, Extensions};
use super::raw::{RawCoding, RawEnableWhen, RawItem, RawOption, RawQuestionnaire};
use super::value_set::value_set_from_json;
use stepwise_domain::{
    AnswerValue, Coding, EnableWhen, GroupDefinition, ItemType, QuestionDefinition, Questionnaire,
    ValueSet,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// A parsed questionnaire plus the value sets it contains
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuestionnaire {
    pub questionnaire: Questionnaire,
    pub contained: Vec<ValueSet>,
}

/// Parse a `Questionnaire` resource from JSON text
pub fn parse_questionnaire(json: &str) -> Result<ParsedQuestionnaire, FhirFormatError> {
    let raw: RawQuestionnaire = serde_json::from_str(json)?;
    FhirFormatError::check_resource_type("Questionnaire", raw.resource_type.as_deref())?;

    let contained = contained_value_sets(raw.contained);

    let questionnaire = match &raw.group {
        Some(root) => {
            let converter = Converter { dstu2: true };
            Questionnaire {
                id: raw.id,
                title: root.title.clone().or(raw.title),
                root: converter.group(root),
            }
        }
        None => {
            let converter = Converter { dstu2: false };
            Questionnaire {
                id: raw.id,
                title: raw.title,
                root: converter.items(&raw.item),
            }
        }
    };

    debug!(
        "Parsed questionnaire {} with {} top-level items and {} contained value sets",
        questionnaire.id.as_deref().unwrap_or("<no id>"),
        questionnaire.root.questions.len(),
        contained.len()
    );

    Ok(ParsedQuestionnaire {
        questionnaire,
        contained,
    })
}

fn contained_value_sets(resources: Vec<serde_json::Value>) -> Vec<ValueSet> {
    resources
        .into_iter()
        .filter(|r| r.get("resourceType").and_then(|t| t.as_str()) == Some("ValueSet"))
        .filter_map(|r| match value_set_from_json(r) {
            Ok(value_set) => Some(value_set),
            Err(e) => {
                warn!("Skipping contained value set: {}", e);
                None
            }
        })
        .collect()
}

struct Converter {
    /// DSTU2 conditions have no operator; an expected answer means equality
    dstu2: bool,
}

impl Converter {
    /// A DSTU2 group's children: questions first, then sub-groups
    fn group(&self, group: &RawItem) -> GroupDefinition {
        let questions = group
            .question
            .iter()
            .map(|q| self.question(q))
            .chain(group.group.iter().map(|g| self.group_header(g)))
            .map(Arc::new)
            .collect();

        GroupDefinition {
            link_id: group.link_id.clone(),
            questions,
        }
    }

    /// A DSTU2 group as a `group` question that owns its children
    fn group_header(&self, group: &RawItem) -> QuestionDefinition {
        let mut header = self.common(group);
        header.item_type = Some(ItemType::Group);
        if let Some(title) = &group.title {
            header.instruction = group.text.clone().or(header.instruction);
            header.text = Some(title.clone());
        }
        header.groups = vec![self.group(group)];
        header
    }

    /// A DSTU2 question
    fn question(&self, question: &RawItem) -> QuestionDefinition {
        let mut definition = self.common(question);
        definition.groups = question
            .group
            .iter()
            .map(|g| GroupDefinition::new(vec![self.group_header(g)]))
            .collect();
        definition
    }

    /// Items of the later layout
    fn items(&self, items: &[RawItem]) -> GroupDefinition {
        GroupDefinition {
            link_id: None,
            questions: items.iter().map(|i| Arc::new(self.item(i))).collect(),
        }
    }

    fn item(&self, item: &RawItem) -> QuestionDefinition {
        let mut definition = self.common(item);
        if !item.item.is_empty() {
            definition.groups = vec![GroupDefinition {
                link_id: item.link_id.clone(),
                ..self.items(&item.item)
            }];
        }
        definition
    }

    /// Everything both layouts share, extensions included
    fn common(&self, raw: &RawItem) -> QuestionDefinition {
        let ext = Extensions(&raw.extension);

        QuestionDefinition {
            link_id: raw.link_id.clone(),
            item_type: raw.item_type.as_deref().map(ItemType::parse),
            concepts: raw.concept.iter().map(coding).collect(),
            text: raw.text.clone(),
            instruction: ext.string(extension::INSTRUCTION),
            help: ext.string(extension::HELP),
            required: raw.required,
            repeats: raw.repeats,
            min_occurs: ext.integer(extension::MIN_OCCURS),
            max_occurs: ext.integer(extension::MAX_OCCURS),
            min_value: ext.bound(extension::MIN_VALUE),
            max_value: ext.bound(extension::MAX_VALUE),
            default_value: ext
                .integer(extension::DEFAULT_VALUE)
                .or_else(|| raw.initial.iter().find_map(|i| i.value_integer)),
            unit: ext.unit(),
            options: raw.option.iter().filter_map(option_coding).collect(),
            value_set: raw
                .options
                .as_ref()
                .and_then(|o| o.reference.clone())
                .or_else(|| raw.answer_value_set.clone()),
            enable_when: raw.enable_when.iter().map(|e| self.enable_when(e)).collect(),
            groups: Vec::new(),
        }
    }

    fn enable_when(&self, raw: &RawEnableWhen) -> EnableWhen {
        let mut answers = Vec::new();
        if let Some(v) = raw.answer_boolean {
            answers.push(AnswerValue::Boolean(v));
        }
        if let Some(v) = raw.answer_integer {
            answers.push(AnswerValue::Integer(v));
        }
        if let Some(v) = raw.answer_decimal {
            answers.push(AnswerValue::Decimal(v));
        }
        if let Some(v) = &raw.answer_string {
            answers.push(AnswerValue::String(v.clone()));
        }
        if let Some(v) = &raw.answer_date {
            answers.push(AnswerValue::Date(v.clone()));
        }
        if let Some(v) = &raw.answer_date_time {
            answers.push(AnswerValue::DateTime(v.clone()));
        }
        if let Some(v) = &raw.answer_time {
            answers.push(AnswerValue::Time(v.clone()));
        }
        if let Some(v) = &raw.answer_coding {
            answers.push(AnswerValue::Coding(coding(v)));
        }

        let operator = raw
            .operator
            .clone()
            .or_else(|| (self.dstu2 && !answers.is_empty()).then(|| "=".to_string()));

        EnableWhen {
            question: raw.question.clone(),
            operator,
            answered: raw.answered,
            answers,
        }
    }
}

fn coding(raw: &RawCoding) -> Coding {
    Coding {
        system: raw.system.clone(),
        code: raw.code.clone(),
        display: raw.display.clone(),
    }
}

fn option_coding(raw: &RawOption) -> Option<Coding> {
    if let Some(value) = &raw.value_coding {
        return Some(coding(value));
    }
    if let Some(text) = &raw.value_string {
        return Some(Coding {
            system: None,
            code: Some(text.clone()),
            display: Some(text.clone()),
        });
    }
    (raw.code.is_some() || raw.display.is_some()).then(|| Coding {
        system: raw.system.clone(),
        code: raw.code.clone(),
        display: raw.display.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINED: &str = include_str!("../../fixtures/Questionnaire_ValueSet-contained.json");

    #[test]
    fn test_dstu2_layout() {
        let parsed = parse_questionnaire(CONTAINED).unwrap();
        let q = &parsed.questionnaire;

        assert_eq!(q.id.as_deref(), Some("ValueSet-contained"));
        assert_eq!(q.title.as_deref(), Some("Contained ValueSet"));
        assert_eq!(q.root.link_id.as_deref(), Some("root"));
        assert_eq!(q.root.questions.len(), 2);

        let choice = &q.root.questions[0];
        assert_eq!(choice.item_type, Some(ItemType::Choice));
        assert_eq!(choice.repeats, Some(false));
        assert_eq!(choice.value_set.as_deref(), Some("#answers-3-levels"));

        let boolean = &q.root.questions[1];
        assert_eq!(
            boolean.instruction.as_deref(),
            Some("And this is additional, very useful, instructional text.")
        );
        assert_eq!(boolean.enable_when[0].operator.as_deref(), Some("="));
        assert!(matches!(
            boolean.enable_when[0].answers.as_slice(),
            [AnswerValue::Coding(_)]
        ));

        assert_eq!(parsed.contained.len(), 1);
        assert_eq!(parsed.contained[0].id.as_deref(), Some("answers-3-levels"));
        assert_eq!(parsed.contained[0].expansion.len(), 3);
    }

    #[test]
    fn test_dstu2_nested_groups_become_headers() {
        let json = r#"{
            "resourceType": "Questionnaire",
            "group": {
                "group": [
                    {
                        "linkId": "section",
                        "title": "Section A",
                        "text": "About you",
                        "enableWhen": [ { "question": "consent", "answered": true } ],
                        "question": [
                            {
                                "linkId": "age",
                                "type": "integer",
                                "extension": [
                                    { "url": "http://hl7.org/fhir/StructureDefinition/minValue", "valueInteger": 0 },
                                    { "url": "http://hl7.org/fhir/StructureDefinition/maxValue", "valueInteger": 120 },
                                    { "url": "http://hl7.org/fhir/StructureDefinition/maxValue", "valueString": "Very old" }
                                ]
                            }
                        ]
                    }
                ]
            }
        }"#;

        let parsed = parse_questionnaire(json).unwrap();
        let header = &parsed.questionnaire.root.questions[0];
        assert_eq!(header.item_type, Some(ItemType::Group));
        assert_eq!(header.text.as_deref(), Some("Section A"));
        assert_eq!(header.instruction.as_deref(), Some("About you"));
        assert_eq!(header.enable_when[0].answered, Some(true));
        assert_eq!(header.enable_when[0].operator, None);

        let age = &header.groups[0].questions[0];
        assert_eq!(age.min_value.as_ref().and_then(|b| b.integer), Some(0));
        assert_eq!(age.max_value.as_ref().and_then(|b| b.integer), Some(120));
        assert_eq!(
            age.max_value.as_ref().and_then(|b| b.label.as_deref()),
            Some("Very old")
        );
    }

    #[test]
    fn test_item_layout() {
        let json = r#"{
            "resourceType": "Questionnaire",
            "id": "r4",
            "title": "Later layout",
            "item": [
                {
                    "linkId": "weight",
                    "type": "quantity",
                    "code": [ { "system": "http://loinc.org", "code": "29463-7", "display": "Body weight" } ],
                    "extension": [
                        {
                            "url": "http://hl7.org/fhir/StructureDefinition/questionnaire-unit",
                            "valueCoding": { "code": "kg" }
                        }
                    ]
                },
                {
                    "linkId": "habits",
                    "type": "group",
                    "text": "Habits",
                    "item": [
                        {
                            "linkId": "smoker",
                            "type": "choice",
                            "answerOption": [ { "valueCoding": { "code": "Y", "display": "Yes" } }, { "valueString": "No" } ],
                            "enableWhen": [ { "question": "weight", "operator": ">", "answerDecimal": 40.5 } ],
                            "initial": [ { "valueInteger": 1 } ]
                        }
                    ]
                }
            ]
        }"#;

        let parsed = parse_questionnaire(json).unwrap();
        let q = &parsed.questionnaire;
        assert_eq!(q.title.as_deref(), Some("Later layout"));

        let weight = &q.root.questions[0];
        assert_eq!(weight.concepts[0].display.as_deref(), Some("Body weight"));
        assert_eq!(weight.unit.as_deref(), Some("kg"));

        let habits = &q.root.questions[1];
        assert_eq!(habits.item_type, Some(ItemType::Group));
        assert_eq!(habits.groups[0].link_id.as_deref(), Some("habits"));

        let smoker = &habits.groups[0].questions[0];
        assert_eq!(smoker.options.len(), 2);
        assert_eq!(smoker.options[1].code.as_deref(), Some("No"));
        assert_eq!(smoker.enable_when[0].operator.as_deref(), Some(">"));
        assert_eq!(smoker.default_value, Some(1));
    }

    #[test]
    fn test_item_layout_keeps_missing_operator() {
        let json = r#"{
            "resourceType": "Questionnaire",
            "item": [ { "linkId": "a", "enableWhen": [ { "question": "b", "answerBoolean": true } ] } ]
        }"#;

        let parsed = parse_questionnaire(json).unwrap();
        let question = &parsed.questionnaire.root.questions[0];
        assert_eq!(question.item_type, None);
        assert_eq!(question.enable_when[0].operator, None);
    }

    #[test]
    fn test_malformed_fragments_are_dropped() {
        let json = r#"{
            "resourceType": "Questionnaire",
            "item": [
                {
                    "linkId": "bad",
                    "type": "integer",
                    "required": "yes",
                    "extension": [
                        { "url": "http://hl7.org/fhir/StructureDefinition/minValue", "valueInteger": 1.5 },
                        { "url": "http://hl7.org/fhir/StructureDefinition/maxValue", "valueInteger": 9 },
                        "not an extension"
                    ],
                    "enableWhen": { "question": "good" }
                },
                "not an item",
                { "linkId": "good", "type": "boolean", "required": true }
            ]
        }"#;

        let parsed = parse_questionnaire(json).unwrap();
        let questions = &parsed.questionnaire.root.questions;
        assert_eq!(questions.len(), 2);

        let bad = &questions[0];
        assert_eq!(bad.link_id.as_deref(), Some("bad"));
        assert_eq!(bad.required, None);
        assert!(bad.min_value.as_ref().and_then(|b| b.integer).is_none());
        assert_eq!(bad.max_value.as_ref().and_then(|b| b.integer), Some(9));
        assert!(bad.enable_when.is_empty());

        let good = &questions[1];
        assert_eq!(good.link_id.as_deref(), Some("good"));
        assert_eq!(good.item_type, Some(ItemType::Boolean));
        assert_eq!(good.required, Some(true));
    }

    #[test]
    fn test_not_a_questionnaire() {
        let err = parse_questionnaire(r#"{ "resourceType": "Patient" }"#).unwrap_err();
        assert!(matches!(err, FhirFormatError::UnexpectedResource { .. }));
    }
}
