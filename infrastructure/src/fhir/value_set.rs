//! `ValueSet` JSON to the terminology model

use super::error::FhirFormatError;
use super::raw::{RawConcept, RawContains, RawValueSet};
use stepwise_domain::{Coding, Concept, ConceptInclude, DefinedConcepts, ValueSet};

/// Parse a `ValueSet` resource from JSON text
pub fn parse_value_set(json: &str) -> Result<ValueSet, FhirFormatError> {
    let raw: RawValueSet = serde_json::from_str(json)?;
    convert(raw)
}

/// Parse a `ValueSet` resource that was already read as JSON
pub fn value_set_from_json(value: serde_json::Value) -> Result<ValueSet, FhirFormatError> {
    let raw: RawValueSet = serde_json::from_value(value)?;
    convert(raw)
}

fn convert(raw: RawValueSet) -> Result<ValueSet, FhirFormatError> {
    FhirFormatError::check_resource_type("ValueSet", raw.resource_type.as_deref())?;

    let mut expansion = Vec::new();
    if let Some(raw_expansion) = raw.expansion {
        flatten_contains(raw_expansion.contains, &mut expansion);
    }

    let defined = raw.code_system.map(|cs| DefinedConcepts {
        system: cs.system,
        concepts: flatten_concepts(cs.concept),
    });

    let includes = raw
        .compose
        .map(|compose| {
            compose
                .include
                .into_iter()
                .map(|include| ConceptInclude {
                    system: include.system,
                    concepts: flatten_concepts(include.concept),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(ValueSet {
        id: raw.id,
        expansion,
        defined,
        includes,
    })
}

/// Expansion entries in document order, nested entries after their parent
fn flatten_contains(contains: Vec<RawContains>, out: &mut Vec<Coding>) {
    for entry in contains {
        // Abstract grouping entries carry no code
        if entry.code.is_some() || entry.display.is_some() {
            out.push(Coding {
                system: entry.system,
                code: entry.code,
                display: entry.display,
            });
        }
        flatten_contains(entry.contains, out);
    }
}

fn flatten_concepts(concepts: Vec<RawConcept>) -> Vec<Concept> {
    let mut out = Vec::new();
    let mut stack: Vec<_> = concepts.into_iter().rev().collect();
    while let Some(concept) = stack.pop() {
        out.push(Concept {
            code: concept.code,
            display: concept.display,
        });
        stack.extend(concept.concept.into_iter().rev());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF36: &str = "http://sf-36.org/fhir/StructureDefinition/answers-3-levels";

    #[test]
    fn test_expansion() {
        let json = format!(
            r#"{{
                "resourceType": "ValueSet",
                "id": "answers-3-levels",
                "expansion": {{
                    "contains": [
                        {{ "system": "{SF36}", "code": "1", "display": "Yes, limited a lot" }},
                        {{ "system": "{SF36}", "code": "2", "display": "Yes, limited a little" }},
                        {{ "system": "{SF36}", "code": "3", "display": "No, not limited at all" }}
                    ]
                }}
            }}"#
        );

        let value_set = parse_value_set(&json).unwrap();
        assert_eq!(value_set.id.as_deref(), Some("answers-3-levels"));
        assert_eq!(value_set.expansion.len(), 3);
        assert_eq!(value_set.expansion[2].code.as_deref(), Some("3"));
        assert_eq!(value_set.expansion[0].system.as_deref(), Some(SF36));
    }

    #[test]
    fn test_code_system_with_nested_concepts() {
        let json = r#"{
            "resourceType": "ValueSet",
            "codeSystem": {
                "system": "urn:yes-no",
                "concept": [
                    { "code": "Y", "display": "Yes", "concept": [ { "code": "Y+", "display": "Definitely" } ] },
                    { "code": "N", "display": "No" }
                ]
            }
        }"#;

        let defined = parse_value_set(json).unwrap().defined.unwrap();
        assert_eq!(defined.system.as_deref(), Some("urn:yes-no"));
        let codes: Vec<_> = defined
            .concepts
            .iter()
            .map(|c| c.code.as_deref().unwrap())
            .collect();
        assert_eq!(codes, ["Y", "Y+", "N"]);
    }

    #[test]
    fn test_define_alias_and_compose() {
        let json = r#"{
            "define": { "system": "urn:a", "concept": [ { "code": "1" } ] },
            "compose": {
                "include": [
                    { "system": "urn:b", "concept": [ { "code": "x", "display": "X" } ] },
                    { "system": "urn:c" }
                ]
            }
        }"#;

        let value_set = parse_value_set(json).unwrap();
        assert_eq!(value_set.defined.unwrap().concepts.len(), 1);
        assert_eq!(value_set.includes.len(), 2);
        assert!(value_set.includes[1].concepts.is_empty());
    }

    #[test]
    fn test_wrong_resource_type() {
        let err = parse_value_set(r#"{ "resourceType": "Questionnaire" }"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected a ValueSet resource, found Questionnaire"
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_value_set("{ nope").unwrap_err(),
            FhirFormatError::Json(_)
        ));
    }
}
