//! Answer format value objects

use serde::{Deserialize, Serialize};

/// Whether a numeric answer is whole or fractional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericStyle {
    Integer,
    Decimal,
}

/// Free numeric entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFormat {
    pub style: NumericStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl NumericFormat {
    pub fn new(style: NumericStyle) -> Self {
        Self {
            style,
            min: None,
            max: None,
            default: None,
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }
}

/// A bounded integer slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleFormat {
    pub min: i64,
    pub max: i64,
    pub default: i64,
    pub step: i64,
    pub vertical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

/// Single or multiple selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceStyle {
    Single,
    Multiple,
}

/// One selectable answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub display: String,
    /// `"{system} {code}"`
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceFormat {
    pub style: ChoiceStyle,
    pub options: Vec<ChoiceOption>,
}

/// How a question step collects its answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerFormat {
    Boolean,
    Numeric(NumericFormat),
    Scale(ScaleFormat),
    Date,
    DateTime,
    Time,
    Text,
    Choice(ChoiceFormat),
}

impl AnswerFormat {
    /// Short name used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerFormat::Boolean => "boolean",
            AnswerFormat::Numeric(_) => "numeric",
            AnswerFormat::Scale(_) => "scale",
            AnswerFormat::Date => "date",
            AnswerFormat::DateTime => "date-time",
            AnswerFormat::Time => "time",
            AnswerFormat::Text => "text",
            AnswerFormat::Choice(_) => "choice",
        }
    }

    pub fn as_choice(&self) -> Option<&ChoiceFormat> {
        match self {
            AnswerFormat::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn as_scale(&self) -> Option<&ScaleFormat> {
        match self {
            AnswerFormat::Scale(scale) => Some(scale),
            _ => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericFormat> {
        match self {
            AnswerFormat::Numeric(numeric) => Some(numeric),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(AnswerFormat::DateTime.kind(), "date-time");
        assert_eq!(
            AnswerFormat::Numeric(NumericFormat::new(NumericStyle::Decimal)).kind(),
            "numeric"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let format = AnswerFormat::Choice(ChoiceFormat {
            style: ChoiceStyle::Multiple,
            options: vec![ChoiceOption {
                display: "Yes".to_string(),
                value: "urn:yn Y".to_string(),
            }],
        });
        let json = serde_json::to_value(&format).unwrap();
        assert_eq!(json["kind"], "choice");
        assert_eq!(json["style"], "multiple");
        assert_eq!(json["options"][0]["value"], "urn:yn Y");
    }

    #[test]
    fn test_numeric_skips_missing_fields() {
        let format = AnswerFormat::Numeric(
            NumericFormat::new(NumericStyle::Decimal).with_unit(Some("kg".to_string())),
        );
        let json = serde_json::to_value(&format).unwrap();
        assert_eq!(json["unit"], "kg");
        assert!(json.get("min").is_none());
    }
}
