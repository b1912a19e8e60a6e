//! Requirement rule value objects

use serde::{Deserialize, Serialize};

/// How the dependent answer is compared with the expected value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// The dependent question has (or, with `false`, has not) been answered
    Exists,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Exists => "exists",
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::GreaterThan => ">",
            Comparator::LessThan => "<",
            Comparator::GreaterOrEqual => ">=",
            Comparator::LessOrEqual => "<=",
        }
    }

    /// Whether the comparator needs an ordered value
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Comparator::GreaterThan
                | Comparator::LessThan
                | Comparator::GreaterOrEqual
                | Comparator::LessOrEqual
        )
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exists" => Ok(Comparator::Exists),
            "=" => Ok(Comparator::Equal),
            "!=" => Ok(Comparator::NotEqual),
            ">" => Ok(Comparator::GreaterThan),
            "<" => Ok(Comparator::LessThan),
            ">=" => Ok(Comparator::GreaterOrEqual),
            "<=" => Ok(Comparator::LessOrEqual),
            other => Err(format!(
                "Unknown operator `{}`. Valid: exists, =, !=, >, <, >=, <=",
                other
            )),
        }
    }
}

/// The value a dependent answer is compared with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExpectedValue {
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
    /// Date, date-time or time, kept in its declared lexical form
    Date(String),
    /// A choice value in `"{system} {code}"` form
    Choice(String),
}

impl ExpectedValue {
    /// Whether values of this kind can be ordered
    pub fn is_ordered(&self) -> bool {
        matches!(
            self,
            ExpectedValue::Integer(_) | ExpectedValue::Decimal(_) | ExpectedValue::Date(_)
        )
    }
}

impl std::fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedValue::Boolean(v) => write!(f, "{}", v),
            ExpectedValue::Integer(v) => write!(f, "{}", v),
            ExpectedValue::Decimal(v) => write!(f, "{}", v),
            ExpectedValue::Text(v) | ExpectedValue::Date(v) => write!(f, "\"{}\"", v),
            ExpectedValue::Choice(v) => write!(f, "<{}>", v),
        }
    }
}

/// A conditional visibility rule attached to a step.
///
/// The step is shown only when the answer recorded for `dependent_link_id`
/// satisfies `comparator` against `expected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRule {
    pub dependent_link_id: String,
    pub comparator: Comparator,
    pub expected: ExpectedValue,
}

impl RequirementRule {
    pub fn new(
        dependent_link_id: impl Into<String>,
        comparator: Comparator,
        expected: ExpectedValue,
    ) -> Self {
        Self {
            dependent_link_id: dependent_link_id.into(),
            comparator,
            expected,
        }
    }
}

impl std::fmt::Display for RequirementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.dependent_link_id, self.comparator, self.expected
        )
    }
}
