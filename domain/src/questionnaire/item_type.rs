//! Declared question type

use serde::{Deserialize, Serialize};

/// Declared type of a questionnaire item
///
/// Parsing never fails: types the engine does not know are kept verbatim in
/// [`ItemType::Unknown`] so the resolver can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Boolean,
    Decimal,
    Integer,
    Quantity,
    Date,
    DateTime,
    Instant,
    Time,
    String,
    Url,
    Choice,
    OpenChoice,
    Display,
    Group,
    Unknown(String),
}

impl ItemType {
    /// Parse the FHIR code of an item type
    pub fn parse(code: &str) -> Self {
        match code {
            "boolean" => ItemType::Boolean,
            "decimal" => ItemType::Decimal,
            "integer" => ItemType::Integer,
            "quantity" => ItemType::Quantity,
            "date" => ItemType::Date,
            "dateTime" => ItemType::DateTime,
            "instant" => ItemType::Instant,
            "time" => ItemType::Time,
            "string" | "text" => ItemType::String,
            "url" => ItemType::Url,
            "choice" => ItemType::Choice,
            "open-choice" => ItemType::OpenChoice,
            "display" => ItemType::Display,
            "group" => ItemType::Group,
            other => ItemType::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Boolean => "boolean",
            ItemType::Decimal => "decimal",
            ItemType::Integer => "integer",
            ItemType::Quantity => "quantity",
            ItemType::Date => "date",
            ItemType::DateTime => "dateTime",
            ItemType::Instant => "instant",
            ItemType::Time => "time",
            ItemType::String => "string",
            ItemType::Url => "url",
            ItemType::Choice => "choice",
            ItemType::OpenChoice => "open-choice",
            ItemType::Display => "display",
            ItemType::Group => "group",
            ItemType::Unknown(code) => code,
        }
    }

    /// Whether answers are picked from a value set
    pub fn is_choice(&self) -> bool {
        matches!(self, ItemType::Choice | ItemType::OpenChoice)
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ItemType {
    fn from(code: String) -> Self {
        ItemType::parse(&code)
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}
