//! Definition tree entities

use super::item_type::ItemType;
use std::sync::Arc;

/// A coded concept: system, code and human-readable display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coding {
    pub system: Option<String>,
    pub code: Option<String>,
    pub display: Option<String>,
}

impl Coding {
    pub fn new(system: Option<&str>, code: Option<&str>, display: Option<&str>) -> Self {
        Self {
            system: system.map(str::to_string),
            code: code.map(str::to_string),
            display: display.map(str::to_string),
        }
    }
}

/// One end of a numeric range, as declared by the min/max extensions.
///
/// The integer value bounds the answer; the label describes that end of a
/// scale ("Not at all", "Extremely").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bound {
    pub integer: Option<i64>,
    pub decimal: Option<f64>,
    pub label: Option<String>,
}

impl Bound {
    pub fn integer(value: i64) -> Self {
        Self {
            integer: Some(value),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The bound as a decimal, preferring the integer value
    pub fn as_decimal(&self) -> Option<f64> {
        self.integer.map(|v| v as f64).or(self.decimal)
    }
}

/// An answer value named by an enable-when condition
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    String(String),
    Date(String),
    DateTime(String),
    Time(String),
    Coding(Coding),
}

/// A declared enable-when condition, before validation.
///
/// Every field is optional here; the requirement extractor decides which
/// combinations form a usable rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnableWhen {
    /// Link identifier of the question whose answer is inspected
    pub question: Option<String>,
    /// Comparison operator (`exists`, `=`, `!=`, `>`, `<`, `>=`, `<=`)
    pub operator: Option<String>,
    /// Legacy "has been answered" flag
    pub answered: Option<bool>,
    /// Expected answer values; at most one is valid
    pub answers: Vec<AnswerValue>,
}

impl EnableWhen {
    /// A condition requiring `question` to equal `answer`
    pub fn equals(question: impl Into<String>, answer: AnswerValue) -> Self {
        Self {
            question: Some(question.into()),
            operator: Some("=".to_string()),
            answered: None,
            answers: vec![answer],
        }
    }

    /// A condition requiring `question` to have (or not have) an answer
    pub fn answered(question: impl Into<String>, answered: bool) -> Self {
        Self {
            question: Some(question.into()),
            answered: Some(answered),
            ..Self::default()
        }
    }
}

/// One question node of the definition tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDefinition {
    pub link_id: Option<String>,
    /// `None` when the definition omits the type
    pub item_type: Option<ItemType>,
    /// Concept codings naming the question; the first one titles the step
    pub concepts: Vec<Coding>,
    pub text: Option<String>,
    pub instruction: Option<String>,
    pub help: Option<String>,
    pub required: Option<bool>,
    pub repeats: Option<bool>,
    pub min_occurs: Option<i64>,
    pub max_occurs: Option<i64>,
    pub min_value: Option<Bound>,
    pub max_value: Option<Bound>,
    pub default_value: Option<i64>,
    pub unit: Option<String>,
    /// Inline answer options
    pub options: Vec<Coding>,
    /// Reference to a value set resolved through terminology
    pub value_set: Option<String>,
    pub enable_when: Vec<EnableWhen>,
    /// Nested groups, resolved after the question's own step
    pub groups: Vec<GroupDefinition>,
}

impl QuestionDefinition {
    pub fn new(link_id: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            link_id: Some(link_id.into()),
            item_type: Some(item_type),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_repeats(mut self, repeats: bool) -> Self {
        self.repeats = Some(repeats);
        self
    }

    pub fn with_bounds(mut self, min: Option<Bound>, max: Option<Bound>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn with_options(mut self, options: Vec<Coding>) -> Self {
        self.options = options;
        self
    }

    pub fn with_value_set(mut self, reference: impl Into<String>) -> Self {
        self.value_set = Some(reference.into());
        self
    }

    pub fn with_enable_when(mut self, condition: EnableWhen) -> Self {
        self.enable_when.push(condition);
        self
    }

    pub fn with_group(mut self, group: GroupDefinition) -> Self {
        self.groups.push(group);
        self
    }

    /// Whether the question must be answered
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// An ordered list of question children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDefinition {
    pub link_id: Option<String>,
    pub questions: Vec<Arc<QuestionDefinition>>,
}

impl GroupDefinition {
    pub fn new(questions: Vec<QuestionDefinition>) -> Self {
        Self {
            link_id: None,
            questions: questions.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn with_link_id(mut self, link_id: impl Into<String>) -> Self {
        self.link_id = Some(link_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A complete questionnaire: identity plus the root group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Questionnaire {
    pub id: Option<String>,
    pub title: Option<String>,
    pub root: GroupDefinition,
}

impl Questionnaire {
    pub fn new(id: Option<String>, root: GroupDefinition) -> Self {
        Self {
            id,
            title: None,
            root,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
