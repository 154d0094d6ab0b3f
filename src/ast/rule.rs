use super::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The comparison an atomic rule performs against a field's answer.
///
/// Unrecognized operator names are kept as `Other` rather than rejected; such a
/// rule always evaluates to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    GreaterThan,
    LessThan,
    IsEmpty,
    IsNotEmpty,
    Other(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::GreaterThan => "greater_than",
            Operator::LessThan => "less_than",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::Other(name) => name,
        }
    }

    /// Whether the operator ignores the rule's literal value.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::IsEmpty | Operator::IsNotEmpty)
    }
}

impl From<&str> for Operator {
    fn from(name: &str) -> Self {
        match name {
            "equals" => Operator::Equals,
            "not_equals" => Operator::NotEquals,
            "contains" => Operator::Contains,
            "not_contains" => Operator::NotContains,
            "greater_than" => Operator::GreaterThan,
            "less_than" => Operator::LessThan,
            "is_empty" => Operator::IsEmpty,
            "is_not_empty" => Operator::IsNotEmpty,
            other => Operator::Other(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(name: String) -> Self {
        match Operator::from(name.as_str()) {
            Operator::Other(_) => Operator::Other(name),
            known => known,
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a rule joins onto the result accumulated from the rules before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

// Anything other than OR joins as AND.
impl From<String> for LogicalOperator {
    fn from(name: String) -> Self {
        if name == "OR" {
            LogicalOperator::Or
        } else {
            LogicalOperator::And
        }
    }
}

impl From<LogicalOperator> for String {
    fn from(op: LogicalOperator) -> Self {
        op.to_string()
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => f.write_str("AND"),
            LogicalOperator::Or => f.write_str("OR"),
        }
    }
}

/// One atomic test of a field's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalRule {
    /// Opaque identifier used by authoring tools; irrelevant to evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "fieldId")]
    pub field_id: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: Option<Value>,
    /// Applies when this rule is chained onto the rules before it. Ignored on the first rule.
    #[serde(
        default,
        alias = "logicalOperator",
        skip_serializing_if = "Option::is_none"
    )]
    pub logical_operator: Option<LogicalOperator>,
}

impl ConditionalRule {
    pub fn new(field_id: impl Into<String>, operator: Operator) -> Self {
        Self {
            id: None,
            field_id: field_id.into(),
            operator,
            value: None,
            logical_operator: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn joined_by(mut self, op: LogicalOperator) -> Self {
        self.logical_operator = Some(op);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The operator used to merge this rule into the running result.
    pub fn join_operator(&self) -> LogicalOperator {
        self.logical_operator.unwrap_or_default()
    }
}
