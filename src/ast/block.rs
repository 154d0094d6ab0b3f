use super::ConditionalRule;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a field does when its logic block's condition is met.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Show,
    Hide,
    Require,
    Disable,
    Other(String),
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        match name.as_str() {
            "show" => Action::Show,
            "hide" => Action::Hide,
            "require" => Action::Require,
            "disable" => Action::Disable,
            _ => Action::Other(name),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(name) => name,
            known => known.to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Show => f.write_str("show"),
            Action::Hide => f.write_str("hide"),
            Action::Require => f.write_str("require"),
            Action::Disable => f.write_str("disable"),
            Action::Other(name) => f.write_str(name),
        }
    }
}

/// The conditional logic attached to a single field.
///
/// The rules form one left-associative boolean expression: each rule after the first is
/// merged into the running result with its own logical operator. An empty rule list is
/// vacuously met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalLogicBlock {
    pub action: Action,
    #[serde(default)]
    pub rules: Vec<ConditionalRule>,
}

impl ConditionalLogicBlock {
    pub fn new(action: Action, rules: Vec<ConditionalRule>) -> Self {
        Self { action, rules }
    }

    /// Field ids this block reads, in first-reference order.
    pub fn referenced_fields(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.field_id.as_str()).unique()
    }

    pub fn references(&self, field_id: &str) -> bool {
        self.rules.iter().any(|r| r.field_id == field_id)
    }
}
