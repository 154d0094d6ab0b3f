use crate::ast::ConditionalLogicBlock;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The canonical definition of a form's fields and their logic, ready for evaluation.
/// This is the target structure for any custom form format conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Rule-set version; bump whenever any field's logic changes.
    #[serde(default)]
    pub version: u64,
    pub fields: Vec<FieldDefinition>,
}

/// A single field, in form order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(
        default,
        alias = "conditionalLogic",
        skip_serializing_if = "Option::is_none"
    )]
    pub conditional_logic: Option<ConditionalLogicBlock>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            required: false,
            conditional_logic: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_logic(mut self, block: ConditionalLogicBlock) -> Self {
        self.conditional_logic = Some(block);
        self
    }
}

impl FormDefinition {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }
}
