use crate::ast::{AnswerMap, Operator};
use crate::error::ConfigError;
use crate::evaluator::{combine_traced, is_empty_answer};
use crate::resolver::{FieldState, resolve_field_state};
use crate::trace::TraceFormatter;
use ahash::{AHashMap, AHashSet};
use serde::Serialize;

pub mod cache;
pub mod conversion;
pub mod definition;

pub use cache::ResolutionCache;
pub use conversion::IntoForm;
pub use definition::{FieldDefinition, FormDefinition};

/// Resolved state of every field in a form, in form order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    /// The rule-set version these states were computed from.
    pub version: u64,
    pub fields: Vec<(String, FieldState)>,
}

impl FormState {
    pub fn get(&self, field_id: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, state)| state)
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, state)| state.visible)
            .map(|(id, _)| id.as_str())
    }
}

/// Evaluates a form's conditional logic against answer snapshots.
///
/// An engine is built once per rule-set version and can be shared freely across
/// threads; every method takes `&self` and has no side effects.
#[derive(Debug, Clone)]
pub struct FormEngine {
    definition: FormDefinition,
    /// field id -> fields whose logic reads it
    dependents: AHashMap<String, Vec<String>>,
}

pub struct FormEngineBuilder {
    definition: FormDefinition,
    operator_aliases: AHashMap<String, Operator>,
}

impl FormEngineBuilder {
    pub fn new(definition: FormDefinition) -> Self {
        Self {
            definition,
            operator_aliases: AHashMap::new(),
        }
    }

    /// Maps an operator name used by a custom rule format (e.g. `"gt"`) onto one of the
    /// built-in operators (e.g. `"greater_than"`). Unknown target names are ignored.
    pub fn with_operator_alias(mut self, alias: &str, operator_name: &str) -> Self {
        match Operator::from(operator_name) {
            Operator::Other(_) => {}
            operator => {
                self.operator_aliases.insert(alias.to_string(), operator);
            }
        }
        self
    }

    pub fn build(self) -> Result<FormEngine, ConfigError> {
        let mut definition = self.definition;
        let mut seen = AHashSet::new();
        let mut dependents: AHashMap<String, Vec<String>> = AHashMap::new();

        for field in &mut definition.fields {
            if !seen.insert(field.id.clone()) {
                return Err(ConfigError::DuplicateField(field.id.clone()));
            }
            let Some(block) = field.conditional_logic.as_mut() else {
                continue;
            };

            for rule in &mut block.rules {
                let replacement = match &rule.operator {
                    Operator::Other(name) => self.operator_aliases.get(name).cloned(),
                    _ => None,
                };
                if let Some(operator) = replacement {
                    rule.operator = operator;
                }
            }

            for referenced in block.referenced_fields() {
                dependents
                    .entry(referenced.to_string())
                    .or_default()
                    .push(field.id.clone());
            }
        }

        Ok(FormEngine {
            definition,
            dependents,
        })
    }
}

impl FormEngine {
    pub fn builder(definition: FormDefinition) -> FormEngineBuilder {
        FormEngineBuilder::new(definition)
    }

    pub fn new(definition: FormDefinition) -> Result<Self, ConfigError> {
        Self::builder(definition).build()
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn version(&self) -> u64 {
        self.definition.version
    }

    /// State of a single field, `None` if the form has no such field.
    pub fn resolve_field(&self, field_id: &str, answers: &AnswerMap) -> Option<FieldState> {
        self.definition.field(field_id).map(|field| {
            resolve_field_state(field.conditional_logic.as_ref(), answers, field.required)
        })
    }

    pub fn resolve_all(&self, answers: &AnswerMap) -> FormState {
        let fields = self
            .definition
            .fields
            .iter()
            .map(|field| {
                let state =
                    resolve_field_state(field.conditional_logic.as_ref(), answers, field.required);
                tracing::trace!(
                    field = %field.id,
                    visible = state.visible,
                    required = state.required,
                    disabled = state.disabled,
                    "resolved field"
                );
                (field.id.clone(), state)
            })
            .collect();

        FormState {
            version: self.definition.version,
            fields,
        }
    }

    /// Fields whose logic reads `field_id` and must be re-resolved when it changes.
    pub fn dependents_of(&self, field_id: &str) -> &[String] {
        self.dependents
            .get(field_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fields that block submission: visible, required, enabled and unanswered.
    pub fn missing_required(&self, answers: &AnswerMap) -> Vec<String> {
        self.resolve_all(answers)
            .fields
            .into_iter()
            .filter(|(id, state)| {
                state.visible
                    && state.required
                    && !state.disabled
                    && is_empty_answer(answers.get(id))
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// A human-readable account of how a field's condition was decided.
    ///
    /// `None` when the field does not exist or carries no logic.
    pub fn explain(&self, field_id: &str, answers: &AnswerMap) -> Option<String> {
        let block = self.definition.field(field_id)?.conditional_logic.as_ref()?;
        let trace = combine_traced(&block.rules, answers);
        Some(format!(
            "{} when {} => {}",
            block.action,
            TraceFormatter::format_trace(&trace),
            trace.get_outcome()
        ))
    }

    /// Checks that every rule refers to a field defined in the form.
    pub fn validate_references(&self) -> Result<(), ConfigError> {
        for field in &self.definition.fields {
            let Some(block) = &field.conditional_logic else {
                continue;
            };
            if let Some(missing) = block
                .referenced_fields()
                .find(|id| self.definition.field(id).is_none())
            {
                return Err(ConfigError::UnknownField {
                    field_id: missing.to_string(),
                    referenced_by: field.id.clone(),
                });
            }
        }
        Ok(())
    }
}
