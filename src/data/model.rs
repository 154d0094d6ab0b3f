use crate::ast::{AnswerMap, Value};
use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;

/// A snapshot of a filler's answers, matching the expected JSON format for evaluation:
/// an object mapping field ids to answer values.
///
/// A `null` entry is a cleared answer and is loaded as absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct AnswerSnapshot {
    #[serde(deserialize_with = "answers_without_nulls")]
    pub answers: AnswerMap,
}

fn answers_without_nulls<'de, D>(deserializer: D) -> Result<AnswerMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = ahash::AHashMap::<String, Option<Value>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(id, value)| value.map(|v| (id, v)))
        .collect())
}

impl AnswerSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an answer snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with(mut self, field_id: &str, value: impl Into<Value>) -> Self {
        self.answers.insert(field_id.to_string(), value.into());
        self
    }

    /// Get a reference to the answer map.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }
}
