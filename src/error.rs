use thiserror::Error;

/// Errors raised while loading or validating form configuration.
///
/// Evaluation itself never fails; these only occur at the loading boundary.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse configuration JSON: {0}")]
    JsonParse(String),

    #[error("Field '{0}' is defined more than once in the form")]
    DuplicateField(String),

    #[error("Field '{referenced_by}' has a rule referencing undefined field '{field_id}'")]
    UnknownField {
        field_id: String,
        referenced_by: String,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::JsonParse(err.to_string())
    }
}

/// Errors that can occur when converting a custom form format into a `FormDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FormConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
