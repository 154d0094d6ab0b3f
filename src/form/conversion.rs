use super::definition::FormDefinition;
use crate::error::FormConversionError;

/// A trait for custom form models that can be converted into a `FormDefinition`.
///
/// Form builders store their field configuration in many shapes. Implementing this
/// trait on your own structs provides the translation layer into the engine's model.
///
/// # Example
///
/// ```rust,no_run
/// use formlogic::prelude::*;
/// use formlogic::error::FormConversionError;
///
/// struct MyQuestion { key: String, mandatory: bool }
/// struct MySurvey { questions: Vec<MyQuestion>, revision: u64 }
///
/// impl IntoForm for MySurvey {
///     fn into_form(self) -> Result<FormDefinition, FormConversionError> {
///         let fields = self
///             .questions
///             .into_iter()
///             .map(|q| {
///                 let field = FieldDefinition::new(q.key);
///                 if q.mandatory { field.required() } else { field }
///             })
///             .collect();
///         Ok(FormDefinition { version: self.revision, fields })
///     }
/// }
/// ```
pub trait IntoForm {
    /// Consumes the object and converts it into an engine-compatible form definition.
    fn into_form(self) -> Result<FormDefinition, FormConversionError>;
}

impl IntoForm for FormDefinition {
    fn into_form(self) -> Result<FormDefinition, FormConversionError> {
        Ok(self)
    }
}
