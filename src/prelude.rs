//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the formlogic
//! crate. Import this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use formlogic::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let form = FormDefinition::from_file("path/to/form.json")?;
//! let answers = AnswerSnapshot::from_file("path/to/answers.json")?;
//!
//! let engine = FormEngine::new(form)?;
//! let state = engine.resolve_all(answers.answers());
//!
//! println!("Form state: {:?}", state);
//! # Ok(())
//! # }
//! ```

// Rule model
pub use crate::ast::{
    Action, AnswerMap, ConditionalLogicBlock, ConditionalRule, EvaluationTrace, LogicalOperator,
    Operator, RuleTrace, Value,
};

// Evaluation and resolution
pub use crate::evaluator::{combine_rules, combine_traced, evaluate_rule};
pub use crate::resolver::{
    FieldState, FieldVisibility, resolve_field, resolve_field_state, should_disable_field,
};

// Form-level engine
pub use crate::form::{
    FieldDefinition, FormDefinition, FormEngine, FormEngineBuilder, FormState, IntoForm,
    ResolutionCache,
};

// Business days
pub use crate::calendar::{
    BusinessDaysConfig, add_business_days, days_between, due_date, is_business_day,
    next_business_day, previous_business_day,
};

// Data structures
pub use crate::data::AnswerSnapshot;

// Error types
pub use crate::error::{ConfigError, FormConversionError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
