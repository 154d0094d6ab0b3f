//! # formlogic - Conditional Field Logic and Business-Day Engine
//!
//! **formlogic** decides, for every field of a form, whether it is visible, required or
//! disabled given the answers collected so far. Each field may carry a small declarative
//! logic block: an action (`show`, `hide`, `require`, `disable`) and an ordered list of
//! atomic rules. The crate also provides the business-day date arithmetic used to
//! compute form due dates.
//!
//! Everything here is pure: the engine reads an answer snapshot and a form definition
//! and returns decisions. Nothing is persisted, fetched or mutated.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Form**: Deserialize a `FormDefinition` from JSON, or implement the
//!     `IntoForm` trait to convert your own form format.
//! 2.  **Build an Engine**: `FormEngine::builder` validates the definition and indexes
//!     which fields depend on which answers.
//! 3.  **Resolve**: Call `resolve_all` (or `resolve_field`) with every new answer snapshot.
//!     Wrap calls in a `ResolutionCache` to memoize by rule-set version and snapshot.
//!
//! ## Rule Semantics
//!
//! Rules combine strictly left to right. Each rule after the first is merged into the
//! running result with its *own* logical operator, so `[a, OR b, AND c]` means
//! `(a || b) && c`. Every rule is always evaluated. An empty rule list is always met.
//! Malformed rules never fail: unknown operators evaluate to `false`, unknown actions
//! leave the field at its defaults.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formlogic::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let form = FormDefinition::from_json(r#"{
//!         "version": 3,
//!         "fields": [
//!             { "id": "has_pet", "required": true },
//!             { "id": "pet_name", "required": true,
//!               "conditionalLogic": {
//!                 "action": "show",
//!                 "rules": [{ "fieldId": "has_pet", "operator": "equals", "value": "yes" }]
//!               } }
//!         ]
//!     }"#)?;
//!
//!     let engine = FormEngine::builder(form).build()?;
//!
//!     let answers = AnswerSnapshot::new().with("has_pet", "yes");
//!     let state = engine.resolve_all(answers.answers());
//!
//!     for (id, field) in &state.fields {
//!         println!("{}: visible={} required={}", id, field.visible, field.required);
//!     }
//!     println!("Missing: {:?}", engine.missing_required(answers.answers()));
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod calendar;
pub mod data;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod prelude;
pub mod resolver;
pub mod trace;
