//! Turns a field's logic block into rendering decisions.
//!
//! Visibility and requiredness come from [`resolve_field`]; disabling is a separate
//! predicate, [`should_disable_field`], because a field can be visible, optional and
//! disabled at the same time. [`resolve_field_state`] computes all three from a single
//! evaluation of the rules.

use crate::ast::{Action, AnswerMap, ConditionalLogicBlock};
use crate::evaluator::combine_rules;
use serde::Serialize;

/// Whether a field is shown and whether it must be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldVisibility {
    pub visible: bool,
    pub required: bool,
}

/// Full rendering state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
    pub disabled: bool,
}

impl FieldState {
    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility {
            visible: self.visible,
            required: self.required,
        }
    }
}

/// Applies a field's logic block to the current answers.
///
/// * no block: visible, `base_required` unchanged
/// * `show`: visible only while the condition is met
/// * `hide`: hidden while the condition is met
/// * `require`: visible, and required if either `base_required` or the condition holds
/// * `disable` and unrecognized actions: visible, `base_required` unchanged
pub fn resolve_field(
    block: Option<&ConditionalLogicBlock>,
    answers: &AnswerMap,
    base_required: bool,
) -> FieldVisibility {
    match block {
        None => FieldVisibility {
            visible: true,
            required: base_required,
        },
        Some(block) => apply_action(block, combine_rules(&block.rules, answers), base_required),
    }
}

/// True when the block's action is `disable` and its condition is met.
pub fn should_disable_field(block: Option<&ConditionalLogicBlock>, answers: &AnswerMap) -> bool {
    match block {
        Some(block) if block.action == Action::Disable => combine_rules(&block.rules, answers),
        _ => false,
    }
}

/// Visibility, requiredness and disabled state from one evaluation of the rules.
pub fn resolve_field_state(
    block: Option<&ConditionalLogicBlock>,
    answers: &AnswerMap,
    base_required: bool,
) -> FieldState {
    let Some(block) = block else {
        return FieldState {
            visible: true,
            required: base_required,
            disabled: false,
        };
    };

    let condition_met = combine_rules(&block.rules, answers);
    let visibility = apply_action(block, condition_met, base_required);
    FieldState {
        visible: visibility.visible,
        required: visibility.required,
        disabled: block.action == Action::Disable && condition_met,
    }
}

fn apply_action(
    block: &ConditionalLogicBlock,
    condition_met: bool,
    base_required: bool,
) -> FieldVisibility {
    match &block.action {
        Action::Show => FieldVisibility {
            visible: condition_met,
            required: base_required,
        },
        Action::Hide => FieldVisibility {
            visible: !condition_met,
            required: base_required,
        },
        Action::Require => FieldVisibility {
            visible: true,
            required: base_required || condition_met,
        },
        Action::Disable => FieldVisibility {
            visible: true,
            required: base_required,
        },
        Action::Other(name) => {
            tracing::debug!(action = %name, "unrecognized action; field keeps its defaults");
            FieldVisibility {
                visible: true,
                required: base_required,
            }
        }
    }
}
