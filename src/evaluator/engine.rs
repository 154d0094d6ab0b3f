use super::coercion::to_number;
use crate::ast::{ConditionalRule, Operator, Value};

// This macro generates the body of an ordering comparison: both sides are coerced to
// numbers, and NaN on either side makes the comparison false.
macro_rules! eval_ordering {
    ($actual:expr, $expected:expr, $op:tt) => {{
        let left = to_number($actual);
        let right = to_number($expected);
        left $op right
    }};
}

/// Applies a single rule's operator to the answer found for its field.
pub(super) fn apply_operator(rule: &ConditionalRule, actual: Option<&Value>) -> bool {
    let expected = rule.value.as_ref();
    match &rule.operator {
        Operator::Equals => strict_equals(actual, expected),
        Operator::NotEquals => !strict_equals(actual, expected),
        Operator::Contains => contains(actual, expected).unwrap_or(false),
        // The negation only covers the text and list branches; every other pairing is true.
        Operator::NotContains => contains(actual, expected).map_or(true, |found| !found),
        Operator::GreaterThan => eval_ordering!(actual, expected, >),
        Operator::LessThan => eval_ordering!(actual, expected, <),
        Operator::IsEmpty => is_empty_answer(actual),
        Operator::IsNotEmpty => !is_empty_answer(actual),
        Operator::Other(name) => {
            tracing::debug!(
                operator = %name,
                field = %rule.field_id,
                "unrecognized operator; rule evaluates to false"
            );
            false
        }
    }
}

fn strict_equals(actual: Option<&Value>, expected: Option<&Value>) -> bool {
    match (actual, expected) {
        (None, None) => true,
        (Some(a), Some(e)) => a.strict_eq(e),
        _ => false,
    }
}

/// `Some(found)` for the two supported pairings, `None` for any other combination.
fn contains(actual: Option<&Value>, expected: Option<&Value>) -> Option<bool> {
    match (actual?, expected?) {
        (Value::Text(haystack), Value::Text(needle)) => Some(
            haystack
                .to_lowercase()
                .contains(needle.to_lowercase().as_str()),
        ),
        (Value::List(items), Value::Text(needle)) => Some(items.iter().any(|item| item == needle)),
        _ => None,
    }
}

/// Absent answers, empty text and empty selections count as empty.
pub(crate) fn is_empty_answer(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::Text(s)) => s.is_empty(),
        Some(Value::List(items)) => items.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => false,
    }
}
