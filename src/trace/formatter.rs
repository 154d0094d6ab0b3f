use crate::ast::{EvaluationTrace, RuleTrace, Value};

/// Formats evaluation traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format an evaluation trace into a human-readable explanation.
    ///
    /// Grouping is always made explicit, since rules combine strictly left to right:
    /// `($a (was 1) equals 1 OR $b (was missing) is_empty) AND $c (was true) equals true`.
    pub fn format_trace(trace: &EvaluationTrace) -> String {
        Self::format_recursive(trace, true)
    }

    fn format_recursive(trace: &EvaluationTrace, outermost: bool) -> String {
        match trace {
            EvaluationTrace::Empty => "always".to_string(),
            EvaluationTrace::Rule(rule) => Self::format_rule(rule),
            EvaluationTrace::Combined {
                op, left, right, ..
            } => {
                let body = format!(
                    "{} {} {}",
                    Self::format_recursive(left, false),
                    op,
                    Self::format_recursive(right, false)
                );
                if outermost { body } else { format!("({})", body) }
            }
        }
    }

    fn format_rule(rule: &RuleTrace) -> String {
        let actual = rule
            .actual
            .as_ref()
            .map_or_else(|| "missing".to_string(), Self::format_value);
        let subject = format!("${} (was {})", rule.field_id, actual);
        if rule.operator.is_unary() {
            return format!("{} {}", subject, rule.operator);
        }
        let expected = rule
            .expected
            .as_ref()
            .map_or_else(|| "nothing".to_string(), Self::format_value);
        format!("{} {} {}", subject, rule.operator, expected)
    }

    /// Format a value for display.
    fn format_value(value: &Value) -> String {
        value.to_string()
    }
}
