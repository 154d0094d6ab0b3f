use crate::ast::{AnswerMap, ConditionalRule, EvaluationTrace, LogicalOperator, RuleTrace};

mod coercion;
mod engine;

pub(crate) use engine::is_empty_answer;

/// Evaluates one atomic rule against the answer recorded for its field.
///
/// A missing answer is treated as undefined. Malformed rules never fail: an
/// unrecognized operator or a type-mismatched comparison evaluates to its documented
/// default instead.
pub fn evaluate_rule(rule: &ConditionalRule, answers: &AnswerMap) -> bool {
    engine::apply_operator(rule, answers.get(&rule.field_id))
}

/// Folds a rule list into a single boolean.
///
/// The first rule seeds the accumulator. Every following rule is evaluated and merged
/// into the accumulator with that rule's own logical operator (AND when unset), strictly
/// left to right: `[a, OR b, AND c]` means `(a || b) && c`. Every rule is evaluated even
/// when the outcome is already settled. An empty list is vacuously `true`.
pub fn combine_rules(rules: &[ConditionalRule], answers: &AnswerMap) -> bool {
    let Some((first, rest)) = rules.split_first() else {
        return true;
    };

    let mut accumulated = evaluate_rule(first, answers);
    for rule in rest {
        let current = evaluate_rule(rule, answers);
        accumulated = merge(rule.join_operator(), accumulated, current);
    }
    accumulated
}

/// Same fold as [`combine_rules`], recording every step for explanation.
pub fn combine_traced(rules: &[ConditionalRule], answers: &AnswerMap) -> EvaluationTrace {
    rules.iter().fold(EvaluationTrace::Empty, |acc, rule| {
        let leaf = EvaluationTrace::Rule(trace_rule(rule, answers));
        match acc {
            EvaluationTrace::Empty => leaf,
            left => {
                let op = rule.join_operator();
                let outcome = merge(op, left.get_outcome(), leaf.get_outcome());
                EvaluationTrace::Combined {
                    op,
                    left: Box::new(left),
                    right: Box::new(leaf),
                    outcome,
                }
            }
        }
    })
}

fn trace_rule(rule: &ConditionalRule, answers: &AnswerMap) -> RuleTrace {
    let actual = answers.get(&rule.field_id);
    RuleTrace {
        field_id: rule.field_id.clone(),
        operator: rule.operator.clone(),
        expected: rule.value.clone(),
        actual: actual.cloned(),
        outcome: engine::apply_operator(rule, actual),
    }
}

fn merge(op: LogicalOperator, accumulated: bool, current: bool) -> bool {
    match op {
        LogicalOperator::And => accumulated && current,
        LogicalOperator::Or => accumulated || current,
    }
}
