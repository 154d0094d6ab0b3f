use super::{LogicalOperator, Operator, Value};

/// The inputs and outcome of one evaluated rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTrace {
    pub field_id: String,
    pub operator: Operator,
    pub expected: Option<Value>,
    /// The answer found for the field, `None` when it was absent.
    pub actual: Option<Value>,
    pub outcome: bool,
}

/// A record of how a rule list was combined, including every intermediate result.
///
/// The tree is left-deep: `Combined.right` is always a single rule and `Combined.left`
/// holds everything accumulated before it.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationTrace {
    /// An empty rule list, vacuously met.
    Empty,
    Rule(RuleTrace),
    Combined {
        op: LogicalOperator,
        left: Box<EvaluationTrace>,
        right: Box<EvaluationTrace>,
        outcome: bool,
    },
}

impl EvaluationTrace {
    pub fn get_outcome(&self) -> bool {
        match self {
            EvaluationTrace::Empty => true,
            EvaluationTrace::Rule(rule) => rule.outcome,
            EvaluationTrace::Combined { outcome, .. } => *outcome,
        }
    }

    /// Number of rules recorded in the trace.
    pub fn rule_count(&self) -> usize {
        match self {
            EvaluationTrace::Empty => 0,
            EvaluationTrace::Rule(_) => 1,
            EvaluationTrace::Combined { left, right, .. } => left.rule_count() + right.rule_count(),
        }
    }
}
