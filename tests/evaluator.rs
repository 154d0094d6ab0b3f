//! Tests for atomic rule evaluation and left-to-right rule combination.
mod common;
use common::*;
use formlogic::prelude::*;

#[test]
fn test_equals_is_strict() {
    let a = answers([
        ("age", Value::Number(18.0)),
        ("name", Value::from("Ada")),
        ("agree", Value::Bool(true)),
    ]);

    assert!(evaluate_rule(&rule("age", Operator::Equals, 18), &a));
    assert!(!evaluate_rule(&rule("age", Operator::Equals, "18"), &a));
    assert!(evaluate_rule(&rule("name", Operator::Equals, "Ada"), &a));
    assert!(!evaluate_rule(&rule("name", Operator::Equals, "ada"), &a));
    assert!(evaluate_rule(&rule("agree", Operator::Equals, true), &a));
    assert!(!evaluate_rule(&rule("agree", Operator::Equals, "true"), &a));
    assert!(!evaluate_rule(&rule("missing", Operator::Equals, ""), &a));
}

#[test]
fn test_lists_never_equal() {
    let a = answers([("tags", Value::from(vec!["a"]))]);
    let same_list = rule("tags", Operator::Equals, vec!["a"]);
    assert!(!evaluate_rule(&same_list, &a));
    assert!(evaluate_rule(&rule("tags", Operator::NotEquals, vec!["a"]), &a));
}

#[test]
fn test_not_equals_negates_equals() {
    let a = answers([
        ("n", Value::Number(3.0)),
        ("s", Value::from("x")),
        ("b", Value::Bool(false)),
        ("l", Value::from(vec!["x"])),
    ]);
    let candidates = [
        Value::Number(3.0),
        Value::Number(4.0),
        Value::from("x"),
        Value::from("3"),
        Value::Bool(false),
    ];

    for field in ["n", "s", "b", "l", "absent"] {
        for value in &candidates {
            let eq = rule(field, Operator::Equals, value.clone());
            let ne = rule(field, Operator::NotEquals, value.clone());
            assert_eq!(
                evaluate_rule(&ne, &a),
                !evaluate_rule(&eq, &a),
                "field {} against {}",
                field,
                value
            );
        }
    }
}

#[test]
fn test_contains_text_is_case_insensitive() {
    let a = answers([("city", Value::from("Berlin, DE"))]);
    assert!(evaluate_rule(&rule("city", Operator::Contains, "de"), &a));
    assert!(evaluate_rule(&rule("city", Operator::Contains, "BERLIN"), &a));
    assert!(!evaluate_rule(&rule("city", Operator::Contains, "paris"), &a));
    assert!(!evaluate_rule(&rule("city", Operator::NotContains, "berlin"), &a));
    assert!(evaluate_rule(&rule("city", Operator::NotContains, "paris"), &a));
}

#[test]
fn test_contains_list_is_exact_membership() {
    let a = answers([("colors", Value::from(vec!["Red", "blue"]))]);
    assert!(evaluate_rule(&rule("colors", Operator::Contains, "Red"), &a));
    assert!(!evaluate_rule(&rule("colors", Operator::Contains, "red"), &a));
    assert!(!evaluate_rule(&rule("colors", Operator::Contains, "blu"), &a));
    assert!(evaluate_rule(&rule("colors", Operator::NotContains, "red"), &a));
    assert!(!evaluate_rule(&rule("colors", Operator::NotContains, "blue"), &a));
}

#[test]
fn test_contains_asymmetry_on_other_types() {
    let a = answers([("count", Value::Number(12.0)), ("text", Value::from("12"))]);

    // Unsupported pairings: contains is false, and so is not_contains' negation.
    for (field, value) in [
        ("count", Value::from("1")),
        ("text", Value::Number(1.0)),
        ("absent", Value::from("x")),
    ] {
        assert!(!evaluate_rule(&rule(field, Operator::Contains, value.clone()), &a));
        assert!(evaluate_rule(&rule(field, Operator::NotContains, value), &a));
    }
}

#[test]
fn test_ordering_comparisons_coerce_numbers() {
    let a = answers([
        ("age", Value::Number(21.0)),
        ("age_text", Value::from(" 21 ")),
        ("word", Value::from("twenty")),
        ("flag", Value::Bool(true)),
    ]);

    assert!(evaluate_rule(&rule("age", Operator::GreaterThan, 18), &a));
    assert!(!evaluate_rule(&rule("age", Operator::LessThan, 18), &a));
    assert!(evaluate_rule(&rule("age_text", Operator::GreaterThan, "18"), &a));
    assert!(evaluate_rule(&rule("flag", Operator::LessThan, 2), &a));

    // NaN on either side makes both comparisons false.
    assert!(!evaluate_rule(&rule("word", Operator::GreaterThan, 0), &a));
    assert!(!evaluate_rule(&rule("word", Operator::LessThan, 0), &a));
    assert!(!evaluate_rule(&rule("absent", Operator::GreaterThan, -1), &a));
    assert!(!evaluate_rule(&rule("age", Operator::GreaterThan, "abc"), &a));
}

#[test]
fn test_emptiness() {
    let a = answers([
        ("blank", Value::from("")),
        ("none_picked", Value::List(vec![])),
        ("zero", Value::Number(0.0)),
        ("no", Value::Bool(false)),
        ("text", Value::from("hi")),
    ]);

    for field in ["blank", "none_picked", "absent"] {
        assert!(evaluate_rule(&ConditionalRule::new(field, Operator::IsEmpty), &a));
        assert!(!evaluate_rule(&ConditionalRule::new(field, Operator::IsNotEmpty), &a));
    }
    for field in ["zero", "no", "text"] {
        assert!(!evaluate_rule(&ConditionalRule::new(field, Operator::IsEmpty), &a));
        assert!(evaluate_rule(&ConditionalRule::new(field, Operator::IsNotEmpty), &a));
    }
}

#[test]
fn test_unknown_operator_is_false() {
    let a = answers([("x", Value::from("y"))]);
    let unknown = rule("x", Operator::from("matches_regex"), "y");
    assert!(!evaluate_rule(&unknown, &a));
}

#[test]
fn test_combine_empty_is_true() {
    assert!(combine_rules(&[], &AnswerMap::new()));
    assert!(combine_rules(&[], &answers([("x", Value::Bool(false))])));
}

#[test]
fn test_combine_uses_each_rules_own_operator() {
    let a = answers([("a", Value::Number(1.0)), ("b", Value::Number(2.0))]);
    let r1_false = rule("a", Operator::Equals, 99);
    let r2_true = rule("b", Operator::Equals, 2).joined_by(LogicalOperator::Or);

    // r1 = false, r2 = true joined by OR: the OR belongs to r2.
    assert!(combine_rules(&[r1_false.clone(), r2_true.clone()], &a));

    // The same pair with r2 defaulting to AND.
    let r2_and = rule("b", Operator::Equals, 2);
    assert!(!combine_rules(&[r1_false, r2_and], &a));
}

#[test]
fn test_combine_is_left_to_right_without_precedence() {
    let a = answers([("t", Value::Bool(true)), ("f", Value::Bool(false))]);
    let t = || rule("t", Operator::Equals, true);
    let f = || rule("f", Operator::Equals, true);

    // true OR true AND false: standard precedence gives true, left-to-right gives false.
    let rules = [
        t(),
        t().joined_by(LogicalOperator::Or),
        f().joined_by(LogicalOperator::And),
    ];
    assert!(!combine_rules(&rules, &a));

    // false AND false OR true: left-to-right gives true.
    let rules = [f(), f(), t().joined_by(LogicalOperator::Or)];
    assert!(combine_rules(&rules, &a));

    // The first rule's own operator is ignored.
    let rules = [t().joined_by(LogicalOperator::Or)];
    assert!(combine_rules(&rules, &a));
}

#[test]
fn test_combine_traced_agrees_and_records_every_rule() {
    let a = answers([("t", Value::Bool(true)), ("f", Value::Bool(false))]);
    let rules = vec![
        rule("f", Operator::Equals, true),
        rule("f", Operator::Equals, true),
        rule("t", Operator::Equals, true).joined_by(LogicalOperator::Or),
    ];

    let trace = combine_traced(&rules, &a);
    assert_eq!(trace.get_outcome(), combine_rules(&rules, &a));
    // The second rule is evaluated even though the AND was already settled.
    assert_eq!(trace.rule_count(), 3);
    assert_eq!(combine_traced(&[], &a), EvaluationTrace::Empty);
}
