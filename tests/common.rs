//! Common test utilities for building forms, rules, answers and dates.
use chrono::{NaiveDate, NaiveDateTime};
use formlogic::prelude::*;

/// Builds an answer map from `(field_id, value)` pairs.
#[allow(dead_code)]
pub fn answers<const N: usize>(pairs: [(&str, Value); N]) -> AnswerMap {
    pairs
        .into_iter()
        .map(|(id, value)| (id.to_string(), value))
        .collect()
}

/// A rule comparing `field_id` against `value`.
#[allow(dead_code)]
pub fn rule(field_id: &str, operator: Operator, value: impl Into<Value>) -> ConditionalRule {
    ConditionalRule::new(field_id, operator).with_value(value)
}

/// A date at 09:30, the time of day should survive every calendar operation.
#[allow(dead_code)]
pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// Creates a small registration form.
///
/// * `email` is always required
/// * `company` is shown when `account_type` equals "business"
/// * `vat_number` is required when `country` contains "de" OR `account_type` equals "business"
/// * `newsletter_topics` is disabled when `newsletter` equals false
/// * `referral` is hidden when `source` is empty
#[allow(dead_code)]
pub fn create_registration_form() -> FormDefinition {
    FormDefinition {
        version: 7,
        fields: vec![
            FieldDefinition::new("email").required(),
            FieldDefinition::new("account_type").required(),
            FieldDefinition::new("company").required().with_logic(ConditionalLogicBlock::new(
                Action::Show,
                vec![rule("account_type", Operator::Equals, "business")],
            )),
            FieldDefinition::new("country"),
            FieldDefinition::new("vat_number").with_logic(ConditionalLogicBlock::new(
                Action::Require,
                vec![
                    rule("country", Operator::Contains, "de"),
                    rule("account_type", Operator::Equals, "business")
                        .joined_by(LogicalOperator::Or),
                ],
            )),
            FieldDefinition::new("newsletter"),
            FieldDefinition::new("newsletter_topics")
                .required()
                .with_logic(ConditionalLogicBlock::new(
                    Action::Disable,
                    vec![rule("newsletter", Operator::Equals, false)],
                )),
            FieldDefinition::new("source"),
            FieldDefinition::new("referral").with_logic(ConditionalLogicBlock::new(
                Action::Hide,
                vec![ConditionalRule::new("source", Operator::IsEmpty)],
            )),
        ],
    }
}

/// The registration form in the camelCase JSON shape produced by form builders.
#[allow(dead_code)]
pub const REGISTRATION_FORM_JSON: &str = r#"{
    "version": 7,
    "fields": [
        { "id": "email", "required": true },
        { "id": "account_type", "required": true },
        {
            "id": "company",
            "required": true,
            "conditionalLogic": {
                "action": "show",
                "rules": [
                    { "id": "r1", "fieldId": "account_type", "operator": "equals", "value": "business" }
                ]
            }
        },
        { "id": "country" },
        {
            "id": "vat_number",
            "conditionalLogic": {
                "action": "require",
                "rules": [
                    { "fieldId": "country", "operator": "contains", "value": "de" },
                    { "fieldId": "account_type", "operator": "equals", "value": "business", "logicalOperator": "OR" }
                ]
            }
        },
        { "id": "newsletter" },
        {
            "id": "newsletter_topics",
            "required": true,
            "conditionalLogic": {
                "action": "disable",
                "rules": [{ "fieldId": "newsletter", "operator": "equals", "value": false }]
            }
        },
        { "id": "source" },
        {
            "id": "referral",
            "conditionalLogic": {
                "action": "hide",
                "rules": [{ "fieldId": "source", "operator": "is_empty", "value": null }]
            }
        }
    ]
}"#;
