use clap::Parser;
use formlogic::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

/// A CLI tool to generate a random form definition and answer snapshot for the engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated form JSON file to
    #[arg(long, default_value = "generated_form.json")]
    form_output: String,

    /// The path to write the generated answers JSON file to
    #[arg(long, default_value = "generated_answers.json")]
    answers_output: String,

    /// The number of fields to generate
    #[arg(long, default_value_t = 20)]
    fields: usize,

    /// The maximum number of rules attached to a field's logic block
    #[arg(long, default_value_t = 4)]
    max_rules: usize,
}

const COLORS: [&str; 5] = ["red", "green", "blue", "Yellow", "violet"];
const OPERATORS: [Operator; 8] = [
    Operator::Equals,
    Operator::NotEquals,
    Operator::Contains,
    Operator::NotContains,
    Operator::GreaterThan,
    Operator::LessThan,
    Operator::IsEmpty,
    Operator::IsNotEmpty,
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.fields == 0 {
        eprintln!("Error: --fields must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a form with {} fields (up to {} rules each)...",
        cli.fields, cli.max_rules
    );

    let form = generate_form(&mut rng, cli.fields, cli.max_rules);
    let answers = generate_answers(&mut rng, &form);

    fs::write(&cli.form_output, serde_json::to_string_pretty(&form)?)?;
    fs::write(&cli.answers_output, serde_json::to_string_pretty(&answers)?)?;

    println!(
        "Successfully saved form to '{}' and answers to '{}'",
        cli.form_output, cli.answers_output
    );
    Ok(())
}

fn field_id(index: usize) -> String {
    format!("field_{:03}", index)
}

/// Fields only reference earlier fields, like a real top-to-bottom form.
fn generate_form(rng: &mut ThreadRng, field_count: usize, max_rules: usize) -> FormDefinition {
    let fields = (0..field_count)
        .map(|index| {
            let mut field = FieldDefinition::new(field_id(index));
            field.required = rng.random_bool(0.4);
            if index > 0 && max_rules > 0 && rng.random_bool(0.6) {
                field.conditional_logic = Some(generate_block(rng, index, max_rules));
            }
            field
        })
        .collect();

    FormDefinition {
        version: rng.random_range(1..1000),
        fields,
    }
}

fn generate_block(rng: &mut ThreadRng, index: usize, max_rules: usize) -> ConditionalLogicBlock {
    let action = match rng.random_range(0..4) {
        0 => Action::Show,
        1 => Action::Hide,
        2 => Action::Require,
        _ => Action::Disable,
    };
    let rule_count = rng.random_range(1..=max_rules);
    let rules = (0..rule_count)
        .map(|_| {
            let target = field_id(rng.random_range(0..index));
            let operator = OPERATORS
                .choose(rng)
                .cloned()
                .unwrap_or(Operator::Equals);
            let mut rule = ConditionalRule::new(target, operator.clone());
            if !operator.is_unary() {
                rule = rule.with_value(generate_value(rng));
            }
            if rng.random_bool(0.3) {
                rule = rule.joined_by(LogicalOperator::Or);
            }
            rule
        })
        .collect();
    ConditionalLogicBlock::new(action, rules)
}

fn generate_value(rng: &mut ThreadRng) -> Value {
    match rng.random_range(0..3) {
        0 => Value::Number(f64::from(rng.random_range(0..100_i32))),
        1 => Value::Bool(rng.random_bool(0.5)),
        _ => Value::from(*COLORS.choose(rng).unwrap_or(&"red")),
    }
}

fn generate_answers(rng: &mut ThreadRng, form: &FormDefinition) -> AnswerSnapshot {
    let mut snapshot = AnswerSnapshot::new();
    for field in &form.fields {
        // Leave some fields unanswered.
        if rng.random_bool(0.2) {
            continue;
        }
        let value = match rng.random_range(0..4) {
            0 => generate_value(rng),
            1 => Value::Text(String::new()),
            _ => {
                let picks = rng.random_range(0..=3);
                Value::List(
                    COLORS
                        .choose_multiple(rng, picks)
                        .map(|c| c.to_string())
                        .collect(),
                )
            }
        };
        snapshot.answers.insert(field.id.clone(), value);
    }
    println!("-> Generated {} answer(s).", snapshot.answers.len());
    snapshot
}
