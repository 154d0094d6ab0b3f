use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use formlogic::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Conditional field logic and business-day engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve every field of a form against an answer snapshot
    Resolve {
        /// Path to the form definition JSON file
        form_path: String,
        /// Optional path to the answers JSON file (no answers when omitted)
        answers_path: Option<String>,

        /// Print how each field's condition was decided
        #[arg(short, long)]
        explain: bool,

        /// Map a custom operator name onto a built-in one, e.g. `gt=greater_than`
        #[arg(long = "alias", value_parser = parse_alias)]
        aliases: Vec<(String, String)>,
    },
    /// Compute the date a number of business days after a start date
    DueDate {
        /// Start date, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
        start: String,
        /// Number of business days to add
        days: i64,

        /// Path to a business-days config JSON file (Monday to Friday when omitted)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formlogic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Resolve {
            form_path,
            answers_path,
            explain,
            aliases,
        } => run_resolve(&form_path, answers_path.as_deref(), explain, &aliases),
        Command::DueDate {
            start,
            days,
            config,
        } => run_due_date(&start, days, config.as_deref()),
    }
}

fn run_resolve(
    form_path: &str,
    answers_path: Option<&str>,
    explain: bool,
    aliases: &[(String, String)],
) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let form = FormDefinition::from_file(form_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load form: {}", e)));
    let answers = match answers_path {
        Some(path) => AnswerSnapshot::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load answers: {}", e))),
        None => {
            println!("No answers file provided. Resolving against an empty snapshot.");
            AnswerSnapshot::new()
        }
    };

    // --- 2. Engine Construction ---
    let builder = aliases
        .iter()
        .fold(FormEngine::builder(form), |builder, (alias, target)| {
            builder.with_operator_alias(alias, target)
        });
    let engine = builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid form: {}", e)));
    if let Err(e) = engine.validate_references() {
        tracing::warn!("{}", e);
    }

    // --- 3. Resolution ---
    let resolve_start = Instant::now();
    let state = engine.resolve_all(answers.answers());
    let missing = engine.missing_required(answers.answers());
    let resolve_duration = resolve_start.elapsed();

    // --- 4. Results ---
    println!("\nForm version {} ({} fields)", state.version, state.fields.len());
    for (id, field) in &state.fields {
        println!(
            "  {:<24} visible={:<5} required={:<5} disabled={}",
            id, field.visible, field.required, field.disabled
        );
        if explain {
            if let Some(reason) = engine.explain(id, answers.answers()) {
                println!("  {:<24} -> {}", "", reason);
            }
        }
    }

    if missing.is_empty() {
        println!("\nAll required fields are answered.");
    } else {
        println!("\nMissing required fields: {}", missing.join(", "));
    }

    println!("\n--- Performance Summary ---");
    println!("Resolution:      {:?}", resolve_duration);
    println!("Total Execution: {:?}", total_start.elapsed());
}

fn run_due_date(start: &str, days: i64, config_path: Option<&str>) {
    let start = parse_date(start)
        .unwrap_or_else(|| exit_with_error(&format!("Invalid start date '{}'", start)));
    let config = match config_path {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
            });
            serde_json::from_str::<BusinessDaysConfig>(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)))
        }
        None => BusinessDaysConfig::weekdays(),
    };

    let due = due_date(start, days, &config);
    println!("Start:    {} ({})", start, start.format("%A"));
    println!("Due:      {} ({})", due, due.format("%A"));
    println!("Distance: {} day(s)", days_between(start, due, &config));
}

fn parse_date(input: &str) -> Option<NaiveDateTime> {
    input.parse::<NaiveDateTime>().ok().or_else(|| {
        input
            .parse::<NaiveDate>()
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn parse_alias(input: &str) -> std::result::Result<(String, String), String> {
    input
        .split_once('=')
        .map(|(alias, target)| (alias.trim().to_string(), target.trim().to_string()))
        .ok_or_else(|| format!("expected ALIAS=OPERATOR, got '{}'", input))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
