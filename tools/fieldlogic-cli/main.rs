use clap::{Parser, Subcommand};
use fieldlogic::prelude::*;
use serde_json::Value;
use std::fs;

/// Evaluates conditional field visibility and field-group location rules
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log rule fallbacks (invalid patterns, unknown operators) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the visibility of every conditional field for a set of values
    Visibility {
        /// Path to the field definitions JSON file
        fields_path: String,
        /// Path to the field values JSON file
        values_path: String,
        /// Fail instead of evaluating when the logic has circular dependencies
        #[arg(long)]
        reject_cycles: bool,
    },
    /// Print the evaluation order and the fields with circular dependencies
    Cycles {
        /// Path to the field definitions JSON file
        fields_path: String,
    },
    /// Check whether location rules attach to a content context
    Location {
        /// Path to the location rules JSON file
        location_path: String,
        /// Path to the location context JSON file
        context_path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.command {
        Command::Visibility {
            fields_path,
            values_path,
            reject_cycles,
        } => run_visibility(&fields_path, &values_path, reject_cycles),
        Command::Cycles { fields_path } => run_cycles(&fields_path),
        Command::Location {
            location_path,
            context_path,
        } => run_location(&location_path, &context_path),
    }
}

fn run_visibility(fields_path: &str, values_path: &str, reject_cycles: bool) {
    let fields = load_fields(fields_path);
    let values: Value = serde_json::from_str(&read_file(values_path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse values JSON: {}", e)));

    let policy = if reject_cycles {
        CyclePolicy::Reject
    } else {
        CyclePolicy::Warn
    };
    let report = VisibilityResolver::builder(fields)
        .with_cycle_policy(policy)
        .build()
        .and_then(|resolver| resolver.resolve(&values))
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    print_json(&report);
}

fn run_cycles(fields_path: &str) {
    let fields = load_fields(fields_path);
    let resolver = VisibilityResolver::builder(fields)
        .build()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    print_json(&serde_json::json!({
        "evaluationOrder": resolver.evaluation_order(),
        "circularFields": resolver.circular_fields(),
    }));

    if resolver.has_cycles() {
        std::process::exit(2);
    }
}

fn run_location(location_path: &str, context_path: &str) {
    let location = parse_location(&read_file(location_path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse location rules: {}", e)));
    let context: LocationContext = serde_json::from_str(&read_file(context_path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse context JSON: {}", e)));

    let attaches = should_show_field_group(Some(location.as_slice()), &context);
    print_json(&serde_json::json!({ "attaches": attaches }));
}

fn load_fields(path: &str) -> Vec<Field> {
    let stored = StoredFieldSet::from_json(&read_file(path))
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse fields JSON: {}", e)));
    stored
        .into_fields()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert fields: {}", e)))
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", path, e)))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
