//! Output formatting for JSON and text modes
//!
//! Provides types for structured output that can be serialized to JSON
//! for machine-readable output, or displayed as text for human consumption.

use serde::Serialize;

/// Result of a find operation
#[derive(Debug, Serialize)]
pub struct FindResult {
    pub filename: String,
    pub path: String,
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub paths: Vec<String>,
}

/// Result of a check operation
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub ok: bool,
    pub paths: Vec<String>,
}

/// Print a value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    }
}
