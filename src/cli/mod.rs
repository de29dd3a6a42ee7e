//! Command-line interface layer.

pub mod commands;
pub mod types;

pub use types::{Cli, Commands};

/// Print a command failure and exit non-zero.
///
/// In JSON mode the error is emitted as a structured object on stdout so
/// scripted callers can parse it; otherwise it goes to stderr as plain text.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({ "error": err.to_string() });
        println!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
