//! Terminal output formatting for the flixkit CLI.
//!
//! Provides consistent, colored output using the [`console`] crate. Everything here
//! writes to stderr; stdout is reserved for generated text.

use console::style;

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    eprintln!("\n{}", style(text).bold().cyan());
    eprintln!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    eprintln!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a progress step indicator like `[1/2] Loading template...`.
pub fn print_step(step: u32, total: u32, text: &str) {
    eprintln!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    eprintln!("  {}: {}", style(key).dim(), value);
}
