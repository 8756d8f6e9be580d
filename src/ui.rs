//! Console output helpers
//!
//! Every user-facing message goes through these so the levels look the same
//! across commands. Errors go to stderr, everything else to stdout.

use owo_colors::OwoColorize;

const RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".cyan(), msg);
}

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Indented progress line for a single file or item
pub fn step(msg: &str) {
    println!("  {} {}", "→".dimmed(), msg);
}

/// Section heading surrounded by blank lines
pub fn header(msg: &str) {
    println!("\n{}\n", msg.bold().cyan());
}

/// Full-width title block
pub fn banner(title: &str) {
    println!();
    println!("{}", RULE.bold().cyan());
    println!("{}", title.bold().cyan());
    println!("{}", RULE.bold().cyan());
}

/// Title block for a successful run
pub fn banner_success(title: &str) {
    println!();
    println!("{}", RULE.bold().green());
    println!("{}", title.bold().green());
    println!("{}", RULE.bold().green());
}

/// "Label: value" line with a colored label
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{}:", label).cyan(), value);
}
