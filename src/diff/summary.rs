//! Terminal summary of a comparison.
//!
//! Provides a short human-readable view of the diff statistics with
//! colour cues for insertions and deletions.

use super::script::DiffStats;
use colored::*;

/// Render a human-readable summary of a diff for the terminal
pub fn render_terminal_summary(stats: &DiffStats, left: &str, right: &str) -> String {
    let mut out = String::new();

    out.push_str(&render_header(left, right));
    out.push_str(&render_counts(stats));
    out.push_str(&render_status(stats));

    out
}

fn render_header(left: &str, right: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"Configuration Comparison Summary".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Left:  {}\n", left));
    out.push_str(&format!("Right: {}\n", right));
    out.push_str("---------------------------------------------------\n");
    out
}

fn render_counts(stats: &DiffStats) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} chars in {} span(s)\n",
        "+".green().bold(),
        stats.inserted_chars,
        stats.insert_spans
    ));
    out.push_str(&format!(
        "{} {} chars in {} span(s)\n",
        "-".red().bold(),
        stats.deleted_chars,
        stats.delete_spans
    ));
    out.push_str(&format!("= {} chars unchanged\n", stats.equal_chars));
    out
}

fn render_status(stats: &DiffStats) -> String {
    let mut out = String::new();
    out.push_str("---------------------------------------------------\n");
    let status = if stats.has_changes() {
        "STATUS: DIFFERENT".yellow().bold()
    } else {
        "STATUS: IDENTICAL".green().bold()
    };
    out.push_str(&status.to_string());
    out.push('\n');
    out
}
