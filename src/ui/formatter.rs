//! Pure formatting functions for operator output.
//!
//! This module contains all display/formatting logic. Functions here only
//! print; none of them read input or touch the filesystem.

use console::style;

use crate::warning::MaintenanceWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a maintenance warning to the operator.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_warning(warning: &MaintenanceWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display an alias change, e.g. `docs/latest -> 2.1.0`.
pub fn display_link(alias: &str, target: &str) {
    println!("{} {} -> {}", style("✓").green(), alias, style(target).cyan());
}

/// Display the generated switcher block under a bold heading.
///
/// Used by dry runs in place of writing the file.
pub fn display_block(path: &str, block: &str) {
    println!("{}", style(format!("Would write to {}:", path)).bold());
    print!("{}", block);
}

/// Build the whitespace linter summary line.
///
/// # Arguments
/// * `count` - Files that were dirty
/// * `total` - Files that were checked
/// * `elapsed_ms` - Wall time of the scan
/// * `check_only` - Whether files were only reported, not fixed
pub fn whitespace_summary(count: usize, total: usize, elapsed_ms: f64, check_only: bool) -> String {
    let remark = if count == 0 { "Good job! " } else { "" };
    let message = if check_only {
        "Found issues in"
    } else {
        "Had to fix"
    };
    format!(
        "{} {} file(s). {}Took {:.2}ms to check {} files in this project.",
        message, count, remark, elapsed_ms, total
    )
}
