//! Console output helpers.

use colored::Colorize;

/// Print a stage separator.
pub fn rule() {
    println!("{}", "---------------------".dimmed());
}

/// Print a progress line.
pub fn progress(msg: &str) {
    println!("{}", msg);
}

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a non-fatal problem.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}
