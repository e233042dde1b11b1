//! Coloured status lines for humans. Logs go through `log`; this is the
//! user-facing channel.

use colored::Colorize;

pub fn info(message: impl AsRef<str>) {
    let m = message.as_ref();
    println!("{} {}", "ℹ".blue(), m.blue());
}

pub fn success(message: impl AsRef<str>) {
    let m = message.as_ref();
    println!("{} {}", "✓".green(), m.green());
}

pub fn warning(message: impl AsRef<str>) {
    let m = message.as_ref();
    println!("{} {}", "⚠".yellow(), m.yellow());
}

/// Warning that belongs to a failure report.
pub fn warning_stderr(message: impl AsRef<str>) {
    let m = message.as_ref();
    eprintln!("{} {}", "⚠".yellow(), m.yellow());
}

/// Errors always go to stderr.
pub fn error(message: impl AsRef<str>) {
    let m = message.as_ref();
    eprintln!("{} {}", "✗".red(), m.red());
}

/// Usage hint that accompanies an error; stays on stderr with it.
pub fn hint(message: impl AsRef<str>) {
    let m = message.as_ref();
    eprintln!("{} {}", "ℹ".blue(), m.blue());
}

pub fn line(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

pub fn header(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}
