//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::StrengthLevel;
use crate::terminal::{RESET, strength_color};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Print a warning to stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print the strength indicator to stderr. Suppressed in quiet mode.
pub fn strength(level: StrengthLevel, entropy_bits: Option<f64>) {
    if quiet::enabled() {
        return;
    }
    let entropy = entropy_bits
        .map(|bits| format!(" ({bits:.1} bits)"))
        .unwrap_or_default();
    if quiet::stderr_is_tty() {
        eprintln!("Strength: {}●{RESET} {level}{entropy}", strength_color(level));
    } else {
        eprintln!("Strength: {level}{entropy}");
    }
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("Password copied!");
    }
}

/// Always shown.
pub fn clipboard_error(err: &str) {
    eprintln!("Failed to copy: {err}");
}

/// Prompt when the clipboard is unavailable. Returns true to print to the
/// terminal instead, false to abort. Non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
