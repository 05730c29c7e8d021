//! Terminal output utilities.
//!
//! Box drawing, the length slider, strength dot, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::StrengthLevel;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Strength Indicator
// ============================================================================

/// Indicator color: Strong green, Medium yellow, Weak red.
pub fn strength_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::Strong => GREEN,
        StrengthLevel::Medium => YELLOW,
        StrengthLevel::Weak => RED,
    }
}

/// Colored dot followed by the level name.
pub fn strength_dot(level: StrengthLevel) -> String {
    format!("{}●{RESET} {}", strength_color(level), level)
}

// ============================================================================
// Slider
// ============================================================================

/// Fill percentage of a slider at `value` between `min` and `max`.
pub fn slider_percent(value: usize, min: usize, max: usize) -> usize {
    if max <= min {
        return 100;
    }
    (value.clamp(min, max) - min) * 100 / (max - min)
}

/// Render a slider track `width` cells wide: `━━━━●────`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let knob = slider_percent(value, min, max) * (width - 1) / 100;
    let mut track = String::with_capacity(width * 3);
    track.push_str(&"━".repeat(knob));
    track.push('●');
    track.push_str(&"─".repeat(width - 1 - knob));
    track
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    println!("{}", boxed(content));
}

/// Print a line with `left` flush left and `right` flush right inside the box.
pub fn box_split(left: &str, right: &str) {
    let inner_width = BOX_WIDTH - 4;
    let gap = inner_width.saturating_sub(console_width(left) + console_width(right));
    box_line(&format!("{left}{}{right}", " ".repeat(gap.max(1))));
}

/// Print box content line with the content centered.
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    box_line(&format!("{}{}", " ".repeat(left_pad), content));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{flag:<flag_col$}");

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    box_line(&format!("{flag_padded}{first}"));
    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        box_line(&format!("{indent}{line}"));
    }
}

/// Pad `content` to the inner box width and frame it.
fn boxed(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
