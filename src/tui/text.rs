use super::form::{Form, SLIDER_MAX, SLIDER_MIN, Status};
use crate::pass::CharacterClass;
use crate::terminal::{
    DIM, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_split, box_top,
    flush, print_rule, slider, strength_dot,
};

const SLIDER_WIDTH: usize = 50;

/// Draw the whole form.
pub fn print_form(form: &Form) {
    let settings = form.settings();

    box_top("Password Generator");
    box_line("");
    if form.password().is_empty() {
        box_line(&format!("  {DIM}Password{RESET}"));
    } else {
        box_line(&format!("  {YELLOW}{}{RESET}", form.password()));
    }
    box_line("");
    print_rule();
    box_line("");
    box_split(
        "  Password Length",
        &format!("{YELLOW}{}{RESET}  ", settings.length),
    );
    box_line(&format!(
        "  {}",
        slider(settings.length, SLIDER_MIN, SLIDER_MAX, SLIDER_WIDTH)
    ));
    box_line("");

    for (i, class) in CharacterClass::ALL.iter().enumerate() {
        let mark = if settings.classes.contains(*class) { "x" } else { " " };
        box_line(&format!("  {}) [{mark}] {}", i + 1, class.label()));
    }

    box_line("");
    box_split("  Strength", &format!("{}  ", strength_dot(settings.strength())));
    box_line("");
    print_rule();
    box_line_center("Enter: generate | c: copy | q: quit");
    box_line_center("\u{2190}/\u{2192}: length | 1-4: toggle classes");
    box_bottom();

    match form.status() {
        Some(Status::Info(msg)) => println!("{msg}"),
        Some(Status::Error(msg)) => println!("{RED}{msg}{RESET}"),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("passform");
    box_line_center("Password generator form");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments to open the form.");
    box_line("  2) Client: pass flags (e.g. -l 16 -n 3) to print");
    box_line("     passwords without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 1-128 (default: 10)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-digits", "Leave out numbers");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("      --seed <N>", "Reproducible output from a seeded generator");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -e, --entropy", "Show entropy estimate with the strength");
    box_opt("  -q, --quiet", "Print passwords only");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passform                   Open the form");
    box_line("  passform -l 16             One password, 16 characters");
    box_line("  passform -l 8 --no-symbols Letters and digits only");
    box_line("  passform -n 5 -q           Five passwords, no report");
    box_line("");
    box_bottom();
    println!();
}
