//! Interactive password form.

mod form;
mod input;
mod text;

use std::process::ExitCode;

pub use form::{Action, Form, SLIDER_MAX, SLIDER_MIN, Status};
pub use input::read_key;
pub use text::{print_form, print_help};

use crate::clipboard::Clipboard;
use crate::rand::{Rand, entropy_source};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

/// Run the form until the user quits.
pub fn run() -> ExitCode {
    let mut form = Form::new(Settings::default());
    let mut rng = Rand::new();
    log::debug!("form started, entropy source: {}", entropy_source());
    let mut clipboard: Option<Clipboard> = None;

    loop {
        clear();
        print_form(&form);

        let Some(key) = read_key() else { break };
        match form.handle_key(key) {
            Action::Redraw => {}
            Action::Generate => form.generate(&mut rng),
            Action::Copy => form.copy(&mut clipboard),
            Action::Quit => break,
        }
    }

    clear();
    reset_terminal();
    ExitCode::SUCCESS
}
