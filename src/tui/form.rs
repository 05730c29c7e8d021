//! Form state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::pass::CharacterClass;
use crate::rand::RandomSource;
use crate::settings::Settings;

/// Slider range of the length control.
pub const SLIDER_MIN: usize = 1;
pub const SLIDER_MAX: usize = 20;

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Generate,
    Copy,
    Quit,
}

/// One-line notification under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct Form {
    settings: Settings,
    password: String,
    status: Option<Status>,
}

impl Form {
    pub fn new(settings: Settings) -> Self {
        let length = settings.length.clamp(SLIDER_MIN, SLIDER_MAX);
        let settings = settings.with_length(length);
        Self {
            settings,
            password: String::new(),
            status: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Apply a key to the form. Setting changes happen here; actions with
    /// side effects are returned to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Redraw,
            };
        }

        self.status = None;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
            KeyCode::Char('c') => Action::Copy,
            KeyCode::Left | KeyCode::Char('-') => {
                self.set_length(self.settings.length.saturating_sub(1));
                Action::Redraw
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_length(self.settings.length + 1);
                Action::Redraw
            }
            KeyCode::Home => {
                self.set_length(SLIDER_MIN);
                Action::Redraw
            }
            KeyCode::End => {
                self.set_length(SLIDER_MAX);
                Action::Redraw
            }
            KeyCode::Char(c @ '1'..='4') => {
                let class = CharacterClass::ALL[(c as u8 - b'1') as usize];
                self.settings = self.settings.clone().toggle(class);
                log::debug!("toggled {class}, classes={}", self.settings.classes);
                Action::Redraw
            }
            _ => Action::Redraw,
        }
    }

    /// Generate a new password, replacing and wiping the previous one.
    /// Does nothing but show a hint when no class is enabled.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let Some(request) = self.settings.request() else {
            self.status = Some(Status::Error(
                "Select at least one character class.".to_string(),
            ));
            return;
        };
        match request.generate(rng) {
            Ok(pass) => {
                // Keep the slider in step with a floor-raised length.
                self.settings = self.settings.clone().with_length(request.length());
                self.password.zeroize();
                self.password = pass;
            }
            Err(e) => self.status = Some(Status::Error(e.to_string())),
        }
    }

    /// Copy the current password, lazily opening the clipboard.
    pub fn copy(&mut self, clipboard: &mut Option<Clipboard>) {
        if self.password.is_empty() {
            self.status = Some(Status::Error("Generate a password first.".to_string()));
            return;
        }

        if clipboard.is_none() {
            match Clipboard::open() {
                Ok(c) => *clipboard = Some(c),
                Err(e) => {
                    log::debug!("{e}");
                    self.status = Some(Status::Error("Failed to copy".to_string()));
                    return;
                }
            }
        }

        self.status = match clipboard.as_mut().map(|c| c.copy(&self.password)) {
            Some(Ok(())) => Some(Status::Info("Password copied!".to_string())),
            Some(Err(e)) => {
                log::debug!("{e}");
                Some(Status::Error("Failed to copy".to_string()))
            }
            None => Some(Status::Error("Failed to copy".to_string())),
        };
    }

    fn set_length(&mut self, length: usize) {
        let length = length.clamp(SLIDER_MIN, SLIDER_MAX);
        self.settings = self.settings.clone().with_length(length);
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
