//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::settings::Settings;
use crate::tui::print_help;

/// How a run ended early.
#[derive(Debug, PartialEq, Eq)]
pub enum Done {
    /// Nothing left to do (help, version, user abort).
    Finished,
    /// Settings cannot produce a password.
    Unusable,
    /// Generation succeeded but the clipboard write failed.
    CopyFailed,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Clipboard>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a context from parsed flags.
    pub fn new(flags: CliFlags) -> Self {
        Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        }
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags()?;
        self.open_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done::Finished);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Finished);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    pub fn apply_flags(&mut self) -> Result<(), Done> {
        let mut classes = self.settings.classes;
        for class in self.flags.disabled_classes() {
            classes.remove(class);
        }
        if classes.is_empty() {
            prompts::error("All character classes are disabled; nothing to generate.");
            return Err(Done::Unusable);
        }

        let mut settings = self.settings.clone().with_classes(classes);
        if let Some(len) = self.flags.length {
            settings = settings.with_length(len);
            if settings.length != len {
                prompts::warn(&format!(
                    "Length raised to {} to fit one character per class.",
                    settings.length
                ));
            }
        }
        if let Some(num) = self.flags.number {
            settings = settings.with_count(num);
        }
        settings.seed = self.flags.seed;
        settings.show_entropy = self.flags.entropy;
        settings.to_clipboard = self.flags.clipboard;

        log::debug!(
            "cli settings: length={} classes={} count={} seeded={}",
            settings.length,
            settings.classes,
            settings.number_of_passwords,
            settings.seed.is_some()
        );
        self.settings = settings;
        Ok(())
    }

    fn open_clipboard(&mut self) -> Result<(), Done> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match Clipboard::open() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                log::debug!("{e}");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                } else {
                    return Err(Done::Finished);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Done> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_output(&mut out)
    }

    /// Generate passwords into `out`, or onto the clipboard when enabled.
    pub fn write_output<W: Write>(&mut self, out: &mut W) -> Result<(), Done> {
        let request = self.settings.request().ok_or(Done::Unusable)?;
        let mut rng = self.settings.rng();
        let count = self.settings.number_of_passwords;

        let capacity = (request.length() + 1).saturating_mul(count);
        let mut output = String::with_capacity(capacity);
        for _ in 0..count {
            let mut pass = request.generate(&mut rng).map_err(|e| {
                prompts::error(&e.to_string());
                Done::Unusable
            })?;
            output.push_str(&pass);
            output.push('\n');
            pass.zeroize();
        }

        let result = match self.clipboard.as_mut() {
            Some(clipboard) if self.settings.to_clipboard => {
                match clipboard.copy(output.trim_end_matches('\n')) {
                    Ok(()) => {
                        prompts::clipboard_copied();
                        Ok(())
                    }
                    Err(e) => {
                        prompts::clipboard_error(&e.to_string());
                        Err(Done::CopyFailed)
                    }
                }
            }
            _ => out
                .write_all(output.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|e| {
                    log::debug!("stdout write failed: {e}");
                    Done::Finished
                }),
        };
        output.zeroize();

        let entropy = self.settings.show_entropy.then(|| request.entropy_bits());
        prompts::strength(request.strength(), entropy);
        result
    }
}
