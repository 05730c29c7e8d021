//! One-shot command line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode with the full argument list, program name first.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'passform --help'.");
            return ExitCode::from(USAGE);
        }
    };

    ExitCode::from(exit_status(&Context::new(flags).run()))
}

const USAGE: u8 = 2;

/// Process status for a finished run: 0 success, 1 copy failure, 2 usage.
pub fn exit_status(result: &Result<(), Done>) -> u8 {
    match result {
        Ok(()) | Err(Done::Finished) => 0,
        Err(Done::CopyFailed) => 1,
        Err(Done::Unusable) => USAGE,
    }
}
