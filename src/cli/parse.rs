use std::str::FromStr;

use thiserror::Error;

use super::CliFlags;
use crate::settings::{MAX_LENGTH, MAX_PASSWORDS, MIN_LENGTH};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Length must be between {min} and {max}, got {0}", min = MIN_LENGTH, max = MAX_LENGTH)]
    LengthOutOfRange(usize),
    #[error("Number of passwords must be between 1 and {max}, got {0}", max = MAX_PASSWORDS)]
    CountOutOfRange(usize),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                let len: usize = value(arg, iter.next())?;
                if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
                    return Err(ParseError::LengthOutOfRange(len));
                }
                flags.length = Some(len);
            }
            "-n" | "--number" => {
                let count: usize = value(arg, iter.next())?;
                if !(1..=MAX_PASSWORDS).contains(&count) {
                    return Err(ParseError::CountOutOfRange(count));
                }
                flags.number = Some(count);
            }
            "--seed" => flags.seed = Some(value(arg, iter.next())?),
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}

fn value<T: FromStr>(flag: &str, raw: Option<&String>) -> Result<T, ParseError> {
    let raw = raw.ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        flag: flag.to_string(),
        value: raw.clone(),
    })
}
