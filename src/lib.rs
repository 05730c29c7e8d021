//! Password generator form.
//!
//! The core is two pure functions: [`generate`] composes a password with at
//! least one character of every enabled [`CharacterClass`] and shuffles it,
//! [`classify`] rates a configuration as a [`StrengthLevel`]. Randomness is
//! injected through [`RandomSource`]. The [`tui`] and [`cli`] modules are the
//! interactive form and the one-shot command line built on top.

pub mod cli;
pub mod clipboard;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use pass::{
    CharacterClass, ClassSet, GenerateError, GenerationRequest, StrengthLevel, classify,
    entropy_bits, generate,
};
pub use rand::{Rand, RandomSource, SplitMix};
pub use settings::Settings;
