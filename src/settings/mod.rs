//! Password generation settings.
//!
//! A plain value holding everything the form or the CLI collected from the
//! user. The fields are public for reading and for struct-update syntax;
//! changes to `length` and `classes` should go through the consuming
//! builders (`with_length`, `with_classes`, `toggle`), which keep the length
//! at or above the enabled-class count. The generator only ever sees the
//! [`GenerationRequest`] built from it.

use crate::pass::{
    CharacterClass, ClassSet, GenerationRequest, StrengthLevel, classify, entropy_bits,
};
use crate::rand::{Rand, RandomSource, SplitMix};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 10;
pub const MAX_PASSWORDS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub show_entropy: bool,
    pub seed: Option<u64>,
}

impl Settings {
    /// Set the length, clamped to the supported range and raised to the
    /// enabled-class count.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.apply_length_floor();
        self
    }

    /// Flip a class on or off, raising the length if the new class count
    /// no longer fits.
    pub fn toggle(mut self, class: CharacterClass) -> Self {
        self.classes.toggle(class);
        self.apply_length_floor();
        self
    }

    /// Set how many passwords one run produces, clamped to `1..=MAX_PASSWORDS`.
    pub fn with_count(mut self, count: usize) -> Self {
        self.number_of_passwords = count.clamp(1, MAX_PASSWORDS);
        self
    }

    pub fn with_classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self.apply_length_floor();
        self
    }

    /// The request to generate with, or `None` if nothing is enabled.
    pub fn request(&self) -> Option<GenerationRequest> {
        let length = self.length.max(self.classes.len());
        GenerationRequest::new(length, self.classes).ok()
    }

    pub fn strength(&self) -> StrengthLevel {
        classify(self.classes, self.length)
    }

    pub fn entropy_bits(&self) -> f64 {
        entropy_bits(self.classes, self.length)
    }

    /// Random source for these settings: seeded when a seed was given.
    pub fn rng(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SplitMix::new(seed)),
            None => Box::new(Rand::new()),
        }
    }

    fn apply_length_floor(&mut self) {
        if self.length < self.classes.len() {
            self.length = self.classes.len();
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::all(),
            number_of_passwords: 1,
            to_clipboard: false,
            show_entropy: false,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterClass::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.length, 10);
        assert_eq!(s.classes, ClassSet::all());
        assert_eq!(s.strength(), StrengthLevel::Strong);
    }

    #[test]
    fn length_is_clamped() {
        assert_eq!(Settings::default().with_length(0).length, 4);
        assert_eq!(Settings::default().with_length(500).length, MAX_LENGTH);
        let digits = Settings::default().with_classes(ClassSet::from([Digit]));
        assert_eq!(digits.with_length(0).length, 1);
    }

    #[test]
    fn toggling_raises_length_floor() {
        let s = Settings::default()
            .with_classes(ClassSet::from([Digit]))
            .with_length(1);
        assert_eq!(s.length, 1);

        let s = s.toggle(Symbol).toggle(Uppercase);
        assert_eq!(s.length, 3);

        // Disabling keeps the user's length.
        let s = s.toggle(Symbol);
        assert_eq!(s.length, 3);
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(Settings::default().with_count(0).number_of_passwords, 1);
        assert_eq!(Settings::default().with_count(7).number_of_passwords, 7);
        assert_eq!(
            Settings::default().with_count(usize::MAX).number_of_passwords,
            MAX_PASSWORDS
        );
    }

    #[test]
    fn request_is_none_without_classes() {
        let s = Settings::default().with_classes(ClassSet::empty());
        assert!(s.request().is_none());
    }

    #[test]
    fn request_raises_hand_set_length() {
        let s = Settings {
            length: 1,
            ..Settings::default()
        };
        let req = s.request().unwrap();
        assert_eq!(req.length(), 4);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let s = Settings {
            seed: Some(12),
            ..Settings::default()
        };
        let req = s.request().unwrap();
        assert_eq!(req.generate(&mut s.rng()), req.generate(&mut s.rng()));
        assert!(req.generate(&mut s.rng()).is_ok());
    }
}
