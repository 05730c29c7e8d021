//! Password generation and strength rating.

mod class;
mod error;
mod generate;
mod strength;

pub use class::{CharacterClass, ClassSet};
pub use error::GenerateError;
pub use generate::{generate, shuffle};
pub use strength::{StrengthLevel, classify, entropy_bits};

use crate::rand::RandomSource;

/// A validated generation input: at least one class, and a length that
/// leaves room for one character per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Result<Self, GenerateError> {
        if classes.is_empty() {
            return Err(GenerateError::NoClasses);
        }
        if length < classes.len() {
            return Err(GenerateError::LengthBelowClassCount {
                length,
                required: classes.len(),
            });
        }
        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
        generate(self.length, self.classes, rng)
    }

    pub fn strength(&self) -> StrengthLevel {
        classify(self.classes, self.length)
    }

    pub fn entropy_bits(&self) -> f64 {
        entropy_bits(self.classes, self.length)
    }
}
