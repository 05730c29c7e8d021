//! Strength rating.

use std::fmt;

use super::{CharacterClass, ClassSet};

/// Coarse three-tier strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    Strong,
    Medium,
    Weak,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Weak => "Weak",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate a configuration by class coverage and length.
///
/// Strong needs both letter cases, a digit or symbol class, and 8+ characters.
/// Medium needs either letter case, a digit or symbol class, and 6+ characters.
pub fn classify(classes: ClassSet, length: usize) -> StrengthLevel {
    let upper = classes.contains(CharacterClass::Uppercase);
    let lower = classes.contains(CharacterClass::Lowercase);
    let other = classes.contains(CharacterClass::Digit) || classes.contains(CharacterClass::Symbol);

    if upper && lower && other && length >= 8 {
        StrengthLevel::Strong
    } else if (upper || lower) && other && length >= 6 {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    }
}

/// Password entropy in bits for a uniform draw from the combined alphabet.
pub fn entropy_bits(classes: ClassSet, length: usize) -> f64 {
    let pool = classes.pool_size();
    if pool == 0 {
        return 0.0;
    }
    length as f64 * (pool as f64).log2()
}
