//! Character classes and class sets.

use std::fmt;

use crate::rand::RandomSource;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~!@#$%^&*()_-+={[}]|:;\"<,>.?/";

/// A category of characters with a fixed ASCII alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in generation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Draw one character uniformly from this class's alphabet.
    #[inline]
    pub fn pick<R: RandomSource + ?Sized>(self, rng: &mut R) -> u8 {
        let alphabet = self.alphabet();
        alphabet[rng.below(alphabet.len())]
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// The class a character belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Checkbox label used by the form.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Includes Uppercase Letters",
            CharacterClass::Lowercase => "Includes Lowercase Letters",
            CharacterClass::Digit => "Includes Numbers",
            CharacterClass::Symbol => "Includes Symbols",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        };
        f.write_str(name)
    }
}

/// Set of enabled character classes. Iterates in [`CharacterClass::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    /// Flip a class, returning whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.0 ^= class.bit();
        self.contains(class)
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn without(mut self, class: CharacterClass) -> Self {
        self.remove(class);
        self
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Combined alphabet size of the enabled classes.
    pub fn pool_size(self) -> usize {
        self.iter().map(|class| class.alphabet().len()).sum()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl<const N: usize> From<[CharacterClass; N]> for ClassSet {
    fn from(classes: [CharacterClass; N]) -> Self {
        classes.into_iter().collect()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, class) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{class}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SplitMix;
    use CharacterClass::*;

    #[test]
    fn alphabets() {
        assert_eq!(Uppercase.alphabet().len(), 26);
        assert_eq!(Lowercase.alphabet().len(), 26);
        assert_eq!(Digit.alphabet().len(), 10);
        assert_eq!(Symbol.alphabet().len(), 29);
        assert!(Digit.contains('9'));
        assert!(Symbol.contains('"'));
        assert!(!Symbol.contains(' '));
        assert!(!Uppercase.contains('É'));
    }

    #[test]
    fn alphabets_are_disjoint() {
        for c in (0u8..128).map(char::from) {
            let owners = CharacterClass::ALL
                .iter()
                .filter(|class| class.contains(c))
                .count();
            assert!(owners <= 1, "{c:?} belongs to {owners} classes");
        }
    }

    #[test]
    fn pick_reaches_whole_digit_alphabet() {
        let mut rng = SplitMix::new(11);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            let c = Digit.pick(&mut rng);
            seen[(c - b'0') as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "digit 9 must be reachable");
    }

    #[test]
    fn of_classifies_characters() {
        assert_eq!(CharacterClass::of('Q'), Some(Uppercase));
        assert_eq!(CharacterClass::of('q'), Some(Lowercase));
        assert_eq!(CharacterClass::of('0'), Some(Digit));
        assert_eq!(CharacterClass::of('~'), Some(Symbol));
        assert_eq!(CharacterClass::of(' '), None);
    }

    #[test]
    fn set_operations() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.insert(Digit);
        set.insert(Uppercase);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Uppercase, Digit]);
        assert!(!set.toggle(Digit));
        assert!(set.toggle(Symbol));
        assert_eq!(set, ClassSet::from([Symbol, Uppercase]));
        assert_eq!(ClassSet::all().len(), 4);
        assert_eq!(ClassSet::all().without(Symbol).pool_size(), 62);
    }

    #[test]
    fn display() {
        assert_eq!(ClassSet::empty().to_string(), "none");
        assert_eq!(
            ClassSet::from([Digit, Lowercase]).to_string(),
            "lowercase+digits"
        );
    }
}
