use crate::pass::CharacterClass;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub entropy: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
}

impl CliFlags {
    /// Classes switched off on the command line.
    pub fn disabled_classes(&self) -> impl Iterator<Item = CharacterClass> {
        [
            (self.no_upper, CharacterClass::Uppercase),
            (self.no_lower, CharacterClass::Lowercase),
            (self.no_digits, CharacterClass::Digit),
            (self.no_symbols, CharacterClass::Symbol),
        ]
        .into_iter()
        .filter_map(|(off, class)| off.then_some(class))
    }
}
