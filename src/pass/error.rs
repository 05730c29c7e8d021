use thiserror::Error;

/// Rejected generation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no character classes enabled")]
    NoClasses,
    #[error("length {length} is shorter than the {required} enabled character classes")]
    LengthBelowClassCount { length: usize, required: usize },
}
