//! Password generation.

use zeroize::Zeroize;

use super::{CharacterClass, ClassSet, GenerateError};
use crate::rand::RandomSource;

/// Generate a password of exactly `length` characters drawn from `classes`.
///
/// One character of every enabled class is placed first so coverage never
/// depends on luck, the rest draw a class uniformly per position, then the
/// whole buffer is shuffled so the guaranteed characters land anywhere.
pub fn generate<R: RandomSource + ?Sized>(
    length: usize,
    classes: ClassSet,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if classes.is_empty() {
        return Err(GenerateError::NoClasses);
    }
    if length < classes.len() {
        return Err(GenerateError::LengthBelowClassCount {
            length,
            required: classes.len(),
        });
    }

    let enabled: Vec<CharacterClass> = classes.iter().collect();
    let mut buf: Vec<u8> = Vec::with_capacity(length);

    buf.extend(enabled.iter().map(|class| class.pick(rng)));
    for _ in enabled.len()..length {
        let class = enabled[rng.below(enabled.len())];
        buf.push(class.pick(rng));
    }

    shuffle(&mut buf, rng);

    let pass: String = buf.iter().copied().map(char::from).collect();
    buf.zeroize();

    log::trace!("generated {length} chars from {classes}");
    Ok(pass)
}

/// Fisher-Yates shuffle, last index down to 1.
#[inline]
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SplitMix;
    use CharacterClass::*;

    #[test]
    fn exact_length_and_coverage() {
        let mut rng = SplitMix::new(5);
        let classes = ClassSet::all();
        let pass = generate(12, classes, &mut rng).unwrap();
        assert_eq!(pass.len(), 12);
        for class in classes.iter() {
            assert!(pass.chars().any(|c| class.contains(c)), "missing {class}");
        }
    }

    #[test]
    fn single_class_uses_only_that_alphabet() {
        let mut rng = SplitMix::new(8);
        let pass = generate(40, ClassSet::from([Digit]), &mut rng).unwrap();
        assert!(pass.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn length_equal_to_class_count() {
        let mut rng = SplitMix::new(21);
        let pass = generate(4, ClassSet::all(), &mut rng).unwrap();
        let mut classes: Vec<_> = pass.chars().filter_map(CharacterClass::of).collect();
        classes.sort();
        assert_eq!(classes, CharacterClass::ALL.to_vec());
    }

    #[test]
    fn rejects_empty_class_set() {
        let mut rng = SplitMix::new(0);
        assert_eq!(
            generate(10, ClassSet::empty(), &mut rng),
            Err(GenerateError::NoClasses)
        );
    }

    #[test]
    fn rejects_length_below_class_count() {
        let mut rng = SplitMix::new(0);
        assert_eq!(
            generate(2, ClassSet::from([Uppercase, Lowercase, Symbol]), &mut rng),
            Err(GenerateError::LengthBelowClassCount {
                length: 2,
                required: 3
            })
        );
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let a = generate(16, ClassSet::all(), &mut SplitMix::new(77)).unwrap();
        let b = generate(16, ClassSet::all(), &mut SplitMix::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SplitMix::new(3);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        assert_ne!(items, (0..50).collect::<Vec<_>>());
        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = SplitMix::new(3);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [7u8];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [7]);
    }
}
