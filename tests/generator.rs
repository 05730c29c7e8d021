use passform::{CharacterClass, ClassSet, GenerateError, SplitMix, StrengthLevel, classify, generate};

/// Every non-empty combination of the four classes.
fn all_class_sets() -> impl Iterator<Item = ClassSet> {
    (1u8..16).map(|mask| {
        CharacterClass::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, class)| *class)
            .collect()
    })
}

#[test]
fn every_valid_request_succeeds_with_exact_length_and_coverage() {
    let mut rng = SplitMix::new(0x5eed);
    for classes in all_class_sets() {
        for length in classes.len()..=128 {
            let pass = generate(length, classes, &mut rng)
                .unwrap_or_else(|e| panic!("{classes} x {length}: {e}"));
            assert_eq!(pass.chars().count(), length);

            for class in classes.iter() {
                assert!(
                    pass.chars().any(|c| class.contains(c)),
                    "{pass:?} lacks {class}"
                );
            }
            for c in pass.chars() {
                let owner = CharacterClass::of(c).expect("character outside every alphabet");
                assert!(classes.contains(owner), "{c:?} is {owner}, not in {classes}");
            }
        }
    }
}

#[test]
fn invalid_requests_are_rejected() {
    let mut rng = SplitMix::new(1);
    assert_eq!(generate(8, ClassSet::empty(), &mut rng), Err(GenerateError::NoClasses));
    assert_eq!(
        generate(0, ClassSet::from([CharacterClass::Digit]), &mut rng),
        Err(GenerateError::LengthBelowClassCount { length: 0, required: 1 })
    );
    assert_eq!(
        generate(3, ClassSet::all(), &mut rng),
        Err(GenerateError::LengthBelowClassCount { length: 3, required: 4 })
    );
}

#[test]
fn guaranteed_characters_are_not_pinned_to_the_front() {
    // With length equal to the class count, each password is one character per
    // class; before shuffling they would always come out in class order.
    const TRIALS: usize = 4000;
    let mut rng = SplitMix::new(2024);
    let mut counts = [[0usize; 4]; 4];

    for _ in 0..TRIALS {
        let pass = generate(4, ClassSet::all(), &mut rng).unwrap();
        for (pos, c) in pass.chars().enumerate() {
            let class = CharacterClass::of(c).unwrap();
            counts[pos][class as usize] += 1;
        }
    }

    // Expected 1000 per cell; the standard deviation is about 27.
    for (pos, row) in counts.iter().enumerate() {
        for (class, &n) in row.iter().enumerate() {
            assert!(
                (800..=1200).contains(&n),
                "position {pos} holds class {class} {n} times out of {TRIALS}"
            );
        }
    }
}

#[test]
fn filler_positions_draw_classes_evenly() {
    let mut rng = SplitMix::new(99);
    let classes = ClassSet::from([CharacterClass::Uppercase, CharacterClass::Digit]);
    let mut digits = 0usize;
    let mut total = 0usize;

    for _ in 0..500 {
        let pass = generate(20, classes, &mut rng).unwrap();
        digits += pass.chars().filter(char::is_ascii_digit).count();
        total += pass.len();
    }

    // 2 guaranteed + 18 filler at 1/2 each: expect half of all characters.
    let share = digits as f64 / total as f64;
    assert!((0.45..=0.55).contains(&share), "digit share {share}");
}

#[test]
fn classify_matches_documented_boundaries() {
    use CharacterClass::*;

    assert_eq!(classify(ClassSet::from([Uppercase, Lowercase, Digit]), 8), StrengthLevel::Strong);
    assert_eq!(classify(ClassSet::from([Uppercase, Digit]), 6), StrengthLevel::Medium);
    assert_eq!(classify(ClassSet::from([Digit]), 4), StrengthLevel::Weak);
    assert_eq!(classify(ClassSet::from([Uppercase, Lowercase, Digit]), 7), StrengthLevel::Medium);
}

#[test]
fn classify_is_idempotent_over_all_inputs() {
    for classes in all_class_sets() {
        for length in 0..=20 {
            assert_eq!(classify(classes, length), classify(classes, length));
        }
    }
}
