//! Bounded number and float draws
//!
//! Covers range membership, precision grids, option defaults and error
//! handling for `number`, `float`, `integer` and `boolean`.

use puregen_core_rs::random::{self, decimal_digits, round_to, NumericOptions};
use puregen_core_rs::{Bound, Faker, RandomError, RandomState};
use std::collections::BTreeSet;

/// Helper to create a seeded faker
fn faker(seed: i64) -> Faker {
    Faker::new(seed).expect("valid seed")
}

#[test]
fn test_number_with_bare_max() {
    let mut f = faker(1);
    for _ in 0..200 {
        let value = f.number(10).unwrap();
        assert!((0.0..=10.0).contains(&value), "{} out of [0, 10]", value);
        assert_eq!(value.fract(), 0.0);
    }
}

#[test]
fn test_number_with_max_option() {
    let mut f = faker(2);
    let options = NumericOptions::max(10.0);
    for _ in 0..200 {
        assert!(f.number(options).unwrap() <= 10.0);
    }
}

#[test]
fn test_number_max_zero_is_zero() {
    let mut f = faker(3);
    assert_eq!(f.number(NumericOptions::max(0.0)).unwrap(), 0.0);
    assert_eq!(f.float(NumericOptions::max(0.0)).unwrap(), 0.0);
    assert_eq!(f.number(NumericOptions::range(0.0, 0.0)).unwrap(), 0.0);
}

#[test]
fn test_number_negative_max_without_min() {
    let mut f = faker(4);
    for _ in 0..20 {
        assert!(f.number(NumericOptions::max(-10.0)).unwrap() <= -10.0);
    }
}

#[test]
fn test_number_negative_min_zero_max() {
    let mut f = faker(5);
    let options = NumericOptions::range(-100.0, 0.0);
    for _ in 0..500 {
        let value = f.number(options).unwrap();
        assert!((-100.0..=0.0).contains(&value));
    }
    assert!(f.float(options).unwrap() <= 0.0);
}

#[test]
fn test_number_in_range_across_varied_bounds() {
    let mut f = faker(6);
    let ranges = [
        (0.0, 0.0),
        (22.0, 33.0),
        (-100.0, 0.0),
        (-50.0, -40.0),
        (-1_000.0, 1_000.0),
        (7.0, 7.0),
        (0.0, 1.0),
        (1e6, 1e6 + 3.0),
    ];
    for _ in 0..1_000 {
        for (min, max) in ranges {
            let value = f.number(NumericOptions::range(min, max)).unwrap();
            assert!(
                value >= min && value <= max,
                "{} out of [{}, {}]",
                value,
                min,
                max
            );
        }
    }
}

#[test]
fn test_inexact_min_never_undershot() {
    let mut state = RandomState::new(11_i64).unwrap();
    let cases = [
        NumericOptions::range(0.1 + 0.2, 1.0).with_precision(0.01),
        NumericOptions::range(1.0 / 3.0, 1.0),
        NumericOptions::range(-2.0 / 3.0, 2.0 / 3.0).with_precision(0.5),
    ];
    for opts in cases {
        let (min, max) = (opts.min.unwrap(), opts.max.unwrap());
        for _ in 0..2_000 {
            let n = random::number(&mut state, opts).unwrap();
            let x = random::float(&mut state, opts).unwrap();
            for value in [n, x] {
                assert!(value >= min && value <= max, "{} out of [{}, {}]", value, min, max);
            }
        }
    }
}

#[test]
fn test_precision_half_over_one_and_a_half() {
    let mut f = faker(7);
    let options = NumericOptions::range(0.0, 1.5).with_precision(0.5);
    let allowed = [0.0, 0.5, 1.0, 1.5];
    let mut seen = BTreeSet::new();

    for _ in 0..500 {
        let value = f.number(options).unwrap();
        assert!(allowed.contains(&value), "unexpected value {}", value);
        seen.insert((value * 2.0) as i64);
    }
    assert_eq!(seen.len(), 4, "every grid point should appear");

    for _ in 0..500 {
        assert!(allowed.contains(&f.float(options).unwrap()));
    }
}

#[test]
fn test_exact_two_decimal_precision() {
    let mut f = faker(8);
    let options = NumericOptions::range(0.5, 0.99).with_precision(0.01);
    for _ in 0..500 {
        let value = f.number(options).unwrap();
        assert_eq!(value, round_to(value, 2));
        assert!((0.5..=0.99).contains(&value));
    }
}

#[test]
fn test_seeded_two_decimal_values() {
    let mut state = RandomState::new(42_i64).unwrap();
    let options = NumericOptions::range(0.5, 0.99).with_precision(0.01);
    let values: Vec<f64> = (0..5)
        .map(|_| random::number(&mut state, options).unwrap())
        .collect();
    assert_eq!(values, vec![0.92, 0.67, 0.76, 0.64, 0.76]);
}

#[test]
fn test_seeded_negative_range_values() {
    let mut state = RandomState::new(42_i64).unwrap();
    let values: Vec<f64> = (0..5)
        .map(|_| random::number(&mut state, NumericOptions::range(-100.0, 0.0)).unwrap())
        .collect();
    assert_eq!(values, vec![-62.0, -68.0, -6.0, -45.0, -98.0]);
}

#[test]
fn test_float_default_precision() {
    let mut f = faker(9);
    for _ in 0..200 {
        let value = f.float(Bound::default()).unwrap();
        assert_eq!(value, round_to(value, 2));
        assert!((0.0..=99_999.0).contains(&value));
    }
}

#[test]
fn test_float_custom_precision() {
    let mut f = faker(10);
    let options = NumericOptions::max(10.0).with_precision(0.001);
    for _ in 0..200 {
        let value = f.float(options).unwrap();
        assert_eq!(value, round_to(value, 3));
        assert!(decimal_digits(value) <= 3);
    }
}

#[test]
fn test_options_not_mutated() {
    let mut f = faker(11);
    let options = NumericOptions {
        min: Some(1.0),
        max: Some(2.0),
        precision: None,
    };
    let before = options;

    f.number(&options).unwrap();
    f.float(&options).unwrap();

    assert_eq!(options, before);
    assert_eq!(options.precision, None);
}

#[test]
fn test_inverted_range_is_range_error() {
    let mut f = faker(12);
    let err = f.number(NumericOptions::range(10.0, 1.0)).unwrap_err();
    assert!(err.is_range_error());
    assert_eq!(err, RandomError::InvertedBounds { min: 10.0, max: 1.0 });
}

#[test]
fn test_bad_precision_is_range_error() {
    let mut f = faker(13);
    for precision in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        let options = NumericOptions::range(0.0, 1.0).with_precision(precision);
        let err = f.number(options).unwrap_err();
        assert!(
            matches!(err, RandomError::InvalidPrecision { .. }),
            "precision {} should be rejected",
            precision
        );
    }
}

#[test]
fn test_failed_call_leaves_stream_unchanged() {
    let mut failing = faker(14);
    let mut clean = faker(14);

    assert!(failing.number(NumericOptions::range(5.0, 4.0)).is_err());
    assert!(failing.integer(5, 4).is_err());

    assert_eq!(failing.number(100).unwrap(), clean.number(100).unwrap());
}

#[test]
fn test_integer_bounds_and_errors() {
    let mut f = faker(15);
    for _ in 0..500 {
        let value = f.integer(-3, 3).unwrap();
        assert!((-3..=3).contains(&value));
    }
    assert_eq!(f.integer(9, 9).unwrap(), 9);
    assert_eq!(
        f.integer(1, 0),
        Err(RandomError::EmptySpan { min: 1, max: 0 })
    );
}

#[test]
fn test_boolean_produces_both_values() {
    let mut f = faker(16);
    let draws: Vec<bool> = (0..200).map(|_| f.boolean()).collect();
    assert!(draws.contains(&true));
    assert!(draws.contains(&false));
}
