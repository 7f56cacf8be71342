//! Statistical and structural checks on the generators, run against
//! the real (unseeded) entropy pool.

use passkeeper::entropy;
use passkeeper::generators::{make_hex_block, make_name, make_number, make_password, make_pin};

// ---------------------------------------------------------------------------
// PIN invariants
// ---------------------------------------------------------------------------

#[test]
fn pin_has_exact_length_and_decimal_digits() {
    let pool = entropy::global();
    for length in [1, 2, 3, 4, 5, 7, 8, 100, 1024] {
        let pin = make_pin(&mut pool.lock().unwrap(), length).expect("pin");
        assert_eq!(pin.len(), length);
        assert!(pin.bytes().all(|b| b.is_ascii_digit()), "pin {pin:?}");
    }
}

#[test]
fn zero_length_pin_is_empty() {
    let pool = entropy::global();
    assert_eq!(make_pin(&mut pool.lock().unwrap(), 0).expect("pin"), "");
}

// ---------------------------------------------------------------------------
// Password invariants
// ---------------------------------------------------------------------------

#[test]
fn password_uses_only_the_64_symbol_alphabet() {
    const ALPHABET: &str =
        "ACDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz0123456789#*?:+=_";

    let pool = entropy::global();
    let password = make_password(&mut pool.lock().unwrap(), 4096).expect("password");
    assert_eq!(password.len(), 4096);
    assert!(password.chars().all(|c| ALPHABET.contains(c)));
}

#[test]
fn password_per_position_entropy_is_near_six_bits() {
    let pool = entropy::global();
    let sample = make_password(&mut pool.lock().unwrap(), 100_000).expect("password");

    let mut counts = [0u32; 256];
    for b in sample.bytes() {
        counts[b as usize] += 1;
    }

    let n = sample.len() as f64;
    let entropy_bits: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = f64::from(c) / n;
            -p * p.log2()
        })
        .sum();

    assert!(
        entropy_bits >= 5.99,
        "measured entropy {entropy_bits:.4} bits/char"
    );
}

// ---------------------------------------------------------------------------
// Hex block invariants
// ---------------------------------------------------------------------------

#[test]
fn hex_block_is_lowercase_hex_of_double_length() {
    let pool = entropy::global();
    for bytes in [1, 2, 16, 64] {
        let hex = make_hex_block(&mut pool.lock().unwrap(), bytes).expect("hex");
        assert_eq!(hex.len(), bytes * 2);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

// ---------------------------------------------------------------------------
// Uniformity
// ---------------------------------------------------------------------------

#[test]
fn make_number_stays_below_the_modulo() {
    let pool = entropy::global();
    let mut pool = pool.lock().unwrap();
    for modulo in [1, 2, 10, 64, 1000, u32::MAX] {
        for _ in 0..200 {
            assert!(make_number(&mut pool, modulo).expect("number") < modulo);
        }
    }
}

#[test]
fn make_number_is_uniform_over_small_moduli() {
    // Chi-squared over 100k draws; the bound is far above the p = 0.01
    // critical value so the test does not flake.
    let pool = entropy::global();
    let mut pool = pool.lock().unwrap();

    for modulo in [10u32, 64, 100] {
        let draws = 100_000u32;
        let mut counts = vec![0u32; modulo as usize];
        for _ in 0..draws {
            counts[make_number(&mut pool, modulo).expect("number") as usize] += 1;
        }

        let expected = f64::from(draws) / f64::from(modulo);
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = f64::from(c) - expected;
                d * d / expected
            })
            .sum();

        // Critical values at p = 0.01: 21.7 (9 dof), 92.0 (63 dof),
        // 134.6 (99 dof).
        let bound = match modulo {
            10 => 35.0,
            64 => 120.0,
            _ => 170.0,
        };
        assert!(chi2 < bound, "modulo {modulo}: chi2 = {chi2:.1}");
    }
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

#[test]
fn names_are_lowercase_words() {
    let pool = entropy::global();
    let mut pool = pool.lock().unwrap();
    for _ in 0..500 {
        let name = make_name(&mut pool, 2, 5);
        assert!(!name.is_empty());
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase()),
            "unexpected name {name:?}"
        );
    }
}

#[test]
fn fixed_syllable_count_bounds_word_length() {
    // One syllable emits at most 7 letters (doubled two-char onset is
    // impossible, but C1 + C2 + doubled vowel reaches 2+2+2) plus a
    // two-letter ending.
    let pool = entropy::global();
    let mut pool = pool.lock().unwrap();
    for _ in 0..500 {
        let name = make_name(&mut pool, 1, 1);
        assert!(name.len() <= 8, "implausibly long syllable: {name:?}");
    }
}
