//! Random entity generators: numbers, PINs, passwords, hex keys, and
//! pronounceable names.
//!
//! Every generator drains an [`EntropyPool`] passed by the caller, so
//! the same code serves the process-wide pool and the seeded pools the
//! tests build.  On pool failure the secret-producing generators abort
//! with an error instead of returning partial output; only the name
//! generator returns what it has (names are not secrets).

pub mod name;

pub use name::make_name;

use crate::entropy::EntropyPool;
use crate::errors::Result;

/// 64 symbols, one per 6-bit draw.  Letters that read like digits
/// (I, O, l, o) are excluded; the trailing punctuation survives common
/// password policies.
const PASSWORD_CHARSET: &[u8; 64] =
    b"ACDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz0123456789#*?:+=_";

const HEX_CHARSET: &[u8; 16] = b"0123456789abcdef";

/// Uniform integer in `[0, modulo)`.
///
/// Draws 64 bits and reduces, which keeps the modulo bias below 2^-32
/// for any `modulo` that fits in a `u32`.
pub fn make_number(pool: &mut EntropyPool, modulo: u32) -> Result<u32> {
    debug_assert!(modulo >= 1, "modulo must be at least 1");

    let lo = pool.draw_bits(32)?;
    let hi = pool.draw_bits(32)?;
    let t = (u64::from(hi) << 32) | u64::from(lo);

    Ok((t % u64::from(modulo)) as u32)
}

/// Decimal PIN of exactly `length` digits.
///
/// Digits are produced in blocks of four from one uniform draw in
/// `[0, 10000)`, least significant digit first, so only one modulo
/// reduction is spent per four digits.  The tail block is truncated.
pub fn make_pin(pool: &mut EntropyPool, length: usize) -> Result<String> {
    let mut res = String::with_capacity(length + 3);

    let mut produced = 0;
    while produced < length {
        let mut t = make_number(pool, 10_000)?;
        for _ in 0..4 {
            res.push(char::from(b'0' + (t % 10) as u8));
            t /= 10;
        }
        produced += 4;
    }

    res.truncate(length);
    Ok(res)
}

/// Password of `length` characters from the fixed 64-symbol alphabet.
///
/// One 6-bit draw indexes the alphabet per character.
pub fn make_password(pool: &mut EntropyPool, length: usize) -> Result<String> {
    let mut res = String::with_capacity(length);

    for _ in 0..length {
        let t = pool.draw_bits(6)?;
        res.push(char::from(PASSWORD_CHARSET[t as usize]));
    }

    Ok(res)
}

/// Lowercase hex string of `2 * bytes` characters.
///
/// Each byte is one 8-bit draw emitted low nibble first.  The nibble
/// order is part of the CLI's output format.
pub fn make_hex_block(pool: &mut EntropyPool, bytes: usize) -> Result<String> {
    let mut res = String::with_capacity(bytes * 2);

    for _ in 0..bytes {
        let t = pool.draw_bits(8)?;
        res.push(char::from(HEX_CHARSET[(t & 15) as usize]));
        res.push(char::from(HEX_CHARSET[(t >> 4) as usize]));
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_combines_low_word_then_high_word() {
        // First 32-bit draw is the low word, second the high word.
        let mut pool = EntropyPool::from_draws(&[(10, 32), (0, 32)]);
        assert_eq!(make_number(&mut pool, 7).unwrap(), 3);

        // High word contributes: t = 1 << 32, and 2^32 % 10 == 6.
        let mut pool = EntropyPool::from_draws(&[(0, 32), (1, 32)]);
        assert_eq!(make_number(&mut pool, 10).unwrap(), 6);
    }

    #[test]
    fn number_is_zero_for_modulo_one() {
        let mut pool = EntropyPool::from_limbs([!0; 8]);
        assert_eq!(make_number(&mut pool, 1).unwrap(), 0);
    }

    #[test]
    fn pin_from_zero_block_is_all_zeros() {
        let mut pool = EntropyPool::from_limbs([0; 8]);
        assert_eq!(make_pin(&mut pool, 4).unwrap(), "0000");
    }

    #[test]
    fn pin_emits_block_digits_low_first() {
        // Block value 1234 comes out as "4321".
        let mut pool = EntropyPool::from_draws(&[(1234, 32), (0, 32)]);
        assert_eq!(make_pin(&mut pool, 4).unwrap(), "4321");

        let mut pool = EntropyPool::from_draws(&[(1234, 32), (0, 32)]);
        assert_eq!(make_pin(&mut pool, 2).unwrap(), "43");
    }

    #[test]
    fn pin_spans_multiple_blocks() {
        let mut pool =
            EntropyPool::from_draws(&[(1234, 32), (0, 32), (5678, 32), (0, 32)]);
        assert_eq!(make_pin(&mut pool, 6).unwrap(), "432187");
    }

    #[test]
    fn password_indexes_the_alphabet_with_6_bit_draws() {
        let mut pool =
            EntropyPool::from_draws(&[(0, 6), (1, 6), (2, 6), (62, 6), (63, 6)]);
        assert_eq!(make_password(&mut pool, 5).unwrap(), "ACD=_");
    }

    #[test]
    fn hex_block_emits_low_nibble_first() {
        let mut pool = EntropyPool::from_draws(&[(0xAB, 8)]);
        assert_eq!(make_hex_block(&mut pool, 1).unwrap(), "ba");

        let mut pool = EntropyPool::from_draws(&[(0x01, 8), (0x23, 8)]);
        assert_eq!(make_hex_block(&mut pool, 2).unwrap(), "1032");
    }
}
