//! Pronounceable pseudo-word generator.
//!
//! A name is a run of syllables plus a word ending.  Each syllable is
//! `C1 [C2] V`: a consonant cluster, an optional second consonant, and
//! a vowel cluster.  The first syllable may drop its onset, and both
//! consonants and vowels may double where English allows it ("rr",
//! "ee" but never "uu").  Letter clusters are drawn from weighted
//! tables whose distributions follow English letter frequency; each
//! table's weights sum to 2^24, so one 24-bit draw selects a cluster
//! with a weighted walk and no rejection step.
//!
//! The syllable count is a sum of independent single-bit draws, which
//! gives an approximately binomial (not uniform) distribution between
//! the requested bounds.

use crate::entropy::EntropyPool;
use crate::errors::Result;

/// A letter cluster with its duplication flag and selection weight.
struct Literal {
    value: &'static str,
    can_dup: bool,
    weight: u32,
}

const fn lit(value: &'static str, can_dup: bool, weight: u32) -> Literal {
    Literal {
        value,
        can_dup,
        weight,
    }
}

/// Weights in each table sum to exactly 2^24.
#[cfg(test)]
pub(crate) const WEIGHT_TOTAL: u64 = 1 << 24;

static VOWELS: &[Literal] = &[
    lit("e", true, 5_040_273),
    lit("a", false, 3_406_646),
    lit("o", true, 3_221_018),
    lit("i", false, 3_063_451),
    lit("u", false, 1_159_547),
    lit("y", false, 886_281),
];

static CONSONANTS: &[Literal] = &[
    lit("n", true, 1_965_342),
    lit("r", true, 1_703_266),
    lit("t", false, 1_674_560),
    lit("s", true, 1_466_326),
    lit("d", true, 1_221_783),
    lit("l", true, 1_125_424),
    lit("", false, 1_048_588),
    lit("th", false, 899_191),
    lit("c", true, 766_989),
    lit("m", true, 738_749),
    lit("f", true, 651_700),
    lit("w", false, 592_582),
    lit("g", true, 573_031),
    lit("p", false, 514_533),
    lit("b", false, 421_277),
    lit("v", false, 313_281),
    lit("sh", false, 310_333),
    lit("h", false, 263_783),
    lit("ch", false, 201_716),
    lit("k", false, 195_044),
    lit("x", false, 48_877),
    lit("qu", false, 31_809),
    lit("j", false, 29_171),
    lit("z", false, 19_861),
];

static WORD_ENDINGS: &[Literal] = &[
    lit("", false, 4_194_304),
    lit("t", false, 1_331_525),
    lit("s", false, 1_249_585),
    lit("r", false, 1_167_645),
    lit("ck", false, 1_085_706),
    lit("y", false, 1_029_371),
    lit("k", false, 1_003_765),
    lit("x", false, 921_825),
    lit("n", false, 839_885),
    lit("th", false, 757_945),
    lit("v", false, 676_005),
    lit("sh", false, 594_065),
    lit("p", false, 512_125),
    lit("b", false, 430_185),
    lit("l", false, 348_245),
    lit("z", false, 266_305),
    lit("ty", false, 221_238),
    lit("cy", false, 147_492),
];

/// One 24-bit draw, then a weighted walk down the table.
fn pick<'a>(pool: &mut EntropyPool, table: &'a [Literal]) -> Result<&'a Literal> {
    let mut t = pool.draw_bits(24)?;

    for literal in table {
        if literal.weight > t {
            return Ok(literal);
        }
        t -= literal.weight;
    }

    unreachable!("table weights sum to 2^24, so a 24-bit draw always lands");
}

/// Generate a pronounceable pseudo-word of `min_syllables` to
/// `max_syllables` syllables plus a word ending.
///
/// A pool failure mid-word returns the prefix accumulated so far;
/// names are suggestions, not secrets, and callers treat a short
/// result as usable.
pub fn make_name(pool: &mut EntropyPool, min_syllables: u32, max_syllables: u32) -> String {
    let mut res = String::new();

    let mut syllables = min_syllables;
    for _ in min_syllables..max_syllables {
        match pool.draw_bits(1) {
            Ok(bit) => syllables += bit,
            Err(_) => return res,
        }
    }

    for i in 0..syllables {
        let Ok(consonant) = pick(pool, CONSONANTS) else {
            return res;
        };
        let Ok(t) = pool.draw_bits(4) else {
            return res;
        };

        // The onset may be dropped at the start of the word (4/16).
        if i != 0 || t >= 4 {
            res.push_str(consonant.value);
        }

        if t == 0 && consonant.can_dup && i != 0 {
            // Consonant doubling, never at the word start.
            res.push_str(consonant.value);
        } else if t >= 12 {
            // A second consonant replaces doubling (4/16).
            let Ok(extra) = pick(pool, CONSONANTS) else {
                return res;
            };
            if pool.draw_bits(4).is_err() {
                return res;
            }
            res.push_str(extra.value);
        }

        let Ok(vowel) = pick(pool, VOWELS) else {
            return res;
        };
        let Ok(t) = pool.draw_bits(4) else {
            return res;
        };

        res.push_str(vowel.value);
        if t == 0 && vowel.can_dup && res.len() > 1 {
            // Vowel doubling; the first letter of a word never doubles.
            res.push_str(vowel.value);
        }
    }

    if let Ok(ending) = pick(pool, WORD_ENDINGS) {
        res.push_str(ending.value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_weight_sum(table: &[Literal]) -> u64 {
        table.iter().map(|l| u64::from(l.weight)).sum()
    }

    #[test]
    fn weight_tables_sum_to_2_pow_24() {
        assert_eq!(table_weight_sum(VOWELS), WEIGHT_TOTAL);
        assert_eq!(table_weight_sum(CONSONANTS), WEIGHT_TOTAL);
        assert_eq!(table_weight_sum(WORD_ENDINGS), WEIGHT_TOTAL);
    }

    #[test]
    fn weighted_walk_picks_by_cumulative_weight() {
        // 0 lands on the first entry.
        let mut pool = EntropyPool::from_draws(&[(0, 24)]);
        assert_eq!(pick(&mut pool, VOWELS).unwrap().value, "e");

        // Just below the first weight still picks "e"; at it, "a".
        let mut pool = EntropyPool::from_draws(&[(5_040_272, 24)]);
        assert_eq!(pick(&mut pool, VOWELS).unwrap().value, "e");
        let mut pool = EntropyPool::from_draws(&[(5_040_273, 24)]);
        assert_eq!(pick(&mut pool, VOWELS).unwrap().value, "a");

        // The maximum draw lands on the last entry.
        let mut pool = EntropyPool::from_draws(&[(0xFF_FFFF, 24)]);
        assert_eq!(pick(&mut pool, VOWELS).unwrap().value, "y");
    }

    // Fixed draw traces pin the word-assembly rules: a given trace
    // maps to exactly one output string.

    #[test]
    fn single_syllable_from_trace() {
        // C1 = "n", t = 4 (emit onset, no doubling), V = "e", t = 1,
        // ending = "".
        let mut pool =
            EntropyPool::from_draws(&[(0, 24), (4, 4), (0, 24), (1, 4), (0, 24)]);
        assert_eq!(make_name(&mut pool, 1, 1), "ne");
    }

    #[test]
    fn vowel_doubles_when_allowed() {
        // Same trace but the vowel's t = 0: "e" can double.
        let mut pool =
            EntropyPool::from_draws(&[(0, 24), (4, 4), (0, 24), (0, 4), (0, 24)]);
        assert_eq!(make_name(&mut pool, 1, 1), "nee");
    }

    #[test]
    fn first_letter_never_doubles() {
        // Onset dropped (t = 2 < 4), vowel t = 0: the word is one
        // letter long when the vowel lands, so no doubling.
        let mut pool =
            EntropyPool::from_draws(&[(0, 24), (2, 4), (0, 24), (0, 4), (0, 24)]);
        assert_eq!(make_name(&mut pool, 1, 1), "e");
    }

    #[test]
    fn second_consonant_is_emitted() {
        // t = 12 adds a second consonant; its own 4-bit draw is spent
        // but does not alter assembly.
        let mut pool = EntropyPool::from_draws(&[
            (0, 24),
            (12, 4),
            (0, 24),
            (0, 4),
            (0, 24),
            (1, 4),
            (0, 24),
        ]);
        assert_eq!(make_name(&mut pool, 1, 1), "nne");
    }

    #[test]
    fn consonant_doubles_inside_the_word() {
        // Two syllables: "ne" then "nne" (t = 0 doubles the onset of
        // syllable 1), ending "".
        let mut pool = EntropyPool::from_draws(&[
            (0, 24),
            (4, 4),
            (0, 24),
            (1, 4),
            (0, 24),
            (0, 4),
            (0, 24),
            (1, 4),
            (0, 24),
        ]);
        assert_eq!(make_name(&mut pool, 2, 2), "nenne");
    }

    #[test]
    fn syllable_count_bits_extend_the_word() {
        // One count bit set: 1 + 1 = 2 syllables.
        let mut pool = EntropyPool::from_draws(&[
            (1, 1),
            (0, 24),
            (4, 4),
            (0, 24),
            (1, 4),
            (0, 24),
            (4, 4),
            (0, 24),
            (1, 4),
            (0, 24),
        ]);
        assert_eq!(make_name(&mut pool, 1, 2), "nene");
    }

    #[test]
    fn word_ending_is_appended() {
        // Ending draw lands past "" (4194304) into "t".
        let mut pool =
            EntropyPool::from_draws(&[(0, 24), (4, 4), (0, 24), (1, 4), (4_194_304, 24)]);
        assert_eq!(make_name(&mut pool, 1, 1), "net");
    }

    #[test]
    fn empty_consonant_cluster_yields_vowel_only_syllable() {
        // Cumulative weight up to "" is 9156701..10205289.
        let mut pool =
            EntropyPool::from_draws(&[(9_156_701, 24), (4, 4), (0, 24), (1, 4), (0, 24)]);
        assert_eq!(make_name(&mut pool, 1, 1), "e");
    }
}
