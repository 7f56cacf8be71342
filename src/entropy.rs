//! Buffered entropy pool over the system CSPRNG.
//!
//! Every generator in this crate draws bit-sized amounts of randomness
//! (1 to 32 bits at a time).  Pulling each draw straight from the OS
//! would waste most of every request, so draws are served from a small
//! buffer that is refilled from `OsRng` only when it runs dry.
//!
//! The pool hands out bits from the high end of the unread region and
//! masks consumed bits out of the buffer, so no bit is ever reused.

use std::sync::{Mutex, OnceLock};

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{PassKeeperError, Result};

/// Number of 32-bit limbs in the buffer.
const POOL_LIMBS: usize = 8;

/// Buffer capacity in bits (256).
const POOL_BITS: usize = POOL_LIMBS * 32;

/// A buffer of CSPRNG output consumed bit by bit.
///
/// Limb `POOL_LIMBS - 1` is consumed first; within a limb, high bits
/// are consumed before low bits.  `remaining` counts unread bits, so
/// the partially-consumed head limb is always `(remaining - 1) / 32`.
pub struct EntropyPool {
    pool: [u32; POOL_LIMBS],
    remaining: usize,
}

impl EntropyPool {
    /// Create an empty pool.  The first draw triggers a refill.
    pub const fn new() -> Self {
        Self {
            pool: [0; POOL_LIMBS],
            remaining: 0,
        }
    }

    /// Draw `count` bits (1..=32) as a uniform unsigned integer.
    ///
    /// A draw that exceeds the unread bits takes the residue, refills
    /// the buffer from the system CSPRNG, and completes from fresh
    /// bits.  CSPRNG failure is reported without partial output.
    pub fn draw_bits(&mut self, count: u32) -> Result<u32> {
        assert!((1..=32).contains(&count), "draw width must be 1..=32 bits");

        let mut count = count as usize;
        let mut acc: u64 = 0;

        if count > self.remaining {
            // Take the residual low bits of limb 0, then refill.
            if self.remaining > 0 {
                acc = u64::from(self.pool[0] & !(u32::MAX << self.remaining));
            }
            count -= self.remaining;
            self.remaining = 0;
            self.refill()?;
        }

        while count > 0 {
            let limb = (self.remaining - 1) / 32;
            let avail = self.remaining - limb * 32;

            if avail <= count {
                // Consume the rest of this limb whole.
                acc = (acc << avail) | u64::from(self.pool[limb]);
                count -= avail;
                self.remaining -= avail;
            } else {
                // Take the top `count` bits and mask them out of the limb.
                let keep = avail - count;
                acc = (acc << count) | u64::from(self.pool[limb] >> keep);
                self.pool[limb] &= !(u32::MAX << keep);
                self.remaining -= count;
                count = 0;
            }
        }

        Ok(acc as u32)
    }

    fn refill(&mut self) -> Result<()> {
        let mut bytes = [0u8; POOL_LIMBS * 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| PassKeeperError::EntropyPool)?;

        for (i, limb) in self.pool.iter_mut().enumerate() {
            *limb = u32::from_le_bytes([
                bytes[4 * i],
                bytes[4 * i + 1],
                bytes[4 * i + 2],
                bytes[4 * i + 3],
            ]);
        }
        self.remaining = POOL_BITS;
        Ok(())
    }

    /// Build a full pool from fixed limb values.  Limb 7's high bits
    /// are drawn first.
    #[cfg(test)]
    pub(crate) fn from_limbs(pool: [u32; POOL_LIMBS]) -> Self {
        Self {
            pool,
            remaining: POOL_BITS,
        }
    }

    /// Build a pool whose successive draws yield the given
    /// `(value, width)` trace, packed MSB-first from the top of limb 7.
    #[cfg(test)]
    pub(crate) fn from_draws(draws: &[(u32, u32)]) -> Self {
        let mut limbs = [0u32; POOL_LIMBS];
        let mut bit = 0usize;
        for &(value, width) in draws {
            assert!((1..=32).contains(&width));
            for k in (0..width).rev() {
                assert!(bit < POOL_BITS, "trace exceeds pool capacity");
                let limb = POOL_LIMBS - 1 - bit / 32;
                let shift = 31 - (bit % 32);
                limbs[limb] |= ((value >> k) & 1) << shift;
                bit += 1;
            }
        }
        Self::from_limbs(limbs)
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide pool shared by all generators.
///
/// Draws are serialized by the mutex; generators lock it once per
/// generated entity.  There is no seeded variant outside of tests.
pub fn global() -> &'static Mutex<EntropyPool> {
    static POOL: OnceLock<Mutex<EntropyPool>> = OnceLock::new();
    POOL.get_or_init(|| Mutex::new(EntropyPool::new()))
}
