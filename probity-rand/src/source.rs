//! Deterministic draw source for the filler
//!
//! # PRNG Algorithm
//!
//! SplitMix64: the state advances by the golden-ratio increment and each
//! output is the mixed state. The same seed yields the same stream on every
//! platform, which is what makes `fill_from_seed` reproducible.
//!
//! The stream plugs into `rand` through [`RngCore`] and [`SeedableRng`], so
//! custom `Drawn` implementations can use the full `rand::Rng` API. The
//! filler's built-in kinds use the fixed draw rules below instead, keeping
//! literal fixtures stable.

use rand::{RngCore, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded SplitMix64 stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRng {
    state: u64,
}

impl FillRng {
    /// Stream whose state starts at `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// 64 random bits.
    #[inline]
    pub fn uint64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix(self.state)
    }

    /// 63 random bits, as a non-negative `i64`.
    #[inline]
    pub fn int63(&mut self) -> i64 {
        (self.uint64() >> 1) as i64
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    #[inline]
    pub fn float64(&mut self) -> f64 {
        (self.uint64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform in `[0, 1)` with 24 bits of precision.
    #[inline]
    pub fn float32(&mut self) -> f32 {
        (self.uint64() >> 40) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// One random bit, taken from a 63-bit draw.
    #[inline]
    pub fn bool(&mut self) -> bool {
        self.int63() % 2 == 0
    }

    /// Lowercase hex rendering of one 64-bit draw, always 16 characters.
    pub fn hex_string(&mut self) -> String {
        format!("{:016x}", self.uint64())
    }

    /// Uniform-ish in `[1, max]`, or `0` when `max` is `0`.
    ///
    /// Modulo bias is negligible for container-sized bounds.
    pub fn container_len(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        1 + (self.uint64() % max as u64) as usize
    }

    /// Current internal state (for debugging/testing).
    pub const fn state(&self) -> u64 {
        self.state
    }
}

#[inline]
const fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl RngCore for FillRng {
    fn next_u32(&mut self) -> u32 {
        (self.uint64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.uint64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.uint64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for FillRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
