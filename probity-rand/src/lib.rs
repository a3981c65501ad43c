//! PROBITY Rand - Randomized Value Filler
//!
//! Populates test fixtures with deterministic pseudo-random content. A value
//! is filled in place by walking its [`Target`] view; the same seed and the
//! same starting value always produce the same result.
//!
//! ```
//! use probity_core::TestCase;
//!
//! let t = TestCase::new("fixtures");
//! let a: Vec<u32> = probity_rand::new_from_seed(&t, 99);
//! let b: Vec<u32> = probity_rand::new_from_seed(&t, 99);
//! assert_eq!(a, b);
//! assert!((1..=5).contains(&a.len()));
//! ```
//!
//! Unseeded calls use `PROBITY_SEED` when set and a clock-derived seed
//! otherwise; the seed is logged at `debug` so a run can be replayed.

mod filler;
mod impls;
mod macros;
mod source;
mod target;

pub use filler::Filler;
pub use source::FillRng;
pub use target::{
    ComplexTarget, Draw, Fill, FloatTarget, IntTarget, MappingTarget, OptionalTarget,
    SequenceTarget, Target, UintTarget,
};

use chrono::Utc;
use probity_core::{active_config, set_active_config, ProbityConfig, TestContext};

/// A fresh `T`, filled with a clock-derived (or configured) seed.
pub fn new<T: Fill + Default>(t: &dyn TestContext) -> T {
    let mut value = T::default();
    fill(t, &mut value);
    value
}

/// A fresh `T`, filled from `seed`.
pub fn new_from_seed<T: Fill + Default>(t: &dyn TestContext, seed: u64) -> T {
    let mut value = T::default();
    fill_from_seed(t, &mut value, seed);
    value
}

/// Fill `target` in place with a clock-derived (or configured) seed.
pub fn fill<T: Fill>(t: &dyn TestContext, target: &mut T) {
    let config = config_or_fatal(t);
    let seed = match config.seed {
        Some(seed) => {
            tracing::debug!(test = t.name(), seed, "filling with configured seed");
            seed
        }
        None => {
            let seed = clock_seed();
            tracing::debug!(test = t.name(), seed, "filling with clock-derived seed");
            seed
        }
    };
    Filler::new(seed, &config).fill(target);
}

/// Fill `target` in place from `seed`.
pub fn fill_from_seed<T: Fill>(t: &dyn TestContext, target: &mut T, seed: u64) {
    let config = config_or_fatal(t);
    tracing::trace!(
        test = t.name(),
        seed,
        type_name = std::any::type_name::<T>(),
        "filling from seed"
    );
    Filler::new(seed, &config).fill(target);
}

/// Bound the length of freshly generated sequences and maps for the rest of
/// the test.
///
/// The previous bound is restored when `t` runs its cleanups. A negative `n`
/// fails the test immediately.
pub fn set_max_container_size(t: &dyn TestContext, n: i64) {
    let updated = match config_or_fatal(t).with_max_container_size(n) {
        Ok(config) => config,
        Err(e) => t.fatal(e.into()),
    };
    let previous = set_active_config(Some(updated));
    t.cleanup(Box::new(move || {
        set_active_config(previous);
    }));
}

fn config_or_fatal(t: &dyn TestContext) -> ProbityConfig {
    match active_config() {
        Ok(config) => config,
        Err(e) => t.fatal(e.into()),
    }
}

fn clock_seed() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}
