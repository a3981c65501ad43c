//! Fuzz test for the filler and the equality engine together
//!
//! Any seed and container bound must produce a value that respects the bound
//! and compares logically equal to a second fill from the same seed.
//!
//! Run with: cargo +nightly fuzz run filler_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use probity_assert::logically_equal;
use probity_core::{ProbityConfig, TestCase};
use probity_rand::Filler;
use std::collections::{BTreeMap, HashMap};

type Shape = (
    Vec<Option<i16>>,
    HashMap<String, Vec<u8>>,
    BTreeMap<u32, [f64; 2]>,
    Option<Box<String>>,
);

fuzz_target!(|input: (u64, u8)| {
    let (seed, max) = input;
    let max = i64::from(max % 16);
    let Ok(config) = ProbityConfig::default().with_max_container_size(max) else {
        return;
    };

    let a: Shape = Filler::new(seed, &config).generate();
    let b: Shape = Filler::new(seed, &config).generate();

    let bound = config.max_container_size;
    assert!(a.0.len() <= bound);
    assert!(a.1.len() <= bound);
    assert!(a.2.len() <= bound);
    assert!(a.1.values().all(|v| v.len() <= bound));

    let t = TestCase::new("filler_fuzz");
    assert!(logically_equal(&t, &a, &b), "same seed must give equal values");
});
