//! Fuzz test for environment-driven configuration
//!
//! Arbitrary values for `PROBITY_MAX_CONTAINER_SIZE` and `PROBITY_SEED` must
//! either load or produce a `ConfigError`, never panic.
//!
//! Run with: cargo +nightly fuzz run config_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use probity_core::{ProbityConfig, ENV_MAX_CONTAINER_SIZE, ENV_SEED};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (size, seed) = input.split_once('\n').unwrap_or((input, ""));

    let loaded = ProbityConfig::from_lookup(|key| match key {
        k if k == ENV_MAX_CONTAINER_SIZE => Some(size.to_string()),
        k if k == ENV_SEED && !seed.is_empty() => Some(seed.to_string()),
        _ => None,
    });

    if let Ok(config) = loaded {
        assert!(config.validate().is_ok(), "loaded config must validate");
        assert_eq!(Ok(config.max_container_size as i64), size.trim().parse::<i64>());
    }
});
