//! Configuration types
//!
//! Process defaults come from the environment and are read once. Each test
//! thread may then override them; the Rust test harness runs each test on its
//! own thread, so an override made inside a test stays inside that test.

use crate::{ConfigError, ConfigResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Environment variable for the default maximum container size.
pub const ENV_MAX_CONTAINER_SIZE: &str = "PROBITY_MAX_CONTAINER_SIZE";

/// Environment variable that pins the seed used by unseeded fills.
pub const ENV_SEED: &str = "PROBITY_SEED";

/// Default upper bound on generated sequence and map lengths.
pub const DEFAULT_MAX_CONTAINER_SIZE: usize = 5;

/// Filler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbityConfig {
    /// Upper bound on the length of freshly generated sequences and maps.
    /// Zero generates empty containers.
    pub max_container_size: usize,
    /// Seed for fills that were not given one explicitly.
    pub seed: Option<u64>,
}

impl Default for ProbityConfig {
    fn default() -> Self {
        Self {
            max_container_size: DEFAULT_MAX_CONTAINER_SIZE,
            seed: None,
        }
    }
}

impl ProbityConfig {
    /// Load configuration from `PROBITY_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_CONTAINER_SIZE) {
            let value: i64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_MAX_CONTAINER_SIZE.to_string(),
                value: raw.clone(),
                reason: "must be an integer".to_string(),
            })?;
            config.max_container_size = checked_container_size(value)?;
        }

        if let Some(raw) = lookup(ENV_SEED) {
            let seed: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_SEED.to_string(),
                value: raw.clone(),
                reason: "must be an unsigned 64-bit integer".to_string(),
            })?;
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    /// The container bound must fit a signed 64-bit count.
    pub fn validate(&self) -> ConfigResult<()> {
        if i64::try_from(self.max_container_size).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "max_container_size".to_string(),
                value: self.max_container_size.to_string(),
                reason: "max_container_size must fit in i64".to_string(),
            });
        }
        Ok(())
    }

    /// Copy of this configuration with a new container bound.
    pub fn with_max_container_size(mut self, n: i64) -> ConfigResult<Self> {
        self.max_container_size = checked_container_size(n)?;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn checked_container_size(n: i64) -> ConfigResult<usize> {
    usize::try_from(n).map_err(|_| ConfigError::NegativeContainerSize { value: n })
}

static PROCESS_DEFAULTS: Lazy<ConfigResult<ProbityConfig>> = Lazy::new(ProbityConfig::from_env);

thread_local! {
    static ACTIVE: RefCell<Option<ProbityConfig>> = const { RefCell::new(None) };
}

/// Configuration in effect on the current thread.
///
/// Returns the thread override if one is set, otherwise the process defaults
/// loaded from the environment.
pub fn active_config() -> ConfigResult<ProbityConfig> {
    if let Some(config) = ACTIVE.with(|active| active.borrow().clone()) {
        return Ok(config);
    }
    (*PROCESS_DEFAULTS).clone()
}

/// Install a thread override, returning the previous override.
pub fn set_active_config(config: Option<ProbityConfig>) -> Option<ProbityConfig> {
    ACTIVE.with(|active| std::mem::replace(&mut *active.borrow_mut(), config))
}
