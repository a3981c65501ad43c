//! PROBITY Core - Shared Test Plumbing
//!
//! Types every probity crate builds on:
//! - [`TestContext`]: where assertion failures go
//! - [`Failure`] and [`ConfigError`]: what went wrong
//! - [`LabelPath`]: where in a nested value it went wrong
//! - [`ProbityConfig`]: filler bounds and seed pinning
//! - [`init_test_logging`]: tracing bootstrap for test binaries

mod complex;
mod config;
mod context;
mod error;
mod label;
mod logging;

pub use complex::{Complex32, Complex64};
pub use config::{
    active_config, set_active_config, ProbityConfig, DEFAULT_MAX_CONTAINER_SIZE,
    ENV_MAX_CONTAINER_SIZE, ENV_SEED,
};
pub use context::{TestCase, TestContext};
pub use error::{ConfigError, ConfigResult, Failure};
pub use label::LabelPath;
pub use logging::{init_test_logging, DEFAULT_FILTER};
