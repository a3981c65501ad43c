//! PROBITY Assert - Logical Equality and Channel Assertions
//!
//! Logical equality compares two values by what they mean rather than how
//! they are laid out: a decimal `2.0` equals `20 / 10`, a record type with its
//! own ordering is compared through it, and nested maps, sequences and
//! optionals are walked with a label path so a mismatch says exactly where it
//! is.
//!
//! ```
//! use probity_assert::logically_equal;
//! use probity_core::TestCase;
//! use rust_decimal::Decimal;
//!
//! let t = TestCase::new("decimals");
//! let two = Decimal::new(20, 1);
//! let ratio = Decimal::new(20, 0) / Decimal::new(10, 0);
//! assert!(logically_equal(&t, &two, &ratio));
//! ```
//!
//! # Key Types
//!
//! - [`Logical`]: what a type exposes to the engine
//! - [`Shape`]: the structural view the engine walks
//! - [`PendingAssertion`]: a channel assertion awaiting its verdict

mod channel;
mod engine;
mod impls;
mod logical;
mod macros;

pub use channel::{
    channel_receives, channel_receives_once, PendingAssertion, RECEIVE_ONCE_TIMEOUT, SILENCE_GAP,
};
pub use engine::{logically_equal, logically_equal_at, logically_equal_dyn};
pub use logical::{AsAny, DynEq, DynOrd, Logical, Shape};

/// Non-fatal logical-equality assertion.
///
/// Evaluates to the verdict; an optional format message prefixes every
/// reported label.
///
/// ```
/// use probity_assert::assert_logically_eq;
/// use probity_core::TestCase;
///
/// let t = TestCase::recording("macro");
/// assert!(assert_logically_eq!(&t, &vec![1, 2], &vec![1, 2]));
/// assert!(!assert_logically_eq!(&t, &1u8, &2u8, "case {}", 7));
/// assert_eq!(t.failures()[0].label(), Some("case 7"));
/// ```
#[macro_export]
macro_rules! assert_logically_eq {
    ($t:expr, $a:expr, $b:expr $(,)?) => {
        $crate::logically_equal($t, $a, $b)
    };
    ($t:expr, $a:expr, $b:expr, $($arg:tt)+) => {
        $crate::logically_equal_at($t, $a, $b, ::std::format!($($arg)+))
    };
}
