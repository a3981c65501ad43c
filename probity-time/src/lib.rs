//! PROBITY Time - Overridable Clock
//!
//! Code under test reads the time through [`now`]; tests pin it with
//! [`set_now_for_testing`] or [`set_now_fn_for_testing`]. The override lives
//! on the current thread and is removed by the test context's cleanups.

use chrono::{DateTime, Utc};
use probity_core::TestContext;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Timestamp type used throughout probity.
pub type Timestamp = DateTime<Utc>;

pub const NANOSECOND: Duration = Duration::from_nanos(1);
pub const MICROSECOND: Duration = Duration::from_micros(1);
pub const MILLISECOND: Duration = Duration::from_millis(1);
pub const SECOND: Duration = Duration::from_secs(1);
pub const MINUTE: Duration = Duration::from_secs(60);
pub const HOUR: Duration = Duration::from_secs(60 * 60);

type NowFn = Rc<dyn Fn() -> Timestamp>;

thread_local! {
    static NOW_FN: RefCell<Option<NowFn>> = const { RefCell::new(None) };
}

/// Current time: the installed override, or the wall clock.
pub fn now() -> Timestamp {
    match NOW_FN.with(|slot| slot.borrow().clone()) {
        Some(now_fn) => now_fn(),
        None => Utc::now(),
    }
}

/// Route [`now`] through `now_fn` until `t` runs its cleanups.
pub fn set_now_fn_for_testing(t: &dyn TestContext, now_fn: impl Fn() -> Timestamp + 'static) {
    let previous = NOW_FN.with(|slot| slot.replace(Some(Rc::new(now_fn))));
    tracing::debug!(test = t.name(), "clock overridden");
    t.cleanup(Box::new(move || {
        NOW_FN.with(|slot| slot.replace(previous));
    }));
}

/// Freeze [`now`] at the current wall-clock time and return it.
pub fn set_now_for_testing(t: &dyn TestContext) -> Timestamp {
    let frozen = Utc::now();
    set_now_fn_for_testing(t, move || frozen);
    frozen
}
