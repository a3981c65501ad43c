//! Test-failure context
//!
//! Assertions never panic on their own: they hand failures to a
//! [`TestContext`], which decides what failing means. Non-fatal reports let
//! the test keep running; fatal reports abort it on the spot.

use crate::Failure;
use std::cell::RefCell;
use std::fmt;

/// Sink for assertion failures, plus end-of-test cleanup registration.
pub trait TestContext {
    /// Name used in log lines and panic messages.
    fn name(&self) -> &str;

    /// Record a non-fatal failure. The test continues.
    fn report(&self, failure: Failure);

    /// Record a failure and abort the current test.
    fn fatal(&self, failure: Failure) -> !;

    /// Register work to run when the test ends, in reverse registration order.
    fn cleanup(&self, f: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Panic on drop if anything was reported.
    Strict,
    /// Only collect.
    Recording,
}

/// Default [`TestContext`] for `#[test]` functions.
///
/// ```
/// use probity_core::{Failure, TestCase, TestContext};
///
/// let t = TestCase::recording("observe");
/// t.report(Failure::message("first"));
/// t.report(Failure::message("second"));
/// assert_eq!(t.failures().len(), 2);
/// ```
pub struct TestCase {
    name: String,
    mode: Mode,
    failures: RefCell<Vec<Failure>>,
    cleanups: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl TestCase {
    /// A context that fails the enclosing test when dropped with failures.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_mode(name, Mode::Strict)
    }

    /// A context that only records failures, for observing assertion results
    /// without failing the enclosing test.
    pub fn recording(name: impl Into<String>) -> Self {
        Self::with_mode(name, Mode::Recording)
    }

    fn with_mode(name: impl Into<String>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            mode,
            failures: RefCell::new(Vec::new()),
            cleanups: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of every failure reported so far.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    pub fn failed(&self) -> bool {
        !self.failures.borrow().is_empty()
    }

    fn push(&self, failure: Failure) {
        match self.mode {
            Mode::Strict => tracing::error!(test = %self.name, %failure, "assertion failed"),
            Mode::Recording => tracing::debug!(test = %self.name, %failure, "assertion failed"),
        }
        self.failures.borrow_mut().push(failure);
    }

    fn run_cleanups(&self) {
        let cleanups = std::mem::take(&mut *self.cleanups.borrow_mut());
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
    }
}

impl TestContext for TestCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn report(&self, failure: Failure) {
        self.push(failure);
    }

    fn fatal(&self, failure: Failure) -> ! {
        let message = failure.to_string();
        self.push(failure);
        panic!("{}: fatal: {}", self.name, message);
    }

    fn cleanup(&self, f: Box<dyn FnOnce()>) {
        self.cleanups.borrow_mut().push(f);
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("failures", &self.failures.borrow())
            .field("cleanups", &self.cleanups.borrow().len())
            .finish()
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        self.run_cleanups();

        if self.mode == Mode::Strict && self.failed() && !std::thread::panicking() {
            let failures = self.failures.borrow();
            let listing = failures
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            panic!(
                "{} assertion(s) failed in {}:\n{}",
                failures.len(),
                self.name,
                listing
            );
        }
    }
}
