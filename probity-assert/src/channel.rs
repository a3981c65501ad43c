//! Channel-receive assertions
//!
//! Each assertion runs its wait in a background task and hands back a
//! [`PendingAssertion`]. The verdict only exists once the caller joins it with
//! [`PendingAssertion::wait`].

use probity_core::{Failure, TestContext};
use std::fmt::Debug;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// How long [`channel_receives_once`] waits for its single value.
pub const RECEIVE_ONCE_TIMEOUT: Duration = Duration::from_millis(100);

/// Quiet period that ends collection in [`channel_receives`].
pub const SILENCE_GAP: Duration = Duration::from_millis(200);

const CHANNEL_LABEL: &str = "channel";

/// A channel assertion still running in the background.
#[derive(Debug)]
pub struct PendingAssertion {
    handle: JoinHandle<Result<(), Failure>>,
}

impl PendingAssertion {
    /// Join the background task, report its failure (if any) through `t`, and
    /// return the verdict.
    pub async fn wait(self, t: &dyn TestContext) -> bool {
        match self.handle.await {
            Ok(Ok(())) => true,
            Ok(Err(failure)) => {
                t.report(failure);
                false
            }
            Err(e) => {
                t.report(Failure::message(format!(
                    "channel assertion task failed: {}",
                    e
                )));
                false
            }
        }
    }
}

/// Assert that exactly `expected` arrives on `rx` within
/// [`RECEIVE_ONCE_TIMEOUT`].
///
/// Must be called inside a Tokio runtime.
pub fn channel_receives_once<T>(mut rx: Receiver<T>, expected: T) -> PendingAssertion
where
    T: PartialEq + Debug + Send + 'static,
{
    let handle = tokio::spawn(async move {
        match timeout(RECEIVE_ONCE_TIMEOUT, rx.recv()).await {
            Ok(Some(value)) if value == expected => Ok(()),
            Ok(Some(value)) => Err(Failure::NotEqual {
                label: CHANNEL_LABEL.to_string(),
                expected: format!("{:?}", expected),
                actual: format!("{:?}", value),
            }),
            Ok(None) | Err(_) => Err(Failure::NothingReceived {
                expected: format!("{:?}", expected),
                timeout_ms: RECEIVE_ONCE_TIMEOUT.as_millis() as u64,
            }),
        }
    });
    PendingAssertion { handle }
}

/// Assert that `rx` delivers exactly `expected`, in order.
///
/// Values are collected until [`SILENCE_GAP`] passes without one arriving or
/// every sender is dropped; the collected sequence is then compared as a
/// whole.
pub fn channel_receives<T>(mut rx: Receiver<T>, expected: Vec<T>) -> PendingAssertion
where
    T: PartialEq + Debug + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut received = Vec::new();
        while let Ok(Some(value)) = timeout(SILENCE_GAP, rx.recv()).await {
            received.push(value);
        }
        tracing::trace!(count = received.len(), "channel collection finished");

        if received == expected {
            Ok(())
        } else {
            Err(Failure::NotEqual {
                label: CHANNEL_LABEL.to_string(),
                expected: format!("{:?}", expected),
                actual: format!("{:?}", received),
            })
        }
    });
    PendingAssertion { handle }
}
