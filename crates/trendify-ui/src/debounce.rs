//! Trailing-edge debounce.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays a callback until `wait` has passed without another trigger.
///
/// Each `trigger` cancels the pending call and schedules a new one with the
/// latest value, so a burst of keystrokes runs the search once. Must be
/// used inside a Tokio runtime. Dropping the debouncer cancels any
/// pending call.
pub struct Debouncer<T> {
    wait: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule the callback with `value`, replacing any pending call.
    pub fn trigger(&mut self, value: T) {
        self.cancel();
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(value);
        }));
    }

    /// Drop the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a call is scheduled and hasn't run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
