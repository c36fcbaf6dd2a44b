//! Simulated "thinking" delay.
//!
//! The original UI pauses ~1.5s before showing a canned reply. There is no
//! remote call behind the pause, so it is modeled as a cancellable scheduled
//! task: after the delay the task produces its reply, and the reply is
//! delivered only if the owning view is still interested. Dropping the
//! handle cancels, which makes a reply pending at navigation time a no-op
//! instead of a write into a disposed view.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to a scheduled reply.
///
/// `wait` blocks until the delay elapses and returns the produced reply, or
/// `None` if the task was cancelled first. Dropping the handle without
/// waiting cancels the reply (the timer thread wakes early and exits).
#[derive(Debug)]
pub struct ThinkingTask<T> {
    shared: Arc<(Mutex<bool>, Condvar)>,
    handle: Option<JoinHandle<Option<T>>>,
}

/// Run `produce` after `delay` unless the returned handle is cancelled
/// first.
///
/// A zero delay still goes through the timer thread, so cancellation
/// semantics are identical in tests that disable the pause.
pub fn schedule<T, F>(delay: Duration, produce: F) -> ThinkingTask<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let shared = Arc::new((Mutex::new(false), Condvar::new()));
    let timer = Arc::clone(&shared);

    let handle = thread::spawn(move || {
        let (cancelled, wake) = &*timer;
        let guard = cancelled
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let (guard, _timeout) = wake
            .wait_timeout_while(guard, delay, |cancelled| !*cancelled)
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *guard {
            None
        } else {
            drop(guard);
            Some(produce())
        }
    });

    ThinkingTask {
        shared,
        handle: Some(handle),
    }
}

impl<T> ThinkingTask<T> {
    /// Cancel the pending reply. Safe to call after it has already run.
    pub fn cancel(&self) {
        let (cancelled, wake) = &*self.shared;
        let mut guard = cancelled
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = true;
        drop(guard);
        wake.notify_all();
    }

    /// Block until the reply is ready; `None` if it was cancelled.
    pub fn wait(mut self) -> Option<T> {
        self.handle
            .take()
            .and_then(|handle| handle.join().ok())
            .flatten()
    }
}

impl<T> Drop for ThinkingTask<T> {
    fn drop(&mut self) {
        // An unawaited handle means the view navigated away.
        self.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn reply_delivered_after_delay() {
        let task = schedule(Duration::from_millis(5), || "the reply");
        assert_eq!(task.wait(), Some("the reply"));
    }

    #[test]
    fn cancelled_reply_is_a_noop() {
        let produced = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&produced);

        let task = schedule(Duration::from_secs(60), move || {
            flag.store(true, Ordering::SeqCst);
            "never seen"
        });
        task.cancel();

        assert_eq!(task.wait(), None);
        assert!(!produced.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let produced = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&produced);

        let task = schedule(Duration::from_secs(60), move || {
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);

        assert!(!produced.load(Ordering::SeqCst));
    }

    #[test]
    fn zero_delay_still_delivers() {
        let task = schedule(Duration::ZERO, || 42);
        assert_eq!(task.wait(), Some(42));
    }

    #[test]
    fn cancel_after_completion_is_safe() {
        let task = schedule(Duration::ZERO, || ());
        thread::sleep(Duration::from_millis(20));
        task.cancel();
        assert_eq!(task.wait(), Some(()));
    }
}
