//! Effect completion tracking.
//!
//! Every dispatch returns an [`EffectHandle`] counting the in-flight effect
//! tasks it started, including those started transitively by feedback
//! actions. Waiting on the handle is how callers (and especially tests)
//! observe quiescence without sleeping.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::StoreError;

/// Handle for awaiting the effects started by one dispatch.
///
/// The handle covers the whole cascade: if an effect's follow-up action
/// produces further effects, those are tracked under the same handle.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.dispatch(Action::Refresh).await;
/// handle.wait().await;
/// // Every effect (and effect-of-effect) from Refresh has completed.
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    pending: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Creates a handle plus the tracking context the store threads through
    /// effect interpretation.
    pub(crate) fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (notifier, completion) = watch::channel(());

        let handle = Self {
            pending: Arc::clone(&counter),
            completion,
        };
        let tracking = EffectTracking { counter, notifier };

        (handle, tracking)
    }

    /// A handle that is already complete.
    ///
    /// Useful as the seed when folding dispatches in a loop.
    #[must_use]
    pub fn completed() -> Self {
        let (notifier, completion) = watch::channel(());
        let _ = notifier.send(());

        Self {
            pending: Arc::new(AtomicUsize::new(0)),
            completion,
        }
    }

    /// Number of effect tasks still in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Waits until every tracked effect task has completed.
    pub async fn wait(&mut self) {
        while self.pending.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                // Every tracking clone dropped; nothing left to wait for.
                break;
            }
        }
    }

    /// Waits for completion, giving up after `timeout`.
    ///
    /// The timeout bounds the waiting only. In-flight work is never
    /// cancelled; an interpreted effect always runs to completion.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if effects are still running when the
    /// timeout elapses.
    pub async fn wait_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}

/// Internal tracking context threaded through effect interpretation.
pub(crate) struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl Clone for EffectTracking {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
            notifier: self.notifier.clone(),
        }
    }
}

impl EffectTracking {
    /// Marks one effect task as started.
    pub(crate) fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Marks one effect task as finished, waking waiters at zero.
    pub(crate) fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

/// RAII guard so a panicking effect task still releases its count.
pub(crate) struct DecrementGuard(pub(crate) EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}
