//! The Store: runtime coordinator for a reducer.
//!
//! A [`Store`] owns the live state, runs the root reducer on every
//! dispatched action, notifies subscribers of each commit, and interprets
//! the returned effect. It is created explicitly with an injected reducer
//! and executor and passed down to whatever drives it; there is no ambient
//! global instance.
//!
//! # Interpretation
//!
//! - `Effect::None` does nothing.
//! - `Effect::Dispatch` re-enters the dispatch cycle in place.
//! - `Effect::Execute` hands its unit of work to the executor on a spawned
//!   task; a produced action is fed back through dispatch.
//! - `Effect::Batch` spawns one task per sub-effect. Concurrent, unordered.
//! - `Effect::Sequence` interprets sub-effects strictly in list order. The
//!   ordering governs when interpretation of each sub-effect *starts*; an
//!   asynchronous unit inside the list may still complete later.
//!
//! # Concurrency
//!
//! All state mutation is serialized through one write lock, so `dispatch`
//! may be called concurrently from many tasks; reduce steps never overlap.
//! Effect tasks run off the critical path and re-enter only via dispatch.
//! There is no cancellation: once an `Execute` is interpreted, its unit of
//! work runs to completion.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use futures::future::BoxFuture;
use refract_core::{Effect, Reducer};
use tokio::sync::RwLock;

use crate::executor::{Executor, TaskExecutor};
use crate::handle::{DecrementGuard, EffectHandle, EffectTracking};

type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Runtime container for one state value and the reducer that evolves it.
///
/// Cloning a store is cheap and yields another handle onto the same live
/// state, which is how effect tasks re-enter dispatch.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(counter_reducer(), CounterState::default());
/// let mut handle = store.dispatch(CounterAction::Increment).await;
/// handle.wait().await;
/// let count = store.state(|s| s.count).await;
/// ```
pub struct Store<S, A, X = TaskExecutor> {
    state: Arc<RwLock<S>>,
    reducer: Reducer<S, A>,
    subscribers: Arc<Mutex<Vec<Subscriber<S>>>>,
    executor: Arc<X>,
}

impl<S, A, X> Clone for Store<S, A, X> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            subscribers: Arc::clone(&self.subscribers),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Send + 'static,
{
    /// Creates a store with the live [`TaskExecutor`].
    #[must_use]
    pub fn new(reducer: Reducer<S, A>, initial_state: S) -> Self {
        Self::with_executor(reducer, initial_state, TaskExecutor)
    }
}

impl<S, A, X> Store<S, A, X>
where
    S: Send + Sync + 'static,
    A: Send + 'static,
    X: Executor<A>,
{
    /// Creates a store with a custom executor.
    ///
    /// Swapping the executor is how tests replace real side effects with
    /// recorded or canned ones; the reducer and store logic stay identical.
    #[must_use]
    pub fn with_executor(reducer: Reducer<S, A>, initial_state: S, executor: X) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            subscribers: Arc::new(Mutex::new(Vec::new())),
            executor: Arc::new(executor),
        }
    }

    /// Dispatches an action: reduce, commit, notify, interpret.
    ///
    /// Returns an [`EffectHandle`] covering every effect task this dispatch
    /// starts, transitively through feedback actions. The call itself
    /// returns once synchronous interpretation finishes; asynchronous units
    /// keep running and can be awaited through the handle.
    #[tracing::instrument(skip(self, action), name = "store_dispatch")]
    pub async fn dispatch(&self, action: A) -> EffectHandle {
        let (handle, tracking) = EffectHandle::new();
        self.dispatch_tracked(action, &tracking).await;
        handle
    }

    /// Reads state through a closure, releasing the lock on return.
    pub async fn state<F, T>(&self, read: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        read(&state)
    }

    /// Registers a subscriber callback.
    ///
    /// The callback is invoked once immediately with the current state and
    /// again after every subsequent commit, in exact commit order with no
    /// coalescing. There is no unsubscribe; subscriber lifetime management
    /// is the caller's concern. Callbacks run synchronously under the
    /// commit lock and must not call back into the store.
    pub async fn subscribe(&self, subscriber: impl Fn(&S) + Send + Sync + 'static) {
        let state = self.state.read().await;
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscriber(&state);
        subscribers.push(Box::new(subscriber));
    }

    fn notify_subscribers(&self, state: &S) {
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber(state);
        }
    }

    /// One reduce/commit/notify/interpret cycle under a shared tracking
    /// context, so feedback dispatches stay covered by the original handle.
    fn dispatch_tracked<'a>(&'a self, action: A, tracking: &'a EffectTracking) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            metrics::counter!("store.actions.total").increment(1);
            tracing::debug!("processing action");

            let effect = {
                let mut state = self.state.write().await;

                let start = Instant::now();
                let effect = self.reducer.reduce(&mut *state, action);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                // Notify under the lock: subscribers observe commits in the
                // exact order dispatches complete.
                self.notify_subscribers(&state);
                effect
            };

            self.interpret(effect, tracking).await;
        })
    }

    fn interpret<'a>(&'a self, effect: Effect<A>, tracking: &'a EffectTracking) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            match effect {
                Effect::None => {
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                }
                Effect::Dispatch(action) => {
                    metrics::counter!("store.effects.executed", "type" => "dispatch").increment(1);
                    tracing::trace!("effect re-entering dispatch");
                    self.dispatch_tracked(action, tracking).await;
                }
                Effect::Execute { fingerprint, task } => {
                    metrics::counter!("store.effects.executed", "type" => "execute").increment(1);
                    tracing::trace!(fingerprint = %fingerprint, "starting effect task");

                    tracking.increment();
                    let tracking = tracking.clone();
                    let store = self.clone();
                    let work = self.executor.run(fingerprint, task);

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking.clone());

                        if let Some(action) = work.await {
                            tracing::trace!("effect task produced an action, feeding back");
                            store.dispatch_tracked(action, &tracking).await;
                        } else {
                            tracing::trace!("effect task completed with no action");
                        }
                    });
                }
                Effect::Batch(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "batch").increment(1);
                    tracing::trace!(count = effects.len(), "interpreting batch");

                    // One task per sub-effect: concurrent, no ordering
                    // guarantee between siblings.
                    for sub_effect in effects {
                        tracking.increment();
                        let tracking = tracking.clone();
                        let store = self.clone();

                        tokio::spawn(async move {
                            let _guard = DecrementGuard(tracking.clone());
                            store.interpret(sub_effect, &tracking).await;
                        });
                    }
                }
                Effect::Sequence(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "sequence").increment(1);
                    tracing::trace!(count = effects.len(), "interpreting sequence");

                    // Strict initiation order: sub-effect i+1 is not touched
                    // until interpretation of sub-effect i has returned.
                    for sub_effect in effects {
                        self.interpret(sub_effect, tracking).await;
                    }
                }
            }
        })
    }
}
