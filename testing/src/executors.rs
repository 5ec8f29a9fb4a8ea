//! Test executors.
//!
//! Effects being data means the collaborator that performs them is
//! swappable. These executors replace the live one in tests: the recording
//! executor runs units while logging their fingerprints, and the stub
//! executor never runs the wrapped unit at all, answering from a canned
//! fingerprint table instead.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::BoxFuture;
use refract_core::effect::{EffectTask, Fingerprint};
use refract_runtime::Executor;

/// Executor that runs each unit of work live while recording every
/// fingerprint it was handed, in order.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    seen: Arc<Mutex<Vec<Fingerprint>>>,
}

impl RecordingExecutor {
    /// Creates an executor with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fingerprints handed to this executor so far, in order.
    #[must_use]
    pub fn fingerprints(&self) -> Vec<Fingerprint> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<A: Send + 'static> Executor<A> for RecordingExecutor {
    fn run(&self, fingerprint: Fingerprint, task: EffectTask<A>) -> BoxFuture<'static, Option<A>> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(fingerprint);
        task
    }
}

/// Executor that answers from a canned fingerprint table.
///
/// The wrapped unit of work is dropped without running, so tests exercise
/// the full dispatch/feedback cycle without touching the real collaborator.
/// A fingerprint with no canned response yields no action, which is also
/// how an executor reports failure.
pub struct StubExecutor<A> {
    responses: Arc<Mutex<HashMap<Fingerprint, A>>>,
}

impl<A> Clone for StubExecutor<A> {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
        }
    }
}

impl<A> Default for StubExecutor<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> StubExecutor<A> {
    /// Creates a stub with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers the action to produce for a fingerprint.
    #[must_use]
    pub fn respond(self, fingerprint: Fingerprint, action: A) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(fingerprint, action);
        self
    }
}

impl<A: Clone + Send + 'static> Executor<A> for StubExecutor<A> {
    fn run(&self, fingerprint: Fingerprint, task: EffectTask<A>) -> BoxFuture<'static, Option<A>> {
        // The real unit of work is intentionally not run.
        drop(task);

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&fingerprint)
            .cloned();

        Box::pin(async move { response })
    }
}
