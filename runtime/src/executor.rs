//! The executor boundary: where described work actually happens.
//!
//! An [`Executor`] is the host-supplied collaborator that performs the unit
//! of work inside an `Effect::Execute`. Keeping it behind a trait is the
//! reason effects are data rather than directly-run closures: production
//! injects the live [`TaskExecutor`], tests inject one that records
//! fingerprints or answers from a canned table without touching a real
//! service.

use futures::future::BoxFuture;
use refract_core::effect::{EffectTask, Fingerprint};

/// Performs the asynchronous unit of work wrapped by an `Effect::Execute`.
///
/// An executor may run the task, wrap it, or ignore it entirely; its only
/// contract is to eventually yield zero or one follow-up action. Failures
/// stay inside the executor: producing `None` on failure is legal, and
/// surfacing a failure as a visible action is the producing feature's
/// responsibility.
pub trait Executor<A>: Send + Sync + 'static {
    /// Runs one unit of work to completion.
    fn run(&self, fingerprint: Fingerprint, task: EffectTask<A>) -> BoxFuture<'static, Option<A>>;
}

/// The live executor: awaits each unit of work as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskExecutor;

impl<A: Send + 'static> Executor<A> for TaskExecutor {
    fn run(&self, fingerprint: Fingerprint, task: EffectTask<A>) -> BoxFuture<'static, Option<A>> {
        Box::pin(async move {
            tracing::trace!(fingerprint = %fingerprint, "running effect task");
            task.await
        })
    }
}
