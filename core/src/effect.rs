//! Side effect descriptions.
//!
//! Effects are NOT executed when a reducer returns them. They are values
//! describing work to be performed later by the runtime's executor, which is
//! the whole point: a reducer stays a pure function, and the executor that
//! actually performs the work can be swapped (live services in production,
//! canned responses in tests).
//!
//! The interpretation contract for each variant:
//!
//! - [`Effect::None`]: terminal, nothing happens.
//! - [`Effect::Execute`]: one asynchronous unit of work runs off the critical
//!   path and eventually yields zero or one follow-up action, which is fed
//!   back into the store.
//! - [`Effect::Batch`]: sub-effects run independently and may run
//!   concurrently; no ordering guarantee between them.
//! - [`Effect::Sequence`]: sub-effects are interpreted strictly in list
//!   order. Ordering governs when interpretation *starts*; an asynchronous
//!   unit inside the list may still complete later.
//! - [`Effect::Dispatch`]: re-enters the store's dispatch cycle with the
//!   carried action.

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

/// The asynchronous unit of work wrapped by an [`Effect::Execute`].
///
/// Resolves to the follow-up action to dispatch, or `None` when the work has
/// no visible result (including failures: translating a failure into a
/// visible action is the producing feature's job).
pub type EffectTask<A> = BoxFuture<'static, Option<A>>;

/// Opaque identity token for a unit of work.
///
/// Defaults to the source location that constructed the effect. The core
/// attaches no behavior to it; it exists for external bookkeeping such as
/// logging and test stubbing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(Cow<'static, str>);

impl Fingerprint {
    /// Captures the caller's source location as a fingerprint.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self(Cow::Owned(format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        )))
    }

    /// Builds a fingerprint from an explicit identifier.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// The fingerprint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A description of a side effect, returned by a reducer and interpreted by
/// the store.
///
/// `Effect` is covariant in its action type through [`Effect::map`], which
/// rewrites the eventual action without touching execution structure. That is
/// what lets a feature-scoped effect be lifted into an application-scoped
/// one during reducer lifting.
pub enum Effect<A> {
    /// The identity effect. Performs nothing.
    None,

    /// One asynchronous unit of work producing zero or one follow-up action.
    Execute {
        /// Identity token for bookkeeping; carries no core behavior.
        fingerprint: Fingerprint,
        /// The wrapped unit of work.
        task: EffectTask<A>,
    },

    /// Sub-effects with no ordering guarantee; may run concurrently.
    Batch(Vec<Effect<A>>),

    /// Sub-effects interpreted one after another, strictly in list order.
    Sequence(Vec<Effect<A>>),

    /// Immediately re-enter the store with this action.
    Dispatch(A),
}

// Manual Debug since the wrapped task is opaque.
impl<A: fmt::Debug> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "Effect::None"),
            Self::Execute { fingerprint, .. } => f
                .debug_struct("Effect::Execute")
                .field("fingerprint", fingerprint)
                .finish_non_exhaustive(),
            Self::Batch(effects) => f.debug_tuple("Effect::Batch").field(effects).finish(),
            Self::Sequence(effects) => f.debug_tuple("Effect::Sequence").field(effects).finish(),
            Self::Dispatch(action) => f.debug_tuple("Effect::Dispatch").field(action).finish(),
        }
    }
}

impl<A> Effect<A> {
    /// Wraps an asynchronous unit of work, fingerprinted with the caller's
    /// source location.
    #[track_caller]
    pub fn execute<F>(task: F) -> Self
    where
        F: Future<Output = Option<A>> + Send + 'static,
    {
        Self::Execute {
            fingerprint: Fingerprint::caller(),
            task: Box::pin(task),
        }
    }

    /// Wraps an asynchronous unit of work with an explicit fingerprint.
    pub fn execute_with_fingerprint<F>(fingerprint: Fingerprint, task: F) -> Self
    where
        F: Future<Output = Option<A>> + Send + 'static,
    {
        Self::Execute {
            fingerprint,
            task: Box::pin(task),
        }
    }

    /// Combines effects to run with no ordering guarantee.
    #[must_use]
    pub const fn merge(effects: Vec<Effect<A>>) -> Effect<A> {
        Effect::Batch(effects)
    }

    /// Combines effects to run strictly in order.
    #[must_use]
    pub const fn chain(effects: Vec<Effect<A>>) -> Effect<A> {
        Effect::Sequence(effects)
    }

    /// Whether this is the identity effect.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Sequences `other` after `self`.
    ///
    /// Identity effects are elided and adjacent sequences are flattened, so
    /// the operation is associative on the nose and repeated combination
    /// builds one flat [`Effect::Sequence`] rather than a nested tree.
    #[must_use]
    pub fn then(self, other: Effect<A>) -> Effect<A> {
        match (self, other) {
            (Self::None, effect) | (effect, Self::None) => effect,
            (Self::Sequence(mut first), Self::Sequence(second)) => {
                first.extend(second);
                Self::Sequence(first)
            }
            (Self::Sequence(mut first), effect) => {
                first.push(effect);
                Self::Sequence(first)
            }
            (effect, Self::Sequence(second)) => {
                let mut effects = Vec::with_capacity(second.len() + 1);
                effects.push(effect);
                effects.extend(second);
                Self::Sequence(effects)
            }
            (first, second) => Self::Sequence(vec![first, second]),
        }
    }

    /// Rewrites the eventual action type, preserving execution structure.
    pub fn map<B, F>(self, transform: F) -> Effect<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        A: Send + 'static,
        B: Send + 'static,
    {
        let transform: Arc<dyn Fn(A) -> B + Send + Sync> = Arc::new(transform);
        self.map_arc(&transform)
    }

    fn map_arc<B>(self, transform: &Arc<dyn Fn(A) -> B + Send + Sync>) -> Effect<B>
    where
        A: Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self::None => Effect::None,
            Self::Execute { fingerprint, task } => {
                let transform = Arc::clone(transform);
                Effect::Execute {
                    fingerprint,
                    task: Box::pin(async move { task.await.map(|action| transform(action)) }),
                }
            }
            Self::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|effect| effect.map_arc(transform))
                    .collect(),
            ),
            Self::Sequence(effects) => Effect::Sequence(
                effects
                    .into_iter()
                    .map(|effect| effect.map_arc(transform))
                    .collect(),
            ),
            Self::Dispatch(action) => Effect::Dispatch(transform(action)),
        }
    }
}
