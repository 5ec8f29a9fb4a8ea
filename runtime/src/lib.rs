//! # Refract Runtime
//!
//! The imperative shell around `refract-core`: a [`Store`] that owns live
//! state, runs the root reducer on every dispatched action, notifies
//! subscribers of each commit, and interprets the returned effects on tokio.
//!
//! ## Data flow
//!
//! ```text
//! dispatch(action)
//!   └─ reducer.reduce(&mut state, action) -> effect   (under the state lock)
//!        └─ commit + subscriber notification
//!             └─ interpret(effect)
//!                  ├─ Execute  -> spawned task -> executor -> dispatch(action?)
//!                  ├─ Batch    -> one task per sub-effect, unordered
//!                  ├─ Sequence -> in-order initiation
//!                  └─ Dispatch -> re-enter dispatch in place
//! ```
//!
//! ## Example
//!
//! ```
//! use refract_core::{Effect, Reducer};
//! use refract_runtime::Store;
//!
//! #[derive(Clone)]
//! enum Action {
//!     Increment,
//! }
//!
//! # async fn example() {
//! let reducer: Reducer<i64, Action> = Reducer::new(|count, Action::Increment| {
//!     *count += 1;
//!     Effect::None
//! });
//! let store = Store::new(reducer, 0);
//!
//! let mut handle = store.dispatch(Action::Increment).await;
//! handle.wait().await;
//! assert_eq!(store.state(|count| *count).await, 1);
//! # }
//! ```

/// Error types for the Store runtime.
pub mod error {
    use thiserror::Error;

    /// Errors that can occur while waiting on Store operations.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Timed out waiting for in-flight effects to complete.
        ///
        /// The effects themselves keep running; only the wait is abandoned.
        #[error("timed out waiting for effects to complete")]
        Timeout,
    }
}

/// The executor boundary where described work is performed.
pub mod executor;

/// Completion tracking for dispatched effects.
pub mod handle;

/// The Store runtime.
pub mod store;

pub use error::StoreError;
pub use executor::{Executor, TaskExecutor};
pub use handle::EffectHandle;
pub use store::Store;
