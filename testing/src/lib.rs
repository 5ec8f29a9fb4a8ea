//! # Refract Testing
//!
//! Testing utilities for the refract architecture:
//!
//! - [`ReducerTest`]: fluent Given-When-Then harness for reducers
//! - [`RecordingExecutor`] / [`StubExecutor`]: swappable executors so store
//!   tests run against recorded or canned side effects instead of real ones
//! - [`collect_actions`]: drain an effect tree into the actions it would
//!   dispatch, without a store
//!
//! ## Example
//!
//! ```ignore
//! use refract_testing::{ReducerTest, StubExecutor};
//!
//! ReducerTest::new(account_reducer())
//!     .given_state(AccountState::default())
//!     .when_action(AccountAction::Login(user))
//!     .then_state(|state| assert!(state.logged_in_user.is_some()))
//!     .then_effect(|effect| assert!(effect.is_none()))
//!     .run();
//! ```

/// Draining effects outside a store.
pub mod effects;

/// Swappable executors for tests.
pub mod executors;

/// Fluent reducer test harness.
pub mod reducer_test;

pub use effects::collect_actions;
pub use executors::{RecordingExecutor, StubExecutor};
pub use reducer_test::ReducerTest;
