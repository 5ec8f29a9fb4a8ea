//! # Refract Core
//!
//! The pure algebra of a composable state container:
//!
//! - **State**: an application-defined value type, owned by a store
//! - **Action**: an application-defined value describing what happened
//! - **[`Reducer`]**: pure function `(&mut State, Action) -> Effect<Action>`
//! - **[`Effect`]**: a side effect as data, interpreted later by a runtime
//! - **[`Lens`]** / **[`Prism`]**: projections that lift feature reducers
//!   into an application-wide state/action pair
//! - **[`Semigroup`] / [`Monoid`]**: the combination algebra underneath all
//!   of it
//!
//! Nothing in this crate performs I/O or owns a runtime; the store that
//! drives reducers and interprets effects lives in `refract-runtime`.
//!
//! ## Example
//!
//! ```
//! use refract_core::algebra::mconcat;
//! use refract_core::{lens, prism, Effect, Reducer};
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     count: i64,
//!     name: String,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Count(i64),
//!     Name(String),
//! }
//!
//! let counter: Reducer<i64, i64> = Reducer::new(|count, delta| {
//!     *count += delta;
//!     Effect::None
//! });
//! let namer: Reducer<String, String> = Reducer::new(|name, new| {
//!     *name = new;
//!     Effect::None
//! });
//!
//! let app = mconcat(vec![
//!     counter.lift(lens!(AppState, count), prism!(AppAction, Count)),
//!     namer.lift(lens!(AppState, name), prism!(AppAction, Name)),
//! ]);
//!
//! let mut state = AppState::default();
//! let _ = app.reduce(&mut state, AppAction::Count(2));
//! let _ = app.reduce(&mut state, AppAction::Name("blob".into()));
//! assert_eq!(state.count, 2);
//! assert_eq!(state.name, "blob");
//! ```

pub mod algebra;
pub mod effect;
pub mod lens;
pub mod prism;
pub mod reducer;

pub use algebra::{Monoid, Semigroup};
pub use effect::{Effect, EffectTask, Fingerprint};
pub use lens::Lens;
pub use prism::{Either, Prism};
pub use reducer::Reducer;
