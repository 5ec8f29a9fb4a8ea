//! # Episodes Demo
//!
//! The classic composed-store example: an account feature and an episodes
//! feature, each with its own state and action types and its own reducer,
//! assembled into one application reducer by lifting along lenses (state
//! slices) and prisms (action variants).
//!
//! ## Example
//!
//! ```no_run
//! use episodes::reducer::app_reducer;
//! use episodes::types::{AppAction, AppState, Episode, EpisodesAction};
//! use refract_runtime::Store;
//!
//! # async fn example() {
//! let store = Store::new(app_reducer(), AppState::default());
//!
//! let episode = Episode::new(1, "Ep 1", "ep1.mp4");
//! let _ = store
//!     .dispatch(AppAction::Episodes(EpisodesAction::WatchedEpisode(episode)))
//!     .await;
//!
//! assert_eq!(store.state(|s| s.episodes.watched_episodes.len()).await, 1);
//! # }
//! ```

pub mod reducer;
pub mod types;

pub use reducer::{account_reducer, app_reducer, episodes_reducer};
pub use types::{
    AccountAction, AccountState, AppAction, AppState, Episode, EpisodesAction, EpisodesState,
    Settings, User,
};
