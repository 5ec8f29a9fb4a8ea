//! Feature reducers and their assembly into the app reducer.
//!
//! Each feature reducer is written against its own minimal state/action
//! pair and knows nothing about the application around it. The app reducer
//! lifts each one along a lens (which slice of [`AppState`] it owns) and a
//! prism (which [`AppAction`] variant it answers to), then folds them into
//! one reducer with `mconcat`.

use refract_core::algebra::mconcat;
use refract_core::{lens, prism, Effect, Reducer};

use crate::types::{
    AccountAction, AccountState, AppAction, AppState, EpisodesAction, EpisodesState,
};

/// The account feature's reducer.
#[must_use]
pub fn account_reducer() -> Reducer<AccountState, AccountAction> {
    Reducer::new(|state: &mut AccountState, action| {
        match action {
            AccountAction::Login(user) => {
                tracing::debug!(user = %user.name, "user logged in");
                state.logged_in_user = Some(user);
            }
            AccountAction::WatchedEpisode(episode) => {
                state.watched_episodes.push(episode);
            }
            AccountAction::Logout => {
                state.logged_in_user = None;
                state.watched_episodes.clear();
            }
            AccountAction::SetNotifications(on) => {
                state.settings.notifications_on = on;
            }
        }
        Effect::None
    })
}

/// The episodes feature's reducer.
#[must_use]
pub fn episodes_reducer() -> Reducer<EpisodesState, EpisodesAction> {
    Reducer::new(|state: &mut EpisodesState, action| {
        match action {
            EpisodesAction::WatchedEpisode(episode) => {
                state.watched_episodes.push(episode);
            }
        }
        Effect::None
    })
}

/// The whole application's reducer, assembled from the feature reducers.
#[must_use]
pub fn app_reducer() -> Reducer<AppState, AppAction> {
    mconcat(vec![
        account_reducer().lift(lens!(AppState, account), prism!(AppAction, Account)),
        episodes_reducer().lift(lens!(AppState, episodes), prism!(AppAction, Episodes)),
    ])
}
