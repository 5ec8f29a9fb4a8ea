//! Integration tests for the composed app reducer.

use episodes::{
    account_reducer, app_reducer, AccountAction, AccountState, AppAction, AppState, Episode,
    EpisodesAction, User,
};
use refract_runtime::Store;
use refract_testing::ReducerTest;

fn blob() -> User {
    User {
        id: 1,
        name: "Blob".to_string(),
    }
}

#[tokio::test]
async fn episodes_action_touches_only_the_episodes_slice() {
    let initial = AppState {
        account: AccountState {
            logged_in_user: Some(blob()),
            ..AccountState::default()
        },
        ..AppState::default()
    };
    let account_before = initial.account.clone();
    let store = Store::new(app_reducer(), initial);

    let episode = Episode::new(1, "Ep 1", "ep1.mp4");
    let _ = store
        .dispatch(AppAction::Episodes(EpisodesAction::WatchedEpisode(
            episode.clone(),
        )))
        .await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.episodes.watched_episodes, vec![episode]);
    assert_eq!(state.account, account_before);
}

#[tokio::test]
async fn account_action_touches_only_the_account_slice() {
    let store = Store::new(app_reducer(), AppState::default());

    let _ = store
        .dispatch(AppAction::Account(AccountAction::Login(blob())))
        .await;
    let _ = store
        .dispatch(AppAction::Account(AccountAction::SetNotifications(true)))
        .await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.account.logged_in_user, Some(blob()));
    assert!(state.account.settings.notifications_on);
    assert_eq!(state.episodes, episodes::EpisodesState::default());
}

#[tokio::test]
async fn a_full_session_flows_through_both_features() {
    let store = Store::new(app_reducer(), AppState::default());
    let ep1 = Episode::new(1, "Ep 1", "ep1.mp4");
    let ep3 = Episode::new(3, "Ep 3", "ep3.mp4");

    for action in [
        AppAction::Episodes(EpisodesAction::WatchedEpisode(ep1.clone())),
        AppAction::Episodes(EpisodesAction::WatchedEpisode(ep3.clone())),
        AppAction::Account(AccountAction::Login(blob())),
        AppAction::Account(AccountAction::WatchedEpisode(ep1.clone())),
        AppAction::Account(AccountAction::Logout),
    ] {
        let _ = store.dispatch(action).await;
    }

    let state = store.state(Clone::clone).await;
    // Feature slices evolve independently even for same-named events.
    assert_eq!(state.episodes.watched_episodes, vec![ep1, ep3]);
    assert_eq!(state.account.logged_in_user, None);
    assert!(state.account.watched_episodes.is_empty());
}

#[test]
fn account_reducer_in_isolation() {
    ReducerTest::new(account_reducer())
        .given_state(AccountState::default())
        .when_action(AccountAction::Login(blob()))
        .then_state(|state| {
            assert_eq!(state.logged_in_user, Some(blob()));
        })
        .then_effect(|effect| assert!(effect.is_none()))
        .run();
}
