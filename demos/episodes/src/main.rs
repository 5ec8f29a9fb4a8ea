//! Episodes demo binary
//!
//! Walks the composed app reducer through a short session: watch two
//! episodes, sign in, flip notifications on. A subscriber prints every
//! commit.

use episodes::{app_reducer, AccountAction, AppAction, AppState, Episode, EpisodesAction, User};
use refract_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "episodes=debug,refract_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Episodes Demo: lifted feature reducers ===\n");

    let ep1 = Episode::new(1, "Ep 1", "ep1.mp4");
    let ep2 = Episode::new(2, "Ep 2", "ep2.mp4");
    let ep3 = Episode::new(3, "Ep 3", "ep3.mp4");

    let initial = AppState {
        episodes: episodes::EpisodesState {
            episodes: vec![ep1.clone(), ep2, ep3.clone()],
            watched_episodes: vec![],
        },
        ..AppState::default()
    };

    let store = Store::new(app_reducer(), initial);

    store
        .subscribe(|state: &AppState| {
            println!(
                "observed: watched={} user={:?} notifications={}",
                state.episodes.watched_episodes.len(),
                state.account.logged_in_user.as_ref().map(|u| u.name.clone()),
                state.account.settings.notifications_on,
            );
        })
        .await;

    let user = User {
        id: 1,
        name: "Blob".to_string(),
    };

    for action in [
        AppAction::Episodes(EpisodesAction::WatchedEpisode(ep1)),
        AppAction::Episodes(EpisodesAction::WatchedEpisode(ep3)),
        AppAction::Account(AccountAction::Login(user)),
        AppAction::Account(AccountAction::SetNotifications(true)),
    ] {
        println!("\n>>> dispatching {action:?}");
        let _ = store.dispatch(action).await;
    }

    let state = store.state(Clone::clone).await;
    println!("\nfinal state: {state:#?}");
}
