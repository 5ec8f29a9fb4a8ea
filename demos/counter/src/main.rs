//! Counter demo binary
//!
//! Drives the counter reducer through a store and prints every commit a
//! subscriber observes, including the ones fed back by the logging effect.

use counter::{counter_reducer, CounterAction, CounterState};
use refract_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,refract_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Demo: reducer + logging effect ===\n");

    let store = Store::new(counter_reducer(), CounterState::default());

    store
        .subscribe(|state: &CounterState| {
            println!("observed: count={} history={:?}", state.count, state.history);
        })
        .await;

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
    ] {
        println!("\n>>> dispatching {action:?}");
        let mut handle = store.dispatch(action).await;
        handle.wait().await;
    }

    println!("\n>>> dispatching Reset");
    let mut handle = store.dispatch(CounterAction::Reset).await;
    handle.wait().await;

    let state = store.state(Clone::clone).await;
    println!("\nfinal state: count={} history={:?}", state.count, state.history);
}
