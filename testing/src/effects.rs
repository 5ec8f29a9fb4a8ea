//! Draining effects outside a store.
//!
//! For reducer-level tests it is often enough to see which actions an
//! effect would feed the store, without standing a store up at all.

use refract_core::Effect;

/// Collects every action an effect would dispatch, depth-first.
///
/// `Execute` units are awaited inline on the current task, so the result is
/// deterministic; `Batch` sub-effects are drained in list order rather than
/// concurrently, which is a superset of the ordering the runtime guarantees.
pub async fn collect_actions<A: Send + 'static>(effect: Effect<A>) -> Vec<A> {
    match effect {
        Effect::None => Vec::new(),
        Effect::Dispatch(action) => vec![action],
        Effect::Execute { task, .. } => task.await.into_iter().collect(),
        Effect::Batch(effects) | Effect::Sequence(effects) => {
            let mut actions = Vec::new();
            for sub_effect in effects {
                actions.extend(Box::pin(collect_actions(sub_effect)).await);
            }
            actions
        }
    }
}
