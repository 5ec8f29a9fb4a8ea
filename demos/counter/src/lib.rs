//! # Counter Demo
//!
//! A counter whose increments and decrements each produce a logging effect:
//! the reducer stays pure and returns an `Effect::execute` describing the
//! log write, the store runs it off the critical path, and the produced
//! `Logged` action feeds back into state as history.
//!
//! ## Example
//!
//! ```no_run
//! use counter::{counter_reducer, CounterAction, CounterState};
//! use refract_runtime::Store;
//!
//! # async fn example() {
//! let store = Store::new(counter_reducer(), CounterState::default());
//!
//! let mut handle = store.dispatch(CounterAction::Increment).await;
//! handle.wait().await;
//!
//! let state = store.state(Clone::clone).await;
//! assert_eq!(state.count, 1);
//! assert_eq!(state.history, vec!["count=1".to_string()]);
//! # }
//! ```

use refract_core::{Effect, Reducer};

/// Counter state: the live count plus the history of logged transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value.
    pub count: i64,
    /// Every log line the logging effect has fed back, in commit order.
    pub history: Vec<String>,
}

/// Everything that can happen to the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the counter by 1.
    Increment,
    /// Decrement the counter by 1.
    Decrement,
    /// Reset the counter to 0.
    Reset,
    /// A log line produced by the logging effect.
    Logged(String),
}

/// Builds the counter reducer.
///
/// Increment and decrement describe a logging effect carrying the count
/// they committed; `Logged` records the line. Reset is silent.
#[must_use]
pub fn counter_reducer() -> Reducer<CounterState, CounterAction> {
    Reducer::new(|state: &mut CounterState, action| match action {
        CounterAction::Increment => {
            state.count += 1;
            log_count(state.count)
        }
        CounterAction::Decrement => {
            state.count -= 1;
            log_count(state.count)
        }
        CounterAction::Reset => {
            state.count = 0;
            Effect::None
        }
        CounterAction::Logged(line) => {
            state.history.push(line);
            Effect::None
        }
    })
}

/// Describes the asynchronous log write for a committed count.
fn log_count(count: i64) -> Effect<CounterAction> {
    Effect::execute(async move {
        tracing::info!(count, "counter changed");
        Some(CounterAction::Logged(format!("count={count}")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_commits_before_the_effect_runs() {
        let reducer = counter_reducer();
        let mut state = CounterState::default();

        let effect = reducer.reduce(&mut state, CounterAction::Increment);

        assert_eq!(state.count, 1);
        assert!(state.history.is_empty());
        assert!(matches!(effect, Effect::Execute { .. }));
    }

    #[test]
    fn reset_is_silent() {
        let reducer = counter_reducer();
        let mut state = CounterState {
            count: 42,
            history: vec!["count=42".into()],
        };

        let effect = reducer.reduce(&mut state, CounterAction::Reset);

        assert_eq!(state.count, 0);
        assert!(effect.is_none());
    }

    #[test]
    fn logged_appends_to_history() {
        let reducer = counter_reducer();
        let mut state = CounterState::default();

        let effect = reducer.reduce(&mut state, CounterAction::Logged("count=7".into()));

        assert_eq!(state.history, vec!["count=7".to_string()]);
        assert!(effect.is_none());
    }
}
