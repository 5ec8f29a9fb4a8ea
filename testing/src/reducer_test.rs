//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable
//! Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use refract_core::{Effect, Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&Effect<A>)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use refract_testing::ReducerTest;
///
/// ReducerTest::new(counter_reducer())
///     .given_state(CounterState { count: 0 })
///     .when_action(CounterAction::Increment)
///     .then_state(|state| {
///         assert_eq!(state.count, 1);
///     })
///     .then_effect(|effect| {
///         assert!(effect.is_none());
///     })
///     .run();
/// ```
pub struct ReducerTest<S, A> {
    reducer: Reducer<S, A>,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<S, A> ReducerTest<S, A>
where
    S: 'static,
    A: Send + 'static,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: Reducer<S, A>) -> Self {
        Self {
            reducer,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the returned effect (Then)
    #[must_use]
    pub fn then_effect<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Effect<A>) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state or action is not set, or if any assertion
    /// fails.
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        // Execute reducer
        let effect = self.reducer.reduce(&mut state, action);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run effect assertions
        for assertion in self.effect_assertions {
            assertion(&effect);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use refract_core::Effect;

    /// Assert that the reducer performed no effect.
    ///
    /// # Panics
    ///
    /// Panics if the effect is not [`Effect::None`].
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effect<A: std::fmt::Debug>(effect: &Effect<A>) {
        assert!(
            effect.is_none(),
            "expected Effect::None, got {effect:?}"
        );
    }

    /// Assert the synchronous actions an effect would dispatch, in order.
    ///
    /// Walks `Dispatch`, `Batch`, and `Sequence` nodes; `Execute` units are
    /// not run here (use `collect_actions` for that) and contribute nothing.
    ///
    /// # Panics
    ///
    /// Panics if the dispatched actions differ from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_dispatches<A>(effect: &Effect<A>, expected: &[A])
    where
        A: std::fmt::Debug + PartialEq + Clone,
    {
        let actual = dispatched(effect);
        assert_eq!(actual, expected, "dispatched actions differ");
    }

    fn dispatched<A: Clone>(effect: &Effect<A>) -> Vec<A> {
        match effect {
            Effect::Dispatch(action) => vec![action.clone()],
            Effect::Batch(effects) | Effect::Sequence(effects) => {
                effects.iter().flat_map(dispatched).collect()
            }
            Effect::None | Effect::Execute { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Increment,
        Decrement,
    }

    fn test_reducer() -> Reducer<TestState, TestAction> {
        Reducer::new(|state: &mut TestState, action| {
            match action {
                TestAction::Increment => state.count += 1,
                TestAction::Decrement => state.count -= 1,
            }
            Effect::None
        })
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(test_reducer())
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_effect(|effect| {
                assertions::assert_no_effect(effect);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_decrement() {
        ReducerTest::new(test_reducer())
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_assertions_dispatches() {
        let effect = Effect::chain(vec![
            Effect::Dispatch(TestAction::Increment),
            Effect::Dispatch(TestAction::Decrement),
        ]);
        assertions::assert_dispatches(&effect, &[TestAction::Increment, TestAction::Decrement]);
    }
}
