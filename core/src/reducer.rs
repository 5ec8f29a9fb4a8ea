//! Reducers: pure state transitions with deferred side effects.
//!
//! A [`Reducer`] wraps a function `(&mut S, A) -> Effect<A>`: it updates
//! state in place for one action and returns a description of any side
//! effects, never performing I/O itself. That single exclusive-mutable-
//! reference form is the only reducer shape in this crate.
//!
//! Reducers form a monoid. This is not a coincidence: uncurried, a reducer
//! is a function from actions into an endomorphism of state, endomorphisms
//! are a monoid under composition, and functions into a monoid are a monoid
//! pointwise (see [`crate::algebra::Endo`] and [`crate::algebra::FunctionM`]).
//! [`Reducer::combine`] spells that composition out directly, and the lifting
//! operations let reducers written against a small state/action pair be
//! embedded into a larger application.
//!
//! # Example
//!
//! ```
//! use refract_core::{Effect, Reducer};
//!
//! let counter: Reducer<i32, i32> = Reducer::new(|count, delta| {
//!     *count += delta;
//!     Effect::None
//! });
//!
//! let mut count = 0;
//! let _ = counter.reduce(&mut count, 5);
//! assert_eq!(count, 5);
//! ```

use std::sync::Arc;

use crate::algebra::{Monoid, Semigroup};
use crate::effect::Effect;
use crate::lens::Lens;
use crate::prism::Prism;

/// A pure state-transition function from `(state, action)` to an effect.
///
/// Given the same state and action, a reducer must always produce the same
/// state update and effect; all I/O belongs inside the returned
/// [`Effect`]. Reducers must not retain the state reference beyond the
/// reduce call (the borrow checker enforces this).
pub struct Reducer<S, A> {
    reduce: Arc<dyn Fn(&mut S, A) -> Effect<A> + Send + Sync>,
}

impl<S, A> Clone for Reducer<S, A> {
    fn clone(&self) -> Self {
        Self {
            reduce: Arc::clone(&self.reduce),
        }
    }
}

impl<S, A> Reducer<S, A>
where
    S: 'static,
    A: Send + 'static,
{
    /// Wraps a reduce function.
    pub fn new(reduce: impl Fn(&mut S, A) -> Effect<A> + Send + Sync + 'static) -> Self {
        Self {
            reduce: Arc::new(reduce),
        }
    }

    /// Runs the reducer for one action, updating `state` in place and
    /// returning the effect to interpret.
    pub fn reduce(&self, state: &mut S, action: A) -> Effect<A> {
        (self.reduce)(state, action)
    }

    /// The identity reducer: leaves state untouched and performs nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(|_, _| Effect::None)
    }

    /// Runs `self` then `other` on the same action, threading state through
    /// both and sequencing their effects.
    ///
    /// The operation is associative, and [`Reducer::empty`] is its identity,
    /// so reducers can be folded with [`crate::algebra::mconcat`].
    #[must_use]
    pub fn combine(self, other: Self) -> Self
    where
        A: Clone,
    {
        Self::new(move |state, action: A| {
            let first = self.reduce(state, action.clone());
            let second = other.reduce(state, action);
            first.then(second)
        })
    }

    /// Re-scopes this reducer to run on the substate a lens focuses.
    ///
    /// The focused part is copied out, reduced, and written back; every
    /// other field of the container is untouched.
    #[must_use]
    pub fn lift_state<Whole>(self, lens: Lens<Whole, S>) -> Reducer<Whole, A>
    where
        Whole: 'static,
    {
        Reducer::new(move |whole: &mut Whole, action| {
            let mut part = lens.view(whole);
            let effect = self.reduce(&mut part, action);
            lens.set(whole, part);
            effect
        })
    }

    /// Re-scopes this reducer to run on the action variant a prism focuses.
    ///
    /// A non-matching action is the expected no-op path, not an error: state
    /// is returned unchanged with [`Effect::None`]. On a match, the inner
    /// effect is re-scoped through the prism's constructor so its eventual
    /// actions land back in the outer action type.
    #[must_use]
    pub fn lift_action<Outer>(self, prism: Prism<Outer, A>) -> Reducer<S, Outer>
    where
        Outer: Send + 'static,
    {
        Reducer::new(move |state, outer: Outer| {
            prism.preview(&outer).map_or(Effect::None, |inner| {
                let embed = prism.clone();
                self.reduce(state, inner)
                    .map(move |action| embed.review(action))
            })
        })
    }

    /// Re-scopes this reducer along a lens and a prism at once.
    ///
    /// This is the standard way to assemble an application reducer out of
    /// independent feature reducers, each written against its own minimal
    /// state/action pair.
    #[must_use]
    pub fn lift<Whole, Outer>(
        self,
        lens: Lens<Whole, S>,
        prism: Prism<Outer, A>,
    ) -> Reducer<Whole, Outer>
    where
        Whole: 'static,
        Outer: Send + 'static,
    {
        self.lift_state(lens).lift_action(prism)
    }
}

impl<S, A> Semigroup for Reducer<S, A>
where
    S: 'static,
    A: Clone + Send + 'static,
{
    fn combine(self, other: Self) -> Self {
        Reducer::combine(self, other)
    }
}

impl<S, A> Monoid for Reducer<S, A>
where
    S: 'static,
    A: Clone + Send + 'static,
{
    fn empty() -> Self {
        Reducer::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::mconcat;
    use crate::{lens, prism};
    use proptest::prelude::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        count: i64,
        log: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TallyAction {
        Add(i64),
        Note(String),
    }

    fn adder() -> Reducer<Tally, TallyAction> {
        Reducer::new(|state: &mut Tally, action| {
            if let TallyAction::Add(amount) = action {
                state.count += amount;
            }
            Effect::None
        })
    }

    fn noter() -> Reducer<Tally, TallyAction> {
        Reducer::new(|state: &mut Tally, action| {
            if let TallyAction::Note(note) = action {
                state.log.push(note);
            }
            Effect::None
        })
    }

    /// Marks each run with a dispatch effect so effect output is observable.
    fn marker(tag: &'static str) -> Reducer<Tally, TallyAction> {
        Reducer::new(move |_, _| Effect::Dispatch(TallyAction::Note(tag.to_string())))
    }

    /// Flattens the synchronous actions an effect would feed the store.
    fn dispatched<A: Clone>(effect: &Effect<A>) -> Vec<A> {
        match effect {
            Effect::Dispatch(action) => vec![action.clone()],
            Effect::Batch(effects) | Effect::Sequence(effects) => {
                effects.iter().flat_map(dispatched).collect()
            }
            Effect::None | Effect::Execute { .. } => Vec::new(),
        }
    }

    proptest! {
        #[test]
        fn combine_is_associative(
            count in -1_000i64..1_000,
            amount in -1_000i64..1_000,
        ) {
            let action = TallyAction::Add(amount);

            let grouped_left = adder().combine(marker("m")).combine(noter());
            let grouped_right = adder().combine(marker("m").combine(noter()));

            let mut left = Tally { count, log: vec![] };
            let mut right = left.clone();

            let left_effect = grouped_left.reduce(&mut left, action.clone());
            let right_effect = grouped_right.reduce(&mut right, action);

            prop_assert_eq!(left, right);
            prop_assert_eq!(dispatched(&left_effect), dispatched(&right_effect));
        }

        #[test]
        fn empty_is_identity(count in -1_000i64..1_000, amount in -1_000i64..1_000) {
            let action = TallyAction::Add(amount);

            let mut plain = Tally { count, log: vec![] };
            let mut left = plain.clone();
            let mut right = plain.clone();

            let _ = adder().reduce(&mut plain, action.clone());
            let left_effect = Reducer::empty().combine(adder()).reduce(&mut left, action.clone());
            let right_effect = adder().combine(Reducer::empty()).reduce(&mut right, action);

            prop_assert_eq!(&left, &plain);
            prop_assert_eq!(&right, &plain);
            prop_assert!(left_effect.is_none());
            prop_assert!(right_effect.is_none());
        }
    }

    #[test]
    fn empty_changes_nothing() {
        let reducer = Reducer::<Tally, TallyAction>::empty();
        let mut state = Tally::default();
        let effect = reducer.reduce(&mut state, TallyAction::Add(5));
        assert_eq!(state, Tally::default());
        assert!(effect.is_none());
    }

    #[test]
    fn combine_threads_state_left_to_right() {
        let reducer = adder().combine(noter());
        let mut state = Tally::default();

        let _ = reducer.reduce(&mut state, TallyAction::Add(2));
        let _ = reducer.reduce(&mut state, TallyAction::Note("two".into()));

        assert_eq!(state.count, 2);
        assert_eq!(state.log, vec!["two".to_string()]);
    }

    #[test]
    fn mconcat_assembles_reducers() {
        let reducer = mconcat(vec![adder(), noter(), adder()]);
        let mut state = Tally::default();

        let _ = reducer.reduce(&mut state, TallyAction::Add(3));
        assert_eq!(state.count, 6);
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct App {
        tally: Tally,
        title: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum AppAction {
        Tally(TallyAction),
        Rename(String),
    }

    #[test]
    fn lift_state_touches_only_the_focused_part() {
        let reducer = adder().lift_state(lens!(App, tally));
        let mut state = App {
            title: "kept".into(),
            ..App::default()
        };

        let _ = reducer.reduce(&mut state, TallyAction::Add(4));

        assert_eq!(state.tally.count, 4);
        assert_eq!(state.title, "kept");
    }

    #[test]
    fn lift_action_ignores_foreign_variants() {
        let reducer = adder().lift(lens!(App, tally), prism!(AppAction, Tally));
        let mut state = App::default();
        let before = state.clone();

        let effect = reducer.reduce(&mut state, AppAction::Rename("other".into()));

        assert_eq!(state, before);
        assert!(effect.is_none());
    }

    #[test]
    fn lift_action_rescopes_effects() {
        let reducer = marker("ran").lift(lens!(App, tally), prism!(AppAction, Tally));
        let mut state = App::default();

        let effect = reducer.reduce(&mut state, AppAction::Tally(TallyAction::Add(1)));

        assert_eq!(
            dispatched(&effect),
            vec![AppAction::Tally(TallyAction::Note("ran".into()))]
        );
    }

    #[test]
    fn unmatched_action_is_a_total_noop_across_the_tree() {
        let app = adder()
            .lift(lens!(App, tally), prism!(AppAction, Tally))
            .combine(noter().lift(lens!(App, tally), prism!(AppAction, Tally)));
        let mut state = App::default();
        let before = state.clone();

        let effect = app.reduce(&mut state, AppAction::Rename("nobody owns this".into()));

        assert_eq!(state, before);
        assert!(effect.is_none());
    }
}
