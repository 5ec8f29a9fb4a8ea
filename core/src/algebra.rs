//! Semigroup and monoid algebra.
//!
//! A semigroup is a type with an associative `combine` operation; a monoid
//! additionally has an identity element. These two structures are the
//! foundation the rest of the crate is built on: reducers compose because a
//! reducer is a function from actions into an endomorphism of state, and
//! functions into a monoid are themselves a monoid (see [`Endo`] and
//! [`FunctionM`]).
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! - **Associativity**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
//! - **Identity** (monoids): `M::empty().combine(a) == a == a.combine(M::empty())`

use std::cmp::Ordering;
use std::ops::{Add, Mul};
use std::sync::Arc;

/// A type with an associative binary operation.
///
/// # Example
///
/// ```
/// use refract_core::Semigroup;
///
/// let greeting = String::from("Hello, ").combine(String::from("World!"));
/// assert_eq!(greeting, "Hello, World!");
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

/// A semigroup with an identity element.
///
/// # Example
///
/// ```
/// use refract_core::{Monoid, Semigroup};
///
/// assert_eq!(Vec::<i32>::empty().combine(vec![1, 2]), vec![1, 2]);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    #[must_use]
    fn empty() -> Self;
}

/// Folds a sequence of semigroup values left-to-right starting from `seed`.
pub fn sconcat<S: Semigroup>(items: impl IntoIterator<Item = S>, seed: S) -> S {
    items.into_iter().fold(seed, Semigroup::combine)
}

/// Folds a sequence of monoid values left-to-right starting from the identity.
pub fn mconcat<M: Monoid>(items: impl IntoIterator<Item = M>) -> M {
    sconcat(items, M::empty())
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `Ordering` combines by deferring to the right operand on a tie, which is
/// exactly the lexicographic comparison rule.
impl Semigroup for Ordering {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Monoid for Ordering {
    fn empty() -> Self {
        Self::Equal
    }
}

/// Lifts a semigroup into a monoid: `None` is the identity.
impl<S: Semigroup> Semigroup for Option<S> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(lhs), Some(rhs)) => Some(lhs.combine(rhs)),
            (lhs, None) => lhs,
            (None, rhs) => rhs,
        }
    }
}

impl<S: Semigroup> Monoid for Option<S> {
    fn empty() -> Self {
        None
    }
}

/// Numbers under addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Self(T::default())
    }
}

/// Numbers under multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Product<T>(pub T);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

macro_rules! product_monoid {
    ($($ty:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$ty> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
}

/// Booleans under conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct All(pub bool);

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

/// Booleans under disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

/// Values under minimum. A semigroup only: `Ord` alone provides no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Min<T>(pub T);

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

/// Values under maximum. A semigroup only, like [`Min`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Max<T>(pub T);

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

/// An endomorphism: a function from a type to itself.
///
/// Endomorphisms form a monoid under left-to-right composition with the
/// identity function as identity. This is the state half of the reducer
/// decomposition: a reducer is a function from actions into `Endo<State>`.
///
/// # Example
///
/// ```
/// use refract_core::algebra::Endo;
/// use refract_core::Semigroup;
///
/// let incr = Endo::new(|x: i32| x + 1);
/// let square = Endo::new(|x: i32| x * x);
/// // Applies incr first, then square.
/// assert_eq!(incr.combine(square).call(2), 9);
/// ```
pub struct Endo<A> {
    call: Arc<dyn Fn(A) -> A + Send + Sync>,
}

impl<A> Endo<A> {
    /// Wraps a function as an endomorphism.
    pub fn new(call: impl Fn(A) -> A + Send + Sync + 'static) -> Self {
        Self {
            call: Arc::new(call),
        }
    }

    /// Applies the wrapped function.
    #[must_use]
    pub fn call(&self, value: A) -> A {
        (self.call)(value)
    }
}

impl<A> Clone for Endo<A> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<A: 'static> Semigroup for Endo<A> {
    fn combine(self, other: Self) -> Self {
        Self::new(move |value| other.call(self.call(value)))
    }
}

impl<A: 'static> Monoid for Endo<A> {
    fn empty() -> Self {
        Self::new(|value| value)
    }
}

/// A function into a monoid, combined pointwise.
///
/// For any monoid `M`, functions `A -> M` form a monoid: combine by calling
/// both functions and combining the results, with the constant identity
/// function as identity. Together with [`Endo`] this is why reducers compose.
pub struct FunctionM<A, M> {
    call: Arc<dyn Fn(A) -> M + Send + Sync>,
}

impl<A, M> FunctionM<A, M> {
    /// Wraps a function into a monoid.
    pub fn new(call: impl Fn(A) -> M + Send + Sync + 'static) -> Self {
        Self {
            call: Arc::new(call),
        }
    }

    /// Applies the wrapped function.
    #[must_use]
    pub fn call(&self, value: A) -> M {
        (self.call)(value)
    }
}

impl<A, M> Clone for FunctionM<A, M> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<A, M> Semigroup for FunctionM<A, M>
where
    A: Clone + 'static,
    M: Semigroup + 'static,
{
    fn combine(self, other: Self) -> Self {
        Self::new(move |value: A| self.call(value.clone()).combine(other.call(value)))
    }
}

impl<A, M> Monoid for FunctionM<A, M>
where
    A: Clone + 'static,
    M: Monoid + 'static,
{
    fn empty() -> Self {
        Self::new(|_| M::empty())
    }
}

/// A predicate on `A`; combining predicates takes their conjunction.
pub type Predicate<A> = FunctionM<A, All>;

/// A comparator on `A`; combining comparators breaks ties left-to-right.
pub type Comparator<A> = FunctionM<(A, A), Ordering>;
