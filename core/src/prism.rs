//! Prisms: composable accessors for one variant of a sum type.
//!
//! A [`Prism`] is the dual of a lens: `preview` attempts to extract the
//! payload of one variant (failing silently on any other variant, which is a
//! normal branch and not an error), and `review` embeds a payload back into
//! that variant. Prisms are how a feature reducer's action type is carved
//! out of an application action enum.
//!
//! # Laws
//!
//! 1. **PreviewReview**: `prism.preview(&prism.review(p)) == Some(p)`.
//! 2. **ReviewPreview**: if `prism.preview(&w) == Some(p)`, then
//!    `prism.review(p) == w`.

use std::sync::Arc;

/// A value of one of two types.
///
/// Used by [`Prism::either`] to tag which of two prisms matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

/// A composable matcher/constructor pair focused on one variant of a whole.
///
/// Construct prisms with [`Prism::new`] or the [`prism!`](crate::prism!)
/// macro.
pub struct Prism<Whole, Part> {
    preview: Arc<dyn Fn(&Whole) -> Option<Part> + Send + Sync>,
    review: Arc<dyn Fn(Part) -> Whole + Send + Sync>,
}

impl<Whole, Part> Clone for Prism<Whole, Part> {
    fn clone(&self) -> Self {
        Self {
            preview: Arc::clone(&self.preview),
            review: Arc::clone(&self.review),
        }
    }
}

impl<Whole, Part> Prism<Whole, Part> {
    /// Builds a prism from an explicit matcher/constructor pair.
    pub fn new(
        preview: impl Fn(&Whole) -> Option<Part> + Send + Sync + 'static,
        review: impl Fn(Part) -> Whole + Send + Sync + 'static,
    ) -> Self {
        Self {
            preview: Arc::new(preview),
            review: Arc::new(review),
        }
    }

    /// Extracts the focused payload if the whole is the matching variant.
    #[must_use]
    pub fn preview(&self, whole: &Whole) -> Option<Part> {
        (self.preview)(whole)
    }

    /// Embeds a payload into the focused variant. Total.
    #[must_use]
    pub fn review(&self, part: Part) -> Whole {
        (self.review)(part)
    }

    /// Chains this prism with a prism into the focused payload.
    #[must_use]
    pub fn compose<Sub>(&self, inner: &Prism<Part, Sub>) -> Prism<Whole, Sub>
    where
        Whole: 'static,
        Part: 'static,
        Sub: 'static,
    {
        let outer_preview = Arc::clone(&self.preview);
        let outer_review = Arc::clone(&self.review);
        let inner_preview = Arc::clone(&inner.preview);
        let inner_review = Arc::clone(&inner.review);

        Prism::new(
            move |whole| outer_preview(whole).and_then(|part| inner_preview(&part)),
            move |sub| outer_review(inner_review(sub)),
        )
    }

    /// Lifts two prisms over the same whole into a prism onto the tagged
    /// union of their payloads. Preview tries the left prism first.
    #[must_use]
    pub fn either<Other>(&self, other: &Prism<Whole, Other>) -> Prism<Whole, Either<Part, Other>>
    where
        Whole: 'static,
        Part: 'static,
        Other: 'static,
    {
        let left_preview = Arc::clone(&self.preview);
        let left_review = Arc::clone(&self.review);
        let right_preview = Arc::clone(&other.preview);
        let right_review = Arc::clone(&other.review);

        Prism::new(
            move |whole| {
                left_preview(whole)
                    .map(Either::Left)
                    .or_else(|| right_preview(whole).map(Either::Right))
            },
            move |part| match part {
                Either::Left(left) => left_review(left),
                Either::Right(right) => right_review(right),
            },
        )
    }
}

/// Builds a [`Prism`] onto a single-payload variant of an enum.
///
/// Expands to an explicit match/construct pair; the payload type must be
/// `Clone`.
///
/// ```
/// use refract_core::prism;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let circle = prism!(Shape, Circle);
/// assert_eq!(circle.preview(&Shape::Circle(1.0)), Some(1.0));
/// assert_eq!(circle.preview(&Shape::Square(1.0)), None);
/// assert_eq!(circle.review(2.0), Shape::Circle(2.0));
/// ```
#[macro_export]
macro_rules! prism {
    ($whole:ty, $variant:ident) => {{
        type __PrismWhole = $whole;
        $crate::prism::Prism::new(
            |whole: &__PrismWhole| match whole {
                __PrismWhole::$variant(part) => Some(part.clone()),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |part| __PrismWhole::$variant(part),
        )
    }};
}
