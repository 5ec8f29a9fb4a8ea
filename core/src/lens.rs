//! Lenses: composable accessors for a field of a product type.
//!
//! A [`Lens`] pairs a `view` function that copies a part out of a whole with
//! a `set` function that writes a part back into the whole in place. Lenses
//! are total by construction: they must only be built over fields that are
//! always present, never over optional data (that is a prism's job).
//!
//! # Laws
//!
//! 1. **SetView**: setting back what was viewed is a no-op.
//!    `lens.set(&mut w, lens.view(&w))` leaves `w` unchanged.
//! 2. **ViewSet**: viewing after a set returns what was set.
//!    `lens.set(&mut w, p); lens.view(&w) == p`.
//!
//! # Example
//!
//! ```
//! use refract_core::{lens, Lens};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let x = lens!(Point, x);
//! let mut point = Point { x: 1, y: 2 };
//! assert_eq!(x.view(&point), 1);
//! x.set(&mut point, 10);
//! assert_eq!(point, Point { x: 10, y: 2 });
//! ```

use std::sync::Arc;

/// A composable getter/setter pair focused on one part of a whole.
///
/// Both halves run against exclusive references: `view` copies the focused
/// part out, `set` writes a replacement part in place. Construct lenses with
/// [`Lens::new`] or the [`lens!`](crate::lens!) macro.
pub struct Lens<Whole, Part> {
    view: Arc<dyn Fn(&Whole) -> Part + Send + Sync>,
    set: Arc<dyn Fn(&mut Whole, Part) + Send + Sync>,
}

impl<Whole, Part> Clone for Lens<Whole, Part> {
    fn clone(&self) -> Self {
        Self {
            view: Arc::clone(&self.view),
            set: Arc::clone(&self.set),
        }
    }
}

impl<Whole, Part> Lens<Whole, Part> {
    /// Builds a lens from an explicit accessor pair.
    pub fn new(
        view: impl Fn(&Whole) -> Part + Send + Sync + 'static,
        set: impl Fn(&mut Whole, Part) + Send + Sync + 'static,
    ) -> Self {
        Self {
            view: Arc::new(view),
            set: Arc::new(set),
        }
    }

    /// Copies the focused part out of the whole.
    #[must_use]
    pub fn view(&self, whole: &Whole) -> Part {
        (self.view)(whole)
    }

    /// Replaces the focused part, leaving every other field untouched.
    pub fn set(&self, whole: &mut Whole, part: Part) {
        (self.set)(whole, part);
    }

    /// Rewrites the focused part through a function.
    pub fn modify(&self, whole: &mut Whole, transform: impl FnOnce(Part) -> Part) {
        let part = self.view(whole);
        self.set(whole, transform(part));
    }

    /// Chains this lens with a lens into the focused part.
    ///
    /// Viewing goes outer-then-inner; setting recovers the outer part,
    /// updates it through the inner lens, and embeds it back.
    #[must_use]
    pub fn compose<Sub>(&self, inner: &Lens<Part, Sub>) -> Lens<Whole, Sub>
    where
        Whole: 'static,
        Part: 'static,
        Sub: 'static,
    {
        let outer_view = Arc::clone(&self.view);
        let outer_set = Arc::clone(&self.set);
        let inner_view = Arc::clone(&inner.view);
        let inner_set = Arc::clone(&inner.set);

        let outer_view_for_view = Arc::clone(&outer_view);
        Lens::new(
            move |whole| inner_view(&outer_view_for_view(whole)),
            move |whole, sub| {
                let mut part = outer_view(whole);
                inner_set(&mut part, sub);
                outer_set(whole, part);
            },
        )
    }

    /// Focuses two lenses on the same whole simultaneously.
    ///
    /// The two foci must be disjoint fields; with overlapping foci the set
    /// halves would clobber each other. That disjointness is a caller
    /// invariant, not something the types can enforce.
    #[must_use]
    pub fn both<Other>(&self, other: &Lens<Whole, Other>) -> Lens<Whole, (Part, Other)>
    where
        Whole: 'static,
        Part: 'static,
        Other: 'static,
    {
        let left_view = Arc::clone(&self.view);
        let left_set = Arc::clone(&self.set);
        let right_view = Arc::clone(&other.view);
        let right_set = Arc::clone(&other.set);

        Lens::new(
            move |whole| (left_view(whole), right_view(whole)),
            move |whole, (left, right)| {
                left_set(whole, left);
                right_set(whole, right);
            },
        )
    }
}

/// Builds a [`Lens`] onto a named field of a struct.
///
/// Expands to an explicit accessor pair; the field type must be `Clone`.
///
/// ```
/// use refract_core::lens;
///
/// #[derive(Clone)]
/// struct Settings {
///     notifications_on: bool,
/// }
///
/// let notifications = lens!(Settings, notifications_on);
/// let mut settings = Settings { notifications_on: false };
/// notifications.set(&mut settings, true);
/// assert!(settings.notifications_on);
/// ```
#[macro_export]
macro_rules! lens {
    ($whole:ty, $field:ident) => {
        $crate::lens::Lens::new(
            |whole: &$whole| whole.$field.clone(),
            |whole: &mut $whole, part| whole.$field = part,
        )
    };
}
