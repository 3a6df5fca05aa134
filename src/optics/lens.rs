//! Lens optics for focusing on a field of an immutable value.
//!
//! A Lens pairs a getter with a wither: the getter borrows the focused field
//! out of a source, the wither consumes a source and returns a new one with
//! only that field replaced. Lenses compose, so a single lens can reach a
//! field nested arbitrarily deep.
//!
//! # Laws
//!
//! 1. **Get-Set Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 2. **Set-Get Law**: Writing back the current focus changes nothing.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source).clone()) == source
//!    ```
//!
//! 3. **Set-Set Law**: Two consecutive sets are equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use focal::optics::Lens;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Movie { title: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Show { movie: Movie, screen: u8 }
//!
//! let show_title = lens!(Show, movie).and_then(lens!(Movie, title));
//!
//! let show = Show { movie: Movie { title: "foo bar".to_string() }, screen: 3 };
//! let renamed = show_title.set(show.clone(), "street race".to_string());
//!
//! assert_eq!(renamed.movie.title, "street race");
//! assert_eq!(renamed.screen, 3);
//! assert_eq!(show.movie.title, "foo bar");
//! ```

use std::marker::PhantomData;

#[cfg(feature = "laws")]
use super::laws::CheckedLens;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type (the field)
///
/// # Laws
///
/// 1. **Get-Set Law**: `lens.get(&lens.set(source, value)) == &value`
/// 2. **Set-Get Law**: `lens.set(source.clone(), lens.get(&source).clone()) == source`
/// 3. **Set-Set Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
///
/// The laws are a contract on the getter/wither pair and are not checked at
/// run time. See [`Lens::checked`] for a debug-only verifying wrapper.
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new source with the focused field replaced by `value`.
    ///
    /// The source is consumed; every other field is carried over unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused field with the result of applying `function` to it.
    ///
    /// Equivalent to `self.set(source, function(self.get(&source).clone()))`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Booking { seats: u32, row: char }
    ///
    /// let seats_lens = lens!(Booking, seats);
    /// let booking = Booking { seats: 2, row: 'F' };
    /// let bigger = seats_lens.modify(booking, |seats| seats + 1);
    /// assert_eq!(bigger, Booking { seats: 3, row: 'F' });
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`Lens::modify`], but hands the transform a reference so the
    /// focus does not need to be cloned.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { username: String, email: String }
    ///
    /// let username_lens = lens!(User, username);
    /// let user = User { username: "johndoe".to_string(), email: "jdoe@example.com".to_string() };
    /// let shouted = username_lens.modify_ref(user, |name| name.to_uppercase());
    /// assert_eq!(shouted.username, "JOHNDOE");
    /// ```
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens under `outer`, a lens onto the structure that holds
    /// this lens's source.
    ///
    /// The argument is the *containing* lens (function composition order):
    /// `inner.compose(outer)` reads as "inner after outer". Setting through the
    /// result rebuilds the intermediate value with `self.set` and then swaps it
    /// into the container with `outer.modify`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { field2: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Container { field1: Inner }
    ///
    /// let field1 = lens!(Container, field1);
    /// let field2 = lens!(Inner, field2);
    /// let nested = field2.compose(field1);
    ///
    /// let container = Container { field1: Inner { field2: "hi".to_string() } };
    /// assert_eq!(nested.get(&container), "hi");
    /// ```
    fn compose<C, O>(self, outer: O) -> ComposedLens<O, Self, S>
    where
        Self: Sized,
        O: Lens<C, S>,
    {
        ComposedLens::new(outer, self)
    }

    /// Extends this lens with `inner`, a lens into its focus.
    ///
    /// Reads left to right, outermost field first. Defined as
    /// `inner.compose(self)`.
    ///
    /// # Example
    ///
    /// ```
    /// use focal::optics::Lens;
    /// use focal::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Inner { field2: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Container { field1: Inner }
    ///
    /// let nested = lens!(Container, field1).and_then(lens!(Inner, field2));
    ///
    /// let container = Container { field1: Inner { field2: "hi".to_string() } };
    /// let updated = nested.modify(container.clone(), |text| text + "!");
    ///
    /// assert_eq!(updated.field1.field2, "hi!");
    /// assert_eq!(container.field1.field2, "hi");
    /// ```
    fn and_then<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        inner.compose(self)
    }

    /// Wraps this lens so that every `set` verifies the lens laws in debug
    /// builds.
    ///
    /// `label` identifies the lens in the log record and panic message.
    #[cfg(feature = "laws")]
    fn checked(self, label: &'static str) -> CheckedLens<Self>
    where
        Self: Sized,
    {
        CheckedLens::new(self, label)
    }
}

/// Pairs a borrowing getter with a consuming wither.
///
/// Every other lens constructor in the crate ends up here: `lens!` and the
/// `Lenses` derive both emit a `FunctionLens`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
/// - `G`: The getter function type
/// - `W`: The wither function type
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Movie { title: String, minutes: u16 }
///
/// let title_lens = FunctionLens::new(
///     |movie: &Movie| &movie.title,
///     |movie: Movie, title: String| Movie { title, ..movie },
/// );
///
/// let movie = Movie { title: "foo bar".to_string(), minutes: 95 };
/// assert_eq!(title_lens.get(&movie), "foo bar");
/// ```
pub struct FunctionLens<S, A, G, W>
where
    G: Fn(&S) -> &A,
    W: Fn(S, A) -> S,
{
    getter: G,
    wither: W,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, W> FunctionLens<S, A, G, W>
where
    G: Fn(&S) -> &A,
    W: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and a wither.
    ///
    /// Both functions must be pure and together satisfy the lens laws. Nothing
    /// is validated here.
    #[must_use]
    pub const fn new(getter: G, wither: W) -> Self {
        Self {
            getter,
            wither,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, W> Lens<S, A> for FunctionLens<S, A, G, W>
where
    G: Fn(&S) -> &A,
    W: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.wither)(source, value)
    }
}

impl<S, A, G, W> Clone for FunctionLens<S, A, G, W>
where
    G: Fn(&S) -> &A + Clone,
    W: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            wither: self.wither.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, W> std::fmt::Debug for FunctionLens<S, A, G, W>
where
    G: Fn(&S) -> &A,
    W: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of an outer and an inner lens.
///
/// Produced by [`Lens::compose`] and [`Lens::and_then`].
///
/// # Type Parameters
///
/// - `O`: The outer lens, from the container to the intermediate value
/// - `I`: The inner lens, from the intermediate value to the focus
/// - `M`: The intermediate type
///
/// The intermediate type must be `Clone + 'static`: `set` clones it out of
/// the container, and `get` borrows the focus through it.
pub struct ComposedLens<O, I, M> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(M) -> M>,
}

impl<O, I, M> ComposedLens<O, I, M> {
    /// Creates a new composed lens from the outer and inner lenses.
    #[must_use]
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<C, M, A, O, I> Lens<C, A> for ComposedLens<O, I, M>
where
    O: Lens<C, M>,
    I: Lens<M, A>,
    M: Clone + 'static,
{
    fn get<'a>(&self, source: &'a C) -> &'a A {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: C, value: A) -> C {
        self.outer
            .modify(source, |intermediate| self.inner.set(intermediate, value))
    }
}

impl<O: Clone, I: Clone, M> Clone for ComposedLens<O, I, M> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: std::fmt::Debug, I: std::fmt::Debug, M> std::fmt::Debug for ComposedLens<O, I, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

type SharedPair = (std::rc::Rc<str>, u8);

// Phantom markers must not tie thread safety to the source type.
static_assertions::assert_impl_all!(
    FunctionLens<SharedPair, u8, fn(&SharedPair) -> &u8, fn(SharedPair, u8) -> SharedPair>:
        Send, Sync, Clone
);
static_assertions::assert_impl_all!(
    ComposedLens<
        FunctionLens<SharedPair, u8, fn(&SharedPair) -> &u8, fn(SharedPair, u8) -> SharedPair>,
        FunctionLens<u8, u8, fn(&u8) -> &u8, fn(u8, u8) -> u8>,
        u8,
    >: Send, Sync, Clone
);

/// Builds a [`FunctionLens`] onto a named field of a struct.
///
/// The getter borrows `source.field`. The wither takes the source by value,
/// assigns the new field value to it, and hands it back, so the remaining
/// fields are moved rather than cloned.
///
/// The first argument is the struct type: a bare name, a name with generic
/// arguments (`Slot<i32>`), or a module path (`booking::Seat`).
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Booking { show: String, num_seats: u32 }
///
/// let seats = lens!(Booking, num_seats);
///
/// let booking = Booking { show: "matinee".to_string(), num_seats: 2 };
/// assert_eq!(*seats.get(&booking), 2);
///
/// let bigger = seats.set(booking, 4);
/// assert_eq!(bigger, Booking { show: "matinee".to_string(), num_seats: 4 });
/// ```
#[macro_export]
macro_rules! lens {
    (@field ($($source:tt)+), $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$($source)+| &source.$field,
            |mut source: $($source)+, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::lens!(@field ($struct_type<$($generic),+>), $field)
    };
    ($struct_type:path, $field:ident) => {
        $crate::lens!(@field ($struct_type), $field)
    };
}
