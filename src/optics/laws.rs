//! Run-time checks for the lens laws.
//!
//! The laws are a contract on the getter/wither pair a lens is built from and
//! nothing in [`Lens`] enforces them. The functions here test a lens against a
//! concrete source and value, and [`CheckedLens`] runs those tests on every
//! `set` while `debug_assertions` are enabled.
//!
//! # Example
//!
//! ```
//! use focal::optics::{FunctionLens, LawViolation, verify};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Counter { hits: u32 }
//!
//! let honest = FunctionLens::new(
//!     |counter: &Counter| &counter.hits,
//!     |_: Counter, hits: u32| Counter { hits },
//! );
//! assert_eq!(verify(&honest, &Counter { hits: 1 }, 5), Ok(()));
//!
//! // Ignores the value it is given.
//! let stuck = FunctionLens::new(
//!     |counter: &Counter| &counter.hits,
//!     |counter: Counter, _: u32| counter,
//! );
//! assert_eq!(verify(&stuck, &Counter { hits: 1 }, 5), Err(LawViolation::GetSet));
//! ```

use thiserror::Error;

use super::Lens;

/// A lens law that did not hold for a particular input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// `get(set(s, v)) != v`
    #[error("get-set law violated: reading back a written focus returned a different value")]
    GetSet,

    /// `set(s, get(s)) != s`
    #[error("set-get law violated: writing back the current focus changed the source")]
    SetGet,

    /// `set(set(s, v1), v2) != set(s, v2)`
    #[error("set-set law violated: a second set did not fully overwrite the first")]
    SetSet,
}

/// Checks that reading back a written value yields that value.
///
/// # Errors
///
/// Returns [`LawViolation::GetSet`] if the focus after `set` differs from `value`.
pub fn check_get_set<L, S, A>(lens: &L, source: S, value: &A) -> Result<(), LawViolation>
where
    L: Lens<S, A>,
    A: Clone + PartialEq,
{
    let updated = lens.set(source, value.clone());
    if lens.get(&updated) == value {
        Ok(())
    } else {
        Err(LawViolation::GetSet)
    }
}

/// Checks that writing back the current focus leaves the source unchanged.
///
/// # Errors
///
/// Returns [`LawViolation::SetGet`] if the rebuilt source differs from `source`.
pub fn check_set_get<L, S, A>(lens: &L, source: &S) -> Result<(), LawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq,
    A: Clone,
{
    let current = lens.get(source).clone();
    if lens.set(source.clone(), current) == *source {
        Ok(())
    } else {
        Err(LawViolation::SetGet)
    }
}

/// Checks that a second set completely replaces the first.
///
/// With `first == second` this is the idempotent-set property.
///
/// # Errors
///
/// Returns [`LawViolation::SetSet`] if setting `first` then `second` differs
/// from setting `second` alone.
pub fn check_set_set<L, S, A>(
    lens: &L,
    source: &S,
    first: A,
    second: A,
) -> Result<(), LawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq,
    A: Clone,
{
    let twice = lens.set(lens.set(source.clone(), first), second.clone());
    let once = lens.set(source.clone(), second);
    if twice == once {
        Ok(())
    } else {
        Err(LawViolation::SetSet)
    }
}

/// Runs every law check for `lens` at `source` and `value`.
///
/// The checks run in the order get-set, set-get, set-set; the first failure
/// is returned. The set-set check overwrites `value` with the current focus.
///
/// # Errors
///
/// Returns the first [`LawViolation`] found.
pub fn verify<L, S, A>(lens: &L, source: &S, value: A) -> Result<(), LawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq,
    A: Clone + PartialEq,
{
    check_get_set(lens, source.clone(), &value)?;
    check_set_get(lens, source)?;
    check_set_set(lens, source, value, lens.get(source).clone())
}

/// A lens that verifies the lens laws on every `set` in debug builds.
///
/// Created by [`Lens::checked`]. A violation is logged at `error` level with
/// the lens label and then panics. With `debug_assertions` off, `set` is a
/// plain delegation to the wrapped lens.
///
/// # Example
///
/// ```
/// use focal::optics::Lens;
/// use focal::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Show { screen: u8 }
///
/// let screen_lens = lens!(Show, screen).checked("show.screen");
/// let moved = screen_lens.set(Show { screen: 1 }, 4);
/// assert_eq!(moved.screen, 4);
/// ```
pub struct CheckedLens<L> {
    lens: L,
    label: &'static str,
}

impl<L> CheckedLens<L> {
    /// Wraps `lens`, naming it `label` in diagnostics.
    #[must_use]
    pub const fn new(lens: L, label: &'static str) -> Self {
        Self { lens, label }
    }

    /// Returns the label given at construction.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Unwraps the checked lens, returning the inner lens.
    #[must_use]
    pub fn into_inner(self) -> L {
        self.lens
    }
}

impl<L, S, A> Lens<S, A> for CheckedLens<L>
where
    L: Lens<S, A>,
    S: Clone + PartialEq,
    A: Clone + PartialEq,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        self.lens.get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if cfg!(debug_assertions)
            && let Err(violation) = verify(&self.lens, &source, value.clone())
        {
            log::error!("lens `{}`: {violation}", self.label);
            panic!("lens `{}`: {violation}", self.label);
        }
        self.lens.set(source, value)
    }
}

impl<L: Clone> Clone for CheckedLens<L> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            label: self.label,
        }
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for CheckedLens<L> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CheckedLens")
            .field("label", &self.label)
            .field("lens", &self.lens)
            .finish()
    }
}
