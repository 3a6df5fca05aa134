//! Standard lenses that are commonly used.
//!
//! This module provides pre-defined lenses for common use cases.

use super::{FunctionLens, Lens};

/// Creates the identity Lens, which focuses on the whole source.
///
/// The identity Lens is a unit for composition:
/// - `identity().and_then(lens)` behaves like `lens`
/// - `lens.and_then(identity())` behaves like `lens`
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, identity};
///
/// let whole = identity::<String>();
///
/// let greeting = "hello".to_string();
/// assert_eq!(whole.get(&greeting), "hello");
/// assert_eq!(whole.set(greeting, "bye".to_string()), "bye");
/// ```
#[must_use]
pub fn identity<S>() -> impl Lens<S, S> + Clone {
    FunctionLens::new(|source: &S| source, |_: S, value: S| value)
}

/// Creates a Lens onto the first element of a pair.
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, first};
///
/// let left = first::<i32, String>();
///
/// let pair = (1, "one".to_string());
/// assert_eq!(*left.get(&pair), 1);
/// assert_eq!(left.set(pair, 2), (2, "one".to_string()));
/// ```
#[must_use]
pub fn first<A, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(|pair: &(A, B)| &pair.0, |(_, b): (A, B), a: A| (a, b))
}

/// Creates a Lens onto the second element of a pair.
///
/// # Example
///
/// ```
/// use focal::optics::{Lens, second};
///
/// let right = second::<i32, String>();
///
/// let pair = (1, "one".to_string());
/// assert_eq!(right.get(&pair), "one");
/// assert_eq!(right.set(pair, "uno".to_string()), (1, "uno".to_string()));
/// ```
#[must_use]
pub fn second<A, B>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(|pair: &(A, B)| &pair.1, |(a, _): (A, B), b: B| (a, b))
}
