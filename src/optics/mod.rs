//! Optics for immutable data manipulation.
//!
//! This module provides lenses: composable accessors that focus on one field
//! of an immutable value, allowing type-safe reading and updating of deeply
//! nested fields without hand-written copy-and-replace chains.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set/modify access)
//! - [`FunctionLens`]: A lens built from a getter and a wither
//! - [`ComposedLens`]: Two lenses chained with [`Lens::compose`] or [`Lens::and_then`]
//! - [`identity`], [`first`], [`second`]: Standard lenses
//! - [`CheckedLens`]: Debug-only law verification (feature `laws`)
//!
//! # Composition Direction
//!
//! `compose` takes the *outer* lens as its argument, like function
//! composition; `and_then` takes the *inner* lens and reads outermost first.
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
//! #[derive(Clone, PartialEq, Debug)]
//! struct Booking { show: Show, seats: u32 }
//!
//! let left_to_right = lens!(Booking, show)
//!     .and_then(lens!(Show, movie))
//!     .and_then(lens!(Movie, title));
//! let right_to_left = lens!(Movie, title)
//!     .compose(lens!(Show, movie))
//!     .compose(lens!(Booking, show));
//!
//! let booking = Booking {
//!     show: Show { movie: Movie { title: "foo bar".to_string() }, screen: 2 },
//!     seats: 2,
//! };
//!
//! assert_eq!(left_to_right.get(&booking), right_to_left.get(&booking));
//!
//! let renamed = left_to_right.set(booking, "street race".to_string());
//! assert_eq!(renamed.show.movie.title, "street race");
//! assert_eq!(renamed.show.screen, 2);
//! assert_eq!(renamed.seats, 2);
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **Get-Set Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 2. **Set-Get Law**: Writing back the current focus yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source).clone()) == source
//!    ```
//!
//! 3. **Set-Set Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! Composition preserves the laws: if both operands are lawful, so is the
//! composed lens.

#[cfg(feature = "laws")]
mod laws;
mod lens;
mod standard_optics;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

pub use standard_optics::first;
pub use standard_optics::identity;
pub use standard_optics::second;

#[cfg(feature = "laws")]
pub use laws::CheckedLens;
#[cfg(feature = "laws")]
pub use laws::LawViolation;
#[cfg(feature = "laws")]
pub use laws::check_get_set;
#[cfg(feature = "laws")]
pub use laws::check_set_get;
#[cfg(feature = "laws")]
pub use laws::check_set_set;
#[cfg(feature = "laws")]
pub use laws::verify;
