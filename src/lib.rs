//! # focal
//!
//! Functional lenses for Rust: read and immutably update a field nested
//! anywhere inside an immutable value through a single composed accessor.
//!
//! ## Overview
//!
//! A lens is built from two pure functions supplied by the owner of a type:
//! a getter that borrows a field, and a wither that returns a new value with
//! that field replaced. Lenses compose, so updating `user.booking.show.movie.title`
//! is one call instead of four nested copy-and-replace steps.
//!
//! - **Lens**: `get`, `set`, `modify`, `compose`, `and_then`
//! - **Standard lenses**: identity and tuple projections
//! - **Law checks**: verify the get-set, set-get and set-set laws
//! - **Derive**: `#[derive(Lenses)]` for named structs
//!
//! ## Feature Flags
//!
//! - `optics`: Lens types and the `lens!` macro
//! - `laws`: Law checks and the debug-only `CheckedLens`
//! - `derive`: The `Lenses` derive macro
//!
//! ## Example
//!
//! ```rust
//! use focal::prelude::*;
//! use focal::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Inner { field2: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { field1: Inner }
//!
//! let nested = lens!(Container, field1).and_then(lens!(Inner, field2));
//!
//! let container = Container { field1: Inner { field2: "hi".to_string() } };
//! let shouted = nested.modify(container.clone(), |text| text + "!");
//!
//! assert_eq!(shouted, Container { field1: Inner { field2: "hi!".to_string() } });
//! assert_eq!(container, Container { field1: Inner { field2: "hi".to_string() } });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::Lenses;
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use focal_derive::Lenses;
