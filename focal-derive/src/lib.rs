//! Derive macro for focal lenses.
//!
//! # Example
//!
//! ```rust,ignore
//! use focal::optics::Lens;
//! use focal_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Movie {
//!     title: String,
//!     minutes: u16,
//! }
//!
//! // Generated methods:
//! // - Movie::title_lens() -> impl Lens<Movie, String>
//! // - Movie::minutes_lens() -> impl Lens<Movie, u16>
//!
//! let movie = Movie { title: "foo bar".to_string(), minutes: 95 };
//! assert_eq!(Movie::title_lens().get(&movie), "foo bar");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro for generating lenses for struct fields.
///
/// For every named field `foo: T` this generates
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl focal::optics::Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// The lens's wither moves the source, replaces the field and returns it, so
/// no other field is cloned.
///
/// # Requirements
///
/// - The type must be a struct with named fields
/// - The struct should implement `Clone` to be used as the intermediate of a
///   composed lens
///
/// # Example
///
/// ```rust,ignore
/// use focal::optics::Lens;
/// use focal_derive::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct User {
///     username: String,
///     email: String,
/// }
///
/// let user = User {
///     username: "johndoe".to_string(),
///     email: "jdoe@example.com".to_string(),
/// };
///
/// let renamed = User::username_lens().set(user, "janedoe".to_string());
/// assert_eq!(renamed.username, "janedoe");
/// ```
///
/// # Generics
///
/// Generic parameters and where clauses are carried over:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Tagged<T> {
///     value: T,
///     tag: String,
/// }
///
/// let tagged = Tagged { value: 42, tag: "answer".to_string() };
/// assert_eq!(*Tagged::<i32>::value_lens().get(&tagged), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    TokenStream::from(lenses::derive_lenses_impl(&input))
}
