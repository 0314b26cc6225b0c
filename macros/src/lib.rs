//! Procedural macros for tola-either
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(IntoEither)]` | two-variant enum | `From` conversions to and from `Either` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(IntoEither)]
//! enum Lookup {
//!     Missing(u32),   // -> Either::Left
//!     Found(String),  // -> Either::Right
//! }
//!
//! let e: Either<u32, String> = Lookup::Found("x".into()).into();
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive `From` conversions between a two-variant enum and `Either`.
///
/// The first variant maps to `Left`, the second to `Right`. Override with
/// `#[either(left)]` or `#[either(right)]` on a variant.
///
/// # Usage
/// ```ignore
/// #[derive(IntoEither)]
/// enum Reply<T> {
///     #[either(right)]
///     Value(T),
///     Code(u16),
/// }
///
/// let e: Either<u16, &str> = Reply::Value("ok").into();
/// assert_eq!(e, Either::Right("ok"));
/// ```
#[proc_macro_derive(IntoEither, attributes(either))]
pub fn derive_into_either(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_into_either(input).into()
}
