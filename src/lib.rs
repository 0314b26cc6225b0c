#![cfg_attr(not(any(feature = "std", test)), no_std)]

// Feature flags handled:
// - std: default, enables std library and the print helpers
// - alloc: owned precondition messages in no_std
// - derive: re-exports #[derive(IntoEither)]

//! # tola-either
//!
//! A closed two-variant sum type.
//!
//! `Either<L, R>` is exactly one of `Left(L)` or `Right(R)`. Operations that
//! rewrite the carried value keep the tag; `swap` exchanges it.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Errors                                                  |
//! |  - Error (NullArgument, Precondition, TypeMismatch)               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Either                                                  |
//! |  - Left / Right, Side                                             |
//! |  - bimap, swap, side accessors, Display, Hash, Iterator           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: User API                                                |
//! |  - lang helpers (require, with, print)                            |
//! |  - macros (for_both!, try_left!, try_right!, #[derive(IntoEither)])|
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Laws
//!
//! - Identity: `e.bimap(|l| l, |r| r) == e`
//! - Composition: `e.bimap(f1, g1).bimap(f2, g2) == e.bimap(|x| f2(f1(x)), |y| g2(g1(y)))`
//! - Involution: `e.swap().swap() == e`
//!
//! ## Quick Start
//!
//! ```
//! use tola_either::prelude::*;
//!
//! let e: Either<u16, String> = Left(404);
//! let bumped = e.bimap(|code| code + 1, |msg| msg);
//!
//! assert!(bumped.is_left());
//! assert_eq!(bumped.to_string(), "Left(405)");
//! assert_eq!(bumped.clone().swap(), Right(405));
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Errors
// =============================================================================
pub mod error;

// =============================================================================
// Layer 1: Either
// =============================================================================
pub mod either;

// =============================================================================
// Layer 2: Helpers and syntax
// =============================================================================
pub mod lang;

// Syntax macros (for_both!, try_left!, try_right!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use either::{Either, Side};
pub use error::Error;

#[cfg(feature = "derive")]
pub use macros::IntoEither;

/// Common items for working with `Either`.
pub mod prelude {
    pub use crate::either::{Either, Either::Left, Either::Right, Side};
    pub use crate::error::Error;
    #[cfg(feature = "derive")]
    pub use macros::IntoEither;
    // Note: for_both!, try_left!, try_right! are #[macro_export] so they're at crate root
}
