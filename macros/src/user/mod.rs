//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(IntoEither)]` | on enum | Convert to and from `Either` |

mod into_either;

pub use into_either::expand_derive_into_either;
