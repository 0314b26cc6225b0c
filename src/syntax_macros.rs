//! Pattern-matching shorthands for `Either`.
//!
//! - `for_both!`: run the same expression on whichever side is active.
//! - `try_left!` / `try_right!`: the `?` operator for one side of an `Either`.

// =============================================================================
// for_both! - Side-agnostic evaluation
// =============================================================================

/// Evaluate one expression against the value of either side.
///
/// Both arms are type-checked separately, so the expression may use methods
/// that exist on `L` and `R` independently.
///
/// # Example
///
/// ```
/// use tola_either::{Either, for_both};
///
/// let e: Either<String, &str> = Either::Right("abc");
/// assert_eq!(for_both!(e, s => s.len()), 3);
/// ```
#[macro_export]
macro_rules! for_both {
    ($value:expr, $pattern:pat => $result:expr) => {
        match $value {
            $crate::Either::Left($pattern) => $result,
            $crate::Either::Right($pattern) => $result,
        }
    };
}

// =============================================================================
// try_left! / try_right! - Early return on the opposite side
// =============================================================================

/// Unwrap a `Left` value, or return the `Right` value from the enclosing
/// function wrapped with `Into`.
///
/// # Example
///
/// ```
/// use tola_either::{Either, try_left};
///
/// fn twice(e: Either<u32, &'static str>) -> Either<u32, &'static str> {
///     let n = try_left!(e);
///     Either::Left(n * 2)
/// }
///
/// assert_eq!(twice(Either::Left(2)), Either::Left(4));
/// assert_eq!(twice(Either::Right("stop")), Either::Right("stop"));
/// ```
#[macro_export]
macro_rules! try_left {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Either::Left(value) => value,
            $crate::Either::Right(other) => {
                return $crate::Either::Right(::core::convert::From::from(other))
            }
        }
    };
}

/// Mirror of [`try_left!`]: unwrap a `Right`, return early on `Left`.
#[macro_export]
macro_rules! try_right {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Either::Left(other) => {
                return $crate::Either::Left(::core::convert::From::from(other))
            }
            $crate::Either::Right(value) => value,
        }
    };
}
