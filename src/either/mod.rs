//! # Layer 1: The Either sum type
//!
//! `Either<L, R>` holds exactly one of two values. `Left` is the
//! alternative branch, `Right` the primary one; the type itself does not
//! care which is which.
//!
//! ```text
//! Either<L, R>
//!   |-- Left(L)    is_left()  == true
//!   `-- Right(R)   is_right() == true
//!
//! bimap(f, g):  Left(l) -> Left(f(l))     Right(r) -> Right(g(r))
//! swap():       Left(v) -> Right(v)       Right(v) -> Left(v)
//! ```
//!
//! Laws:
//! - `e.bimap(id, id) == e`
//! - `e.bimap(f1, g1).bimap(f2, g2) == e.bimap(|x| f2(f1(x)), |y| g2(g1(y)))`
//! - `e.swap().swap() == e`

mod fmt;
mod iter;

use core::hash::{Hash, Hasher};

use crate::error::Error;
use crate::lang;

/// A value that is either a `Left(L)` or a `Right(R)`.
///
/// Equality and ordering are structural: variants are compared first
/// (`Left < Right`), then the carried values. A `Left` never equals a
/// `Right`, whatever they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The alternative (by convention: failure) branch.
    Left(L),
    /// The primary (by convention: success) branch.
    Right(R),
}

/// Payload-free tag of an [`Either`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Tag of [`Either::Left`].
    Left,
    /// Tag of [`Either::Right`].
    Right,
}

impl Side {
    /// The other side.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Side::Left => "Left",
            Side::Right => "Right",
        })
    }
}

// =============================================================================
// Per-side accessors
// =============================================================================

/// Generate the accessor family for one side.
///
/// `$side` is the method stem, `$Variant`/`$Other` the active and opposite
/// variants, `$T`/`$U` their payload types.
macro_rules! impl_side_access {
    ($side:ident, $Variant:ident, $Other:ident, $T:ident, $U:ident) => {
        ::paste::paste! {
            #[doc = concat!("Returns `true` iff this is a `", stringify!($Variant), "`.")]
            #[inline]
            pub const fn [<is_ $side>](&self) -> bool {
                matches!(self, Either::$Variant(_))
            }

            #[doc = concat!("Converts into the `", stringify!($Variant), "` value, discarding the other side.")]
            #[inline]
            pub fn $side(self) -> Option<$T> {
                match self {
                    Either::$Variant(value) => Some(value),
                    Either::$Other(_) => None,
                }
            }

            #[doc = concat!("Borrows the `", stringify!($Variant), "` value, if any.")]
            #[inline]
            pub const fn [<$side _ref>](&self) -> Option<&$T> {
                match self {
                    Either::$Variant(value) => Some(value),
                    Either::$Other(_) => None,
                }
            }

            #[doc = concat!("Returns the `", stringify!($Variant), "` value or `Error::TypeMismatch`.")]
            #[inline]
            pub fn [<try_ $side>](self) -> Result<$T, Error> {
                match self {
                    Either::$Variant(value) => Ok(value),
                    Either::$Other(_) => Err(Error::TypeMismatch {
                        expected: Side::$Variant,
                        found: Side::$Other,
                    }),
                }
            }

            #[doc = concat!("Returns the `", stringify!($Variant), "` value.")]
            ///
            /// # Panics
            ///
            #[doc = concat!("Panics if this is a `", stringify!($Other), "`.")]
            #[inline]
            #[track_caller]
            pub fn [<unwrap_ $side>](self) -> $T {
                match self {
                    Either::$Variant(value) => value,
                    Either::$Other(_) => panic!(concat!(
                        "called `Either::unwrap_", stringify!($side),
                        "()` on a `", stringify!($Other), "` value"
                    )),
                }
            }

            #[doc = concat!("Returns the `", stringify!($Variant), "` value or `default`.")]
            #[inline]
            pub fn [<$side _or>](self, default: $T) -> $T {
                match self {
                    Either::$Variant(value) => value,
                    Either::$Other(_) => default,
                }
            }

            #[doc = concat!("Returns the `", stringify!($Variant), "` value or computes one from the `", stringify!($Other), "` value.")]
            #[inline]
            pub fn [<$side _or_else>]<F>(self, f: F) -> $T
            where
                F: FnOnce($U) -> $T,
            {
                match self {
                    Either::$Variant(value) => value,
                    Either::$Other(other) => f(other),
                }
            }
        }
    };
}

impl<L, R> Either<L, R> {
    impl_side_access!(left, Left, Right, L, R);
    impl_side_access!(right, Right, Left, R, L);

    /// Which variant is active.
    #[inline]
    pub const fn side(&self) -> Side {
        match self {
            Either::Left(_) => Side::Left,
            Either::Right(_) => Side::Right,
        }
    }

    /// Map both sides at once, keeping the tag.
    ///
    /// Only the mapper for the active side runs, exactly once.
    ///
    /// ```
    /// use tola_either::Either;
    ///
    /// let e: Either<i32, &str> = Either::Left(404);
    /// assert_eq!(e.bimap(|code| code + 1, |msg| msg).to_string(), "Left(405)");
    /// ```
    #[inline]
    pub fn bimap<X, Y, F, G>(self, left_mapper: F, right_mapper: G) -> Either<X, Y>
    where
        F: FnOnce(L) -> X,
        G: FnOnce(R) -> Y,
    {
        match self {
            Either::Left(l) => Either::Left(left_mapper(l)),
            Either::Right(r) => Either::Right(right_mapper(r)),
        }
    }

    /// [`bimap`](Self::bimap) with optional mappers.
    ///
    /// Both mappers are required even though only one runs. A missing mapper
    /// fails with `Error::NullArgument` before anything is applied; the left
    /// mapper is checked first.
    pub fn try_bimap<X, Y, F, G>(
        self,
        left_mapper: Option<F>,
        right_mapper: Option<G>,
    ) -> Result<Either<X, Y>, Error>
    where
        F: FnOnce(L) -> X,
        G: FnOnce(R) -> Y,
    {
        let left_mapper = lang::require_some("left_mapper", left_mapper)?;
        let right_mapper = lang::require_some("right_mapper", right_mapper)?;
        Ok(self.bimap(left_mapper, right_mapper))
    }

    /// Map the `Left` value, passing a `Right` through.
    #[inline]
    pub fn map_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        self.bimap(f, |r| r)
    }

    /// Map the `Right` value, passing a `Left` through.
    #[inline]
    pub fn map_right<M, F>(self, f: F) -> Either<L, M>
    where
        F: FnOnce(R) -> M,
    {
        self.bimap(|l| l, f)
    }

    /// Fold both sides into one type.
    #[inline]
    pub fn either<T, F, G>(self, f: F, g: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => g(r),
        }
    }

    /// Exchange the roles: `Left(v)` becomes `Right(v)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Borrow the carried value, keeping the tag.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Mutably borrow the carried value, keeping the tag.
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<T> Either<T, T> {
    /// Extract the value when both sides carry the same type.
    #[inline]
    pub fn into_inner(self) -> T {
        crate::for_both!(self, value => value)
    }
}

// Only the carried value feeds the hasher; equal values in the same variant
// hash the same, as `Eq` requires.
impl<L: Hash, R: Hash> Hash for Either<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::for_both!(self, value => value.hash(state))
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_queries() {
        let l: Either<i32, i32> = Either::Left(1);
        let r: Either<i32, i32> = Either::Right(1);
        assert!(l.is_left() && !l.is_right());
        assert!(r.is_right() && !r.is_left());
        assert_eq!(l.side(), Side::Left);
        assert_eq!(r.side().opposite(), Side::Left);
    }

    #[test]
    fn test_accessors() {
        let l: Either<&str, u8> = Either::Left("a");
        assert_eq!(l.left_ref(), Some(&"a"));
        assert_eq!(l.right_ref(), None);
        assert_eq!(l.left(), Some("a"));
        assert_eq!(l.right(), None);
        assert_eq!(l.right_or(7), 7);
        assert_eq!(l.right_or_else(|s| s.len() as u8), 1);
        assert_eq!(l.left_or("b"), "a");
    }

    #[test]
    fn test_try_accessor_mismatch() {
        let r: Either<i32, &str> = Either::Right("ok");
        assert_eq!(
            r.try_left(),
            Err(Error::TypeMismatch { expected: Side::Left, found: Side::Right })
        );
        assert_eq!(r.try_right(), Ok("ok"));
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_right()` on a `Left` value")]
    fn test_unwrap_wrong_side_panics() {
        let l: Either<i32, i32> = Either::Left(3);
        l.unwrap_right();
    }

    #[test]
    fn test_as_mut_keeps_tag() {
        let mut e: Either<i32, i32> = Either::Right(1);
        if let Either::Right(r) = e.as_mut() {
            *r += 1;
        }
        assert_eq!(e, Either::Right(2));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Either::<u8, u8>::Left(4).into_inner(), 4);
        assert_eq!(Either::<u8, u8>::Right(5).into_inner(), 5);
    }

    #[test]
    fn test_ordering_left_before_right() {
        let l: Either<i32, i32> = Either::Left(100);
        let r: Either<i32, i32> = Either::Right(0);
        assert!(l < r);
        assert!(Either::<i32, i32>::Left(1) < Either::Left(2));
    }
}
