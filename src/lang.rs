//! # Layer 2: Language helpers
//!
//! Small free functions used around the sum type:
//! - `require` / `require_with`: runtime precondition checks (`alloc`).
//! - `require_some`: presence check for optional arguments.
//! - `with`: fluent application.
//! - `print` / `println`: formatted stdout output (`std`).

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::error::Error;

/// Fail with `Error::Precondition(message)` if `condition` is false.
///
/// ```
/// use tola_either::lang::require;
///
/// assert!(require(1 + 1 == 2, "math works").is_ok());
/// assert_eq!(require(false, "nope").unwrap_err().to_string(), "nope");
/// ```
#[cfg(feature = "alloc")]
#[inline]
pub fn require(condition: bool, message: impl Into<String>) -> Result<(), Error> {
    if condition {
        Ok(())
    } else {
        Err(Error::Precondition(message.into()))
    }
}

/// Like [`require`], but the message is only built when the check fails.
#[cfg(feature = "alloc")]
#[inline]
pub fn require_with<F, M>(condition: bool, message: F) -> Result<(), Error>
where
    F: FnOnce() -> M,
    M: Into<String>,
{
    if condition {
        Ok(())
    } else {
        Err(Error::Precondition(message().into()))
    }
}

/// Unwrap a required argument or fail with `Error::NullArgument { name }`.
#[inline]
pub fn require_some<T>(name: &'static str, value: Option<T>) -> Result<T, Error> {
    value.ok_or(Error::NullArgument { name })
}

/// Apply `f` to `value`. Handy for building a value in expression position.
///
/// ```
/// use tola_either::lang::with;
///
/// let v = with(Vec::new(), |mut v| { v.push(1); v });
/// assert_eq!(v, [1]);
/// ```
#[inline]
pub fn with<T, U, F>(value: T, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    f(value)
}

/// Write formatted text to stdout without a newline.
///
/// Use with `format_args!`: `print(format_args!("{} items", n))`.
#[cfg(feature = "std")]
pub fn print(args: core::fmt::Arguments<'_>) {
    std::print!("{args}");
}

/// Write formatted text to stdout followed by a newline.
#[cfg(feature = "std")]
pub fn println(args: core::fmt::Arguments<'_>) {
    std::println!("{args}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_some() {
        assert_eq!(require_some("x", Some(3)), Ok(3));
        assert_eq!(
            require_some::<u8>("x", None),
            Err(Error::NullArgument { name: "x" })
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_require_with_is_lazy() {
        let mut built = false;
        assert!(require_with(true, || { built = true; "unused" }).is_ok());
        assert!(!built);

        let err = require_with(false, || alloc::format!("{} < {}", 3, 2)).unwrap_err();
        assert_eq!(err, Error::Precondition("3 < 2".into()));
    }

    #[test]
    fn test_with_forwards() {
        assert_eq!(with(20, |n| n + 1), 21);
    }
}
