//! # Layer 0: Errors
//!
//! Every fallible operation in the crate reports through [`Error`]:
//! - `NullArgument`: a required argument was `None` (`try_bimap`, `require_some`).
//! - `Precondition`: an asserted condition was false (`require`, `require_with`).
//! - `TypeMismatch`: a side accessor was used on the other variant (`try_left`, `try_right`).

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::either::Side;

/// Failure raised by the checked operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was absent.
    NullArgument {
        /// Parameter name, e.g. `"left_mapper"`.
        name: &'static str,
    },
    /// An asserted condition did not hold.
    #[cfg(feature = "alloc")]
    Precondition(String),
    /// A side accessor was called on the opposite variant.
    TypeMismatch {
        /// Side the accessor asked for.
        expected: Side,
        /// Side the value actually holds.
        found: Side,
    },
}

impl Error {
    /// Parameter name for `NullArgument`, `None` otherwise.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Error::NullArgument { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NullArgument { name } => write!(f, "{name} is null"),
            #[cfg(feature = "alloc")]
            Error::Precondition(message) => f.write_str(message),
            Error::TypeMismatch { expected, found } => {
                write!(f, "expected a {expected} value, found {found}")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_argument_message() {
        let err = Error::NullArgument { name: "left_mapper" };
        assert_eq!(err.to_string(), "left_mapper is null");
        assert_eq!(err.argument(), Some("left_mapper"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch { expected: Side::Left, found: Side::Right };
        assert_eq!(err.to_string(), "expected a Left value, found Right");
        assert_eq!(err.argument(), None);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_precondition_message() {
        let err = Error::Precondition("index out of range".into());
        assert_eq!(err.to_string(), "index out of range");
    }
}
