//! Text rendering: `Left(<value>)` / `Right(<value>)`.

use core::fmt::{self, Display, Formatter};

use super::Either;

impl<L: Display, R: Display> Display for Either<L, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({l})"),
            Either::Right(r) => write!(f, "Right({r})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Either::<&str, i32>::Left("x").to_string(), "Left(x)");
        assert_eq!(Either::<&str, i32>::Right(5).to_string(), "Right(5)");
    }

    #[test]
    fn test_display_nested() {
        let e: Either<Either<u8, u8>, u8> = Either::Left(Either::Right(1));
        assert_eq!(e.to_string(), "Left(Right(1))");
    }
}
