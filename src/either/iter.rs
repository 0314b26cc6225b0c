//! `Either` of two iterators is an iterator over their shared `Item`.

use super::Either;

impl<L, R> Iterator for Either<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        crate::for_both!(self, inner => inner.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        crate::for_both!(self, inner => inner.size_hint())
    }

    fn fold<Acc, G>(self, init: Acc, g: G) -> Acc
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        crate::for_both!(self, inner => inner.fold(init, g))
    }

    #[inline]
    fn count(self) -> usize {
        crate::for_both!(self, inner => inner.count())
    }
}

impl<L, R> DoubleEndedIterator for Either<L, R>
where
    L: DoubleEndedIterator,
    R: DoubleEndedIterator<Item = L::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        crate::for_both!(self, inner => inner.next_back())
    }
}

impl<L, R> ExactSizeIterator for Either<L, R>
where
    L: ExactSizeIterator,
    R: ExactSizeIterator<Item = L::Item>,
{
}

impl<L, R> core::iter::FusedIterator for Either<L, R>
where
    L: core::iter::FusedIterator,
    R: core::iter::FusedIterator<Item = L::Item>,
{
}
