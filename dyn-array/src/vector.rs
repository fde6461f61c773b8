use crate::Collection;
use alloc::vec::Vec;

impl<T: PartialEq> Collection<T> for Vec<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: PartialEq> Collection<T> for [T] {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        <[T]>::contains(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: PartialEq, const N: usize> Collection<T> for [T; N] {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}
