use crate::*;

/// A collection that can answer membership queries.
///
/// This is what [`DynArray::remove_all`] consults to decide which of its
/// elements to drop, so any container implementing it can be passed there.
///
/// # Examples
///
/// ```
/// use dyn_array::*;
///
/// let arr = DynArray::from(["foo", "bar"]);
/// assert!(Collection::contains(&arr, &"bar"));
/// assert!(!Collection::contains(&vec!["baz"], &"bar"));
/// ```
pub trait Collection<T> {
    /// Returns `true` if the collection holds an element equal to `value`.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: PartialEq> Collection<T> for DynArray<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        DynArray::contains(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        DynArray::len(self)
    }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for &C {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        C::contains(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        C::len(self)
    }
}
