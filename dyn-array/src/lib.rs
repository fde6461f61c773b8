#![no_std]
//! A growable array that manages its own capacity.
//!
//! [`DynArray`] keeps its elements in an owned block of slots and grows that
//! block by `capacity + len / 2` when it runs short. Insertion and removal
//! shift the tail, and [`DynArray::sort`] is an in-place quicksort.
//!
//! ```
//! use dyn_array::DynArray;
//!
//! let mut names = DynArray::new();
//! for name in ["Michael", "Mary", "Joan", "Bill", "Jack"] {
//!     names.push(name);
//! }
//! names.sort();
//! assert_eq!(names.to_string(), "[Bill, Jack, Joan, Mary, Michael]");
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod interface;
mod partial_eq;
mod sort;
mod vector;
#[cfg(feature = "std")]
mod write;

pub use error::{ArrayError, Result};
pub use interface::Collection;

use alloc::{boxed::Box, vec::Vec};
use core::{
    cmp::Ordering,
    fmt,
    mem::{replace, MaybeUninit},
    ops::{Deref, DerefMut},
    ptr,
};
use log::*;

/// Capacity of an array created by [`DynArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// SAFETY: Caller must ensure that `dest` is initialized.
unsafe fn take<T>(dest: &mut MaybeUninit<T>) -> T {
    replace(dest, MaybeUninit::uninit()).assume_init()
}

fn empty_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    let mut data = Vec::with_capacity(capacity);
    data.resize_with(capacity, MaybeUninit::uninit);
    data.into_boxed_slice()
}

/// A contiguous growable array.
///
/// Slots `[0, len)` always hold an element. Every slot from `len` up to the
/// capacity is empty.
///
/// Not synchronized: mutation needs `&mut self`, so sharing one array
/// between threads requires external locking.
pub struct DynArray<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> DynArray<T> {
    /// Creates an empty array with a capacity of [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr: DynArray<u8> = DynArray::new();
    /// assert_eq!(arr.capacity(), 10);
    /// assert_eq!(arr.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            len: 0,
            data: empty_slots(DEFAULT_CAPACITY),
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::{ArrayError, DynArray};
    ///
    /// let arr: DynArray<u8> = DynArray::with_capacity(15).unwrap();
    /// assert_eq!(arr.capacity(), 15);
    ///
    /// let err = DynArray::<u8>::with_capacity(0).unwrap_err();
    /// assert_eq!(err, ArrayError::InvalidArgument { capacity: 0 });
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            trace!("rejected capacity {capacity}");
            return Err(ArrayError::InvalidArgument { capacity });
        }
        Ok(Self {
            len: 0,
            data: empty_slots(capacity),
        })
    }

    /// Returns the number of slots in the backing storage, empty ones included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements currently in the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr = DynArray::from([1, 2]);
    /// assert_eq!(arr.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Fires one slot before the storage is actually full.
    #[inline]
    fn needs_growth(&self) -> bool {
        self.len + 1 >= self.capacity()
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let mut new_capacity = old_capacity + self.len / 2;
        if new_capacity <= self.len {
            new_capacity = self.len + 1;
        }
        debug!(
            "growing array from {old_capacity} to {new_capacity} slots, len {}",
            self.len
        );
        self.reallocate(new_capacity);
    }

    /// Moves every element into a fresh block of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut data: Box<[MaybeUninit<T>]> = empty_slots(capacity);
        // SAFETY: both blocks hold at least `len` slots and never overlap. The
        // old block is dropped as `MaybeUninit`, so the moved elements are not
        // dropped twice.
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len);
        }
        self.data = data;
    }

    /// Appends an element to the back of the array, growing it first if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// for i in 0..9 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(arr.capacity(), 10);
    ///
    /// arr.push(9);
    /// assert_eq!(arr.capacity(), 14);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.needs_growth() {
            self.grow();
        }
        self.data[self.len] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len`. The array is
    /// left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list = DynArray::from([3]);
    /// list.insert(0, 1).unwrap();
    /// assert_eq!(list, [1, 3]);
    /// list.insert(1, 2).unwrap();
    /// assert_eq!(list, [1, 2, 3]);
    /// assert!(list.insert(4, 5).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if self.needs_growth() {
            self.grow();
        }
        for i in (index..self.len).rev() {
            self.data[i + 1] = replace(&mut self.data[i], MaybeUninit::uninit());
        }
        self.data[index] = MaybeUninit::new(value);
        self.len += 1;
        Ok(())
    }

    /// Returns the element at `index`.
    ///
    /// `index == len` is accepted and reads the first empty slot, which
    /// yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len`, or if
    /// `index == len` and the array has no empty slot left.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr = DynArray::from(["a", "b"]);
    /// assert_eq!(arr.get(1), Ok(Some(&"b")));
    /// assert_eq!(arr.get(2), Ok(None));
    /// assert!(arr.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        if index > self.len || index >= self.capacity() {
            return Err(self.out_of_range(index));
        }
        Ok(self.as_slice().get(index))
    }

    /// Mutable counterpart of [`get`](Self::get), with the same bounds.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        if index > self.len || index >= self.capacity() {
            return Err(self.out_of_range(index));
        }
        Ok(self.as_mut_slice().get_mut(index))
    }

    fn out_of_range(&self, index: usize) -> ArrayError {
        trace!("rejected index {index}, len {}", self.len);
        ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Removes the element at `index < len`, shifting the tail left.
    fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        // SAFETY: `index < len`, so the slot is initialized.
        let value = unsafe { take(&mut self.data[index]) };
        self.len -= 1;
        for i in index..self.len {
            self.data[i] = replace(&mut self.data[i + 1], MaybeUninit::uninit());
        }
        value
    }

    /// Shrinks the backing storage to exactly `len` slots.
    ///
    /// Does nothing if there are no empty slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push(1);
    /// arr.trim_to_size();
    /// assert_eq!(arr.capacity(), 1);
    /// assert_eq!(arr, [1]);
    /// ```
    pub fn trim_to_size(&mut self) {
        if self.len < self.capacity() {
            debug!("trimming array from {} to {} slots", self.capacity(), self.len);
            self.reallocate(self.len);
        }
    }

    /// Clears the array, dropping all values. The capacity is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list = DynArray::from([1, 2, 3]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        // `len` goes first so a panicking destructor can't cause a double drop.
        self.len = 0;
        // SAFETY: the slice held only initialized elements, and they are now
        // past `len`.
        unsafe {
            ptr::drop_in_place(elems);
        }
    }

    /// Sorts the array in place by natural order.
    ///
    /// This sort is not stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::from([4, 2, 1, 3]);
    /// arr.sort();
    /// assert_eq!(arr, [1, 2, 3, 4]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sorts the array in place with a comparator function.
    ///
    /// # Panics
    ///
    /// May panic if `compare` does not implement a total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::from([4, 2, 1, 3]);
    /// arr.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(arr, [4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len > 1 {
            let last = self.len - 1;
            sort::quick_sort(self.as_mut_slice(), 0, last, &mut compare);
        }
    }

    /// Extracts a slice containing the entire array.
    ///
    /// Equivalent to `&s[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.as_ref()
    }

    /// Extracts a mutable slice of the entire array.
    ///
    /// Equivalent to `&mut s[..]`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Returns the index of the first element equal to `value`.
    ///
    /// The scan never looks past `len`, where the empty slots start.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let arr = DynArray::from(["Michael", "Mary", "Joan"]);
    /// assert_eq!(arr.index_of(&"Joan"), Some(2));
    /// assert_eq!(arr.index_of(&"Bill"), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|elem| elem == value)
    }

    /// Returns `true` if the array holds an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`, shifting the tail left.
    ///
    /// Returns `false` and leaves the array untouched if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// assert!(arr.remove(&2));
    /// assert_eq!(arr, [1, 3]);
    /// assert!(!arr.remove(&7));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element that `other` contains.
    ///
    /// Returns `true` if at least one element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut arr = DynArray::from(["Mary", "Jack", "Joan", "Bill", "Jack"]);
    /// assert!(arr.remove_all(&["Jack", "Bill"]));
    /// assert_eq!(arr, ["Mary", "Joan"]);
    /// assert!(!arr.remove_all(&vec!["213213"]));
    /// ```
    pub fn remove_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        let mut removed = 0;
        let mut i = 0;
        while i < self.len {
            if other.contains(&self[i]) {
                // The next element shifts into `i`, so it is checked next.
                self.remove_at(i);
                removed += 1;
            } else {
                i += 1;
            }
        }
        removed > 0
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        // SAFETY: `self.data[..self.len]` is initialized.
        unsafe { &*(&self.data[..self.len] as *const [MaybeUninit<T>] as *const [T]) }
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        // SAFETY: `self.data[..self.len]` is initialized.
        unsafe { &mut *(&mut self.data[..self.len] as *mut [MaybeUninit<T>] as *mut [T]) }
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut()
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Clones the elements into a block of the same capacity.
    fn clone(&self) -> Self {
        let mut array = Self {
            len: 0,
            data: empty_slots(self.capacity()),
        };
        for val in self.iter() {
            array.data[array.len] = MaybeUninit::new(val.clone());
            array.len += 1;
        }
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{val}")?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, const S: usize> From<[T; S]> for DynArray<T> {
    fn from(values: [T; S]) -> Self {
        values.into_iter().collect()
    }
}
