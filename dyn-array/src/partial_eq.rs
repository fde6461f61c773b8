use crate::*;
use alloc::vec::Vec;

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
        }
    }
}

__impl_slice_eq1! { [] DynArray<T>, DynArray<U> }
__impl_slice_eq1! { [] DynArray<T>, Vec<U> }
__impl_slice_eq1! { [] Vec<T>, DynArray<U> }
__impl_slice_eq1! { [] DynArray<T>, &[U] }
__impl_slice_eq1! { [] DynArray<T>, &mut [U] }
__impl_slice_eq1! { [] &[T], DynArray<U> }
__impl_slice_eq1! { [] &mut [T], DynArray<U> }
__impl_slice_eq1! { [] DynArray<T>, [U] }
__impl_slice_eq1! { [] [T], DynArray<U> }

__impl_slice_eq1! { [const N: usize] DynArray<T>, [U; N] }
__impl_slice_eq1! { [const N: usize] DynArray<T>, &[U; N] }

impl<T: Eq> Eq for DynArray<T> {}
