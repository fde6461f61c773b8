use core::cmp::Ordering;

/// Sorts `v[first..=last]` in place with a recursive quicksort.
///
/// The pivot is the middle element of the partition. `i` moves right past
/// elements ordered before the pivot and `j` moves left past elements ordered
/// after it, swapping whenever both stop, until they cross.
///
/// Swaps move the pivot value around, so its position is tracked rather
/// than cloned.
///
/// # Panics
///
/// Panics on an out of bounds index if `compare` is not a total order.
pub(crate) fn quick_sort<T, F>(v: &mut [T], first: usize, last: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.is_empty() || first >= last {
        return;
    }
    let mut pivot = first + (last - first) / 2;

    // `j` may step one below `first` (and below zero) before the pointers cross.
    let (mut i, mut j) = (first as isize, last as isize);
    while i <= j {
        while compare(&v[i as usize], &v[pivot]) == Ordering::Less {
            i += 1;
        }
        while compare(&v[j as usize], &v[pivot]) == Ordering::Greater {
            j -= 1;
        }
        if i <= j {
            let (a, b) = (i as usize, j as usize);
            v.swap(a, b);
            if pivot == a {
                pivot = b;
            } else if pivot == b {
                pivot = a;
            }
            i += 1;
            j -= 1;
        }
    }

    if (first as isize) < j {
        quick_sort(v, first, j as usize, compare);
    }
    if (last as isize) > i {
        quick_sort(v, i as usize, last, compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord + Clone>(input: &[T]) -> alloc::vec::Vec<T> {
        let mut v = input.to_vec();
        if v.len() > 1 {
            let last = v.len() - 1;
            quick_sort(&mut v, 0, last, &mut T::cmp);
        }
        v
    }

    #[test]
    fn test_small_inputs() {
        assert!(sorted::<u8>(&[]).is_empty());
        assert_eq!(sorted(&[1]), [1]);
        assert_eq!(sorted(&[2, 1]), [1, 2]);
        assert_eq!(sorted(&[4, 2, 1, 3]), [1, 2, 3, 4]);
    }

    #[test]
    fn test_duplicates_and_runs() {
        assert_eq!(sorted(&[3, 3, 3, 3]), [3, 3, 3, 3]);
        assert_eq!(sorted(&[5, 1, 5, 1, 5]), [1, 1, 5, 5, 5]);
        assert_eq!(sorted(&[1, 2, 3, 4, 5, 6]), [1, 2, 3, 4, 5, 6]);
        assert_eq!(sorted(&[6, 5, 4, 3, 2, 1]), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sub_range_only() {
        let mut v = [9, 4, 3, 2, 0];
        quick_sort(&mut v, 1, 3, &mut i32::cmp);
        assert_eq!(v, [9, 2, 3, 4, 0]);
    }
}
