//! Sorting kernels used by every arrangement builder.
//!
//! Small, hand-rolled kernels rather than a general-purpose sorting crate:
//! insertion sort for tiny runs, a stable comparison sort for mid-sized
//! runs, and counting/radix/bit-set kernels for the bounded-integer-key
//! cases that dominate this crate's inner loops.

use alloc::vec;
use alloc::vec::Vec;

use fixedbitset::FixedBitSet;

/// Ascending or descending order for the counting/insertion/radix kernels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first.
    NonDecreasing,
    /// Largest key first.
    NonIncreasing,
}

const INSERTION_SORT_THRESHOLD: usize = 14;
const COMPARISON_SORT_THRESHOLD: usize = 30;

/// Sorts `items` by the key `key_of` extracts, choosing a kernel by size and
/// key range:
///
/// - `len <= 14` → insertion sort
/// - `len <= 30` → comparison sort
/// - otherwise, if `max_key <= key_range_factor * len` → counting sort
/// - otherwise → comparison sort
///
/// All kernels are stable: equal keys preserve input order.
pub fn sort_by_key<T: Copy, F>(
    items: &mut [T],
    dir: SortDirection,
    max_key: usize,
    key_range_factor: usize,
    mut key_of: F,
) where
    F: FnMut(T) -> usize,
{
    let len = items.len();
    if len <= INSERTION_SORT_THRESHOLD {
        insertion_sort_by_key(items, dir, &mut key_of);
    } else if len <= COMPARISON_SORT_THRESHOLD || max_key > key_range_factor * len {
        comparison_sort_by_key(items, dir, &mut key_of);
    } else {
        counting_sort_by_key(items, dir, max_key, &mut key_of);
    }
}

/// A stable insertion sort, used directly for short runs.
pub fn insertion_sort_by_key<T: Copy, F: FnMut(T) -> usize>(
    items: &mut [T],
    dir: SortDirection,
    key_of: &mut F,
) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && should_swap(key_of(items[j - 1]), key_of(items[j]), dir) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn should_swap(prev_key: usize, cur_key: usize, dir: SortDirection) -> bool {
    match dir {
        SortDirection::NonDecreasing => prev_key > cur_key,
        SortDirection::NonIncreasing => prev_key < cur_key,
    }
}

/// A stable comparison sort (`[T]::sort_by_key`, which is a stable mergesort)
/// for mid-sized runs or when the key range is too sparse for counting sort.
pub fn comparison_sort_by_key<T: Copy, F: FnMut(T) -> usize>(
    items: &mut [T],
    dir: SortDirection,
    key_of: &mut F,
) {
    match dir {
        SortDirection::NonDecreasing => items.sort_by_key(|&it| key_of(it)),
        SortDirection::NonIncreasing => {
            // Negate via reverse index rather than negating the key (keys
            // are usize): sort ascending on `(max_key - key)` keeps the sort
            // stable with respect to the *original* input order for equal
            // keys, matching the non-decreasing case.
            items.sort_by_key(|&it| core::cmp::Reverse(key_of(it)));
        }
    }
}

/// A stable counting sort: takes a key-extractor, the maximum key value, and
/// a direction. `O(n + max_key)`. Ordering on equal keys preserves input
/// order.
pub fn counting_sort_by_key<T: Copy, F: FnMut(T) -> usize>(
    items: &mut [T],
    dir: SortDirection,
    max_key: usize,
    key_of: &mut F,
) {
    let mut counts = vec![0usize; max_key + 2];
    let keys: Vec<usize> = items.iter().map(|&it| key_of(it)).collect();
    for &k in &keys {
        counts[k + 1] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }
    let mut output = items.to_vec();
    match dir {
        SortDirection::NonDecreasing => {
            for (idx, &k) in keys.iter().enumerate() {
                output[counts[k]] = items[idx];
                counts[k] += 1;
            }
        }
        SortDirection::NonIncreasing => {
            // Walk input back-to-front so that, after placing each key into
            // its descending-order bucket from the back, equal keys still
            // come out in original relative order.
            let mut counts_end = vec![0usize; max_key + 1];
            for &k in &keys {
                counts_end[k] += 1;
            }
            let mut offsets = vec![0usize; max_key + 1];
            let mut running = 0usize;
            for k in (0..=max_key).rev() {
                offsets[k] = running;
                running += counts_end[k];
            }
            let mut cursor = offsets.clone();
            for (idx, &k) in keys.iter().enumerate() {
                output[cursor[k]] = items[idx];
                cursor[k] += 1;
            }
        }
    }
    items.copy_from_slice(&output);
}

/// A radix sort over tuples `(key, payload)` with `key` bounded by
/// `max_key`, stable, used where one counting pass over a composite key
/// would need too large a range but two passes over its parts do not.
pub fn radix_sort_pairs(items: &mut [(usize, usize)], max_primary: usize, max_secondary: usize) {
    // Least-significant-digit radix sort: stable counting sort on the
    // secondary key first, then on the primary key.
    counting_sort_by_key(
        items,
        SortDirection::NonDecreasing,
        max_secondary,
        &mut |it: (usize, usize)| it.1,
    );
    counting_sort_by_key(
        items,
        SortDirection::NonDecreasing,
        max_primary,
        &mut |it: (usize, usize)| it.0,
    );
}

/// Sorts a small dense set of integers in `0..universe` using a bitset,
/// discarding duplicates. `O(universe + n)`.
#[must_use]
pub fn bit_sort_dedup(values: &[usize], universe: usize) -> Vec<usize> {
    let mut present = FixedBitSet::with_capacity(universe);
    for &v in values {
        present.insert(v);
    }
    present.ones().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_sort_non_decreasing_is_stable() {
        let mut items: Vec<(usize, usize)> = vec![(3, 0), (1, 1), (3, 2), (1, 3), (2, 4)];
        counting_sort_by_key(&mut items, SortDirection::NonDecreasing, 3, &mut |it| it.0);
        assert_eq!(
            items,
            vec![(1, 1), (1, 3), (2, 4), (3, 0), (3, 2)]
        );
    }

    #[test]
    fn counting_sort_non_increasing_is_stable() {
        let mut items: Vec<(usize, usize)> = vec![(3, 0), (1, 1), (3, 2), (1, 3), (2, 4)];
        counting_sort_by_key(&mut items, SortDirection::NonIncreasing, 3, &mut |it| it.0);
        assert_eq!(
            items,
            vec![(3, 0), (3, 2), (2, 4), (1, 1), (1, 3)]
        );
    }

    #[test]
    fn sort_by_key_dispatch_matches_comparison_sort_for_small_inputs() {
        let mut a: Vec<usize> = vec![5, 3, 1, 4, 2];
        let mut b = a.clone();
        sort_by_key(&mut a, SortDirection::NonDecreasing, 5, 1, |x| x);
        comparison_sort_by_key(&mut b, SortDirection::NonDecreasing, &mut |x| x);
        assert_eq!(a, b);
        assert_eq!(a, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn bit_sort_dedup_sorts_and_dedups() {
        let values = vec![5, 2, 5, 0, 3, 2];
        assert_eq!(bit_sort_dedup(&values, 6), vec![0, 2, 3, 5]);
    }
}
