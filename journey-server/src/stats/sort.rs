//! Comparator-driven quicksort.
//!
//! Used to post-process fare and search results with caller-chosen sort
//! keys. Quicksort is not stable: items the comparator considers equal may
//! come out in either order. Callers that need reproducible output add a
//! final tie-breaking key.

use std::cmp::Ordering;

/// A boxed comparator over `T`.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Combine comparators into one: the first is primary, each subsequent one
/// breaks ties left by those before it.
pub fn chain<T>(comparators: Vec<Comparator<T>>) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| {
        for cmp in &comparators {
            let ord = cmp(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Slices at or below this length are insertion-sorted.
const INSERTION_THRESHOLD: usize = 8;

/// Sort a slice with the given comparator.
///
/// Median-of-three pivot selection, Hoare partitioning, and recursion into
/// the smaller side only (the larger side is handled by the loop), so the
/// stack depth is O(log n) even on adversarial input.
pub fn quicksort<T, F>(items: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_range(items, &cmp);
}

fn sort_range<T, F>(mut items: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while items.len() > INSERTION_THRESHOLD {
        let pivot = partition(items, cmp);
        let (left, right) = items.split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() <= right.len() {
            sort_range(left, cmp);
            items = right;
        } else {
            sort_range(right, cmp);
            items = left;
        }
    }
    insertion_sort(items, cmp);
}

/// Partition around a median-of-three pivot; returns the pivot's final
/// index. Elements left of it compare `<=` pivot, elements right `>=`.
fn partition<T, F>(items: &mut [T], cmp: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    let mid = len / 2;

    // Order first, middle and last, then use the median as the pivot
    if cmp(&items[mid], &items[0]) == Ordering::Less {
        items.swap(mid, 0);
    }
    if cmp(&items[len - 1], &items[0]) == Ordering::Less {
        items.swap(len - 1, 0);
    }
    if cmp(&items[len - 1], &items[mid]) == Ordering::Less {
        items.swap(len - 1, mid);
    }
    items.swap(0, mid);

    // Hoare scan with the pivot parked at index 0; the j scan cannot
    // underflow because it stops on the pivot itself.
    let mut i = 0;
    let mut j = len;
    loop {
        i += 1;
        while i < len && cmp(&items[i], &items[0]) == Ordering::Less {
            i += 1;
        }
        j -= 1;
        while cmp(&items[j], &items[0]) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            break;
        }
        items.swap(i, j);
    }

    items.swap(0, j);
    j
}

fn insertion_sort<T, F>(items: &mut [T], cmp: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Quicksort agrees with the standard library sort.
        #[test]
        fn agrees_with_std_sort(mut items in proptest::collection::vec(any::<i32>(), 0..200)) {
            let mut expected = items.clone();
            expected.sort();
            quicksort(&mut items, |a, b| a.cmp(b));
            prop_assert_eq!(items, expected);
        }

        /// Output is a permutation of the input and is ordered.
        #[test]
        fn sorted_permutation(items in proptest::collection::vec(0u8..10, 0..100)) {
            let mut sorted = items.clone();
            quicksort(&mut sorted, |a, b| a.cmp(b));

            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

            let mut a = items;
            let mut b = sorted;
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }
    }
}
