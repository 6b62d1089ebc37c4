//! In-place comparison sorting
//!
//! A single-pivot quicksort shared by the canonicalizer (character level) and
//! the classifier (dictionary level). The first element of each sub-range is
//! the pivot; two pointers scan inward and swap out-of-place pairs.

/// Sort a slice in place under the ordering induced by `less`.
///
/// `less(a, b)` must be a strict weak ordering. Equal elements may end up in
/// either relative order.
///
/// Average cost is O(n log n) comparisons with O(n²) on adversarial pivot
/// choices; stack depth stays logarithmic regardless of the split.
///
/// # Examples
/// ```
/// use anagram_finder::sort::quicksort_by;
///
/// let mut items = vec![3, 1, 4, 1, 5];
/// quicksort_by(&mut items, &|a, b| a < b);
/// assert_eq!(items, [1, 1, 3, 4, 5]);
/// ```
pub fn quicksort_by<T, F>(mut items: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    // Recurse into the smaller half, iterate on the larger.
    while items.len() > 1 {
        let pivot = partition_by(items, less);
        let (left, right) = { items }.split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort_by(left, less);
            items = right;
        } else {
            quicksort_by(right, less);
            items = left;
        }
    }
}

/// Partition `items` around its first element.
///
/// Both pointers scan toward each other: `lo` runs over elements that belong
/// left of the pivot, `hi` over elements that belong right, and stragglers
/// are swapped pairwise. On return the pivot occupies the returned index,
/// every element before it satisfies `less(element, pivot)`, and no element
/// after it does.
///
/// `items` must hold at least two elements.
fn partition_by<T, F>(items: &mut [T], less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let last = items.len() - 1;
    let mut lo = 1;
    let mut hi = last;
    loop {
        while lo <= hi && less(&items[lo], &items[0]) {
            lo += 1;
        }
        while hi >= lo && !less(&items[hi], &items[0]) {
            hi -= 1;
        }
        if lo >= hi {
            break;
        }
        items.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
    items.swap(0, lo - 1);
    lo - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn assert_sorted_permutation(original: &[u32], sorted: &[u32]) {
        let mut expected = original.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn random_arrays_sort_and_conserve_elements() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let len = rng.random_range(0..64);
            let original: Vec<u32> = (0..len).map(|_| rng.random_range(0..16)).collect();

            let mut items = original.clone();
            quicksort_by(&mut items, &|a, b| a < b);

            assert_sorted_permutation(&original, &items);
        }
    }

    #[test]
    fn random_arrays_with_distinct_values() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let mut original: Vec<u32> = (0..len).collect();
            original.shuffle(&mut rng);

            let mut items = original.clone();
            quicksort_by(&mut items, &|a, b| a < b);

            assert_sorted_permutation(&original, &items);
        }
    }

    #[test]
    fn already_sorted_input() {
        let original: Vec<u32> = (0..100).collect();
        let mut items = original.clone();
        quicksort_by(&mut items, &|a, b| a < b);
        assert_eq!(items, original);
    }

    #[test]
    fn reverse_sorted_input() {
        let mut items: Vec<u32> = (0..100).rev().collect();
        quicksort_by(&mut items, &|a, b| a < b);
        let expected: Vec<u32> = (0..100).collect();
        assert_eq!(items, expected);
    }

    #[test]
    fn all_equal_elements() {
        let mut items = vec![7_u32; 32];
        quicksort_by(&mut items, &|a, b| a < b);
        assert_eq!(items, vec![7_u32; 32]);
    }

    #[test]
    fn empty_slice() {
        let mut items: Vec<u32> = vec![];
        quicksort_by(&mut items, &|a, b| a < b);
        assert!(items.is_empty());
    }

    #[test]
    fn single_element() {
        let mut items = vec![42_u32];
        quicksort_by(&mut items, &|a, b| a < b);
        assert_eq!(items, [42]);
    }

    #[test]
    fn two_elements_out_of_order() {
        let mut items = vec![2_u32, 1];
        quicksort_by(&mut items, &|a, b| a < b);
        assert_eq!(items, [1, 2]);
    }

    #[test]
    fn sorts_strings_by_byte_order() {
        let mut items = vec!["eilnst", "aaabnn", "eilnsst", "aaabnn"];
        quicksort_by(&mut items, &|a, b| a < b);
        assert_eq!(items, ["aaabnn", "aaabnn", "eilnsst", "eilnst"]);
    }

    #[test]
    fn partition_places_pivot_at_returned_index() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let len = rng.random_range(2..48);
            let mut items: Vec<u32> = (0..len).map(|_| rng.random_range(0..8)).collect();
            let pivot_value = items[0];

            let p = partition_by(&mut items, &|a, b| a < b);

            assert_eq!(items[p], pivot_value);
            assert!(items[..p].iter().all(|&v| v < pivot_value));
            assert!(items[p + 1..].iter().all(|&v| v >= pivot_value));
        }
    }

    #[test]
    fn partition_conserves_elements() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(2..48);
            let original: Vec<u32> = (0..len).map(|_| rng.random_range(0..8)).collect();

            let mut items = original.clone();
            partition_by(&mut items, &|a, b| a < b);

            let mut lhs = original.clone();
            let mut rhs = items.clone();
            lhs.sort_unstable();
            rhs.sort_unstable();
            assert_eq!(lhs, rhs);
        }
    }
}
