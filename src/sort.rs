//! In-place quicksort.
//!
//! The routine works on any mutable slice, independently of [`BigArrayList`](crate::BigArrayList).
//! To sort the first `size` slots of a buffer, pass `&mut buffer[..size]`.
//!
//! The sort is not stable, and does not allocate.
use core::{
	cmp::Ordering,
	mem
};
use crate::comparator::{
	Comparator,
	Natural
};

/// Sorts the slice in place, in ascending order under `comparator`.
///
/// Average time is O(n log n), worst case O(n²) (e.g. on already sorted input).
/// Stack usage is bounded by O(log n).
///
/// # Example
///
/// ```
/// # use big_array_list::sort::quicksort;
/// let mut v = [3000, 1000, 2000];
/// quicksort(&mut v, |a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(v, [3000, 2000, 1000]);
/// ```
pub fn quicksort<T, C: Comparator<T>>(v: &mut [T], mut comparator: C) {
	tracing::trace!(len = v.len(), "quicksort");
	sort_range(v, &mut comparator)
}

/// Sorts the slice in place according to the natural ordering of its elements.
#[inline]
pub fn quicksort_natural<T: Ord>(v: &mut [T]) {
	quicksort(v, Natural)
}

fn sort_range<T, C: Comparator<T>>(mut v: &mut [T], comparator: &mut C) {
	// Recurse into the smaller side and loop on the larger one.
	while v.len() > 1 {
		let pivot = partition(v, comparator);
		let (left, right) = mem::take(&mut v).split_at_mut(pivot);
		let right = &mut right[1..];

		if left.len() < right.len() {
			sort_range(left, comparator);
			v = right;
		} else {
			sort_range(right, comparator);
			v = left;
		}
	}
}

/// Lomuto partition around the last element.
///
/// Returns the final index of the pivot: every element before it compares
/// less than or equal to it, every element after it compares greater.
///
/// `v` must not be empty.
fn partition<T, C: Comparator<T>>(v: &mut [T], comparator: &mut C) -> usize {
	let high = v.len() - 1;
	let mut store = 0;

	for j in 0..high {
		if comparator.compare(&v[j], &v[high]) != Ordering::Greater {
			v.swap(store, j);
			store += 1;
		}
	}

	v.swap(store, high);
	store
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::comparator::{
		by_key,
		reversed
	};

	fn is_sorted_by<T>(v: &[T], mut f: impl FnMut(&T, &T) -> Ordering) -> bool {
		v.windows(2).all(|w| f(&w[0], &w[1]) != Ordering::Greater)
	}

	#[test]
	fn empty() {
		let mut v: [i32; 0] = [];
		quicksort_natural(&mut v);
		assert_eq!(v, [] as [i32; 0]);
	}

	#[test]
	fn single_element() {
		let mut v = [1];
		quicksort_natural(&mut v);
		assert_eq!(v, [1]);
	}

	#[test]
	fn natural_order() {
		let mut v = [315, 12100, 2];
		quicksort_natural(&mut v);
		assert_eq!(v, [2, 315, 12100]);
	}

	#[test]
	fn duplicates() {
		let mut v = [3, 1, 2, 1, 3, 0];
		quicksort_natural(&mut v);
		assert_eq!(v, [0, 1, 1, 2, 3, 3]);
	}

	#[test]
	fn all_equal() {
		let mut v = [7; 64];
		quicksort_natural(&mut v);
		assert_eq!(v, [7; 64]);
	}

	#[test]
	fn already_sorted_and_reversed() {
		let mut ascending: Vec<u32> = (0..500).collect();
		quicksort_natural(&mut ascending);
		assert_eq!(ascending, (0..500).collect::<Vec<_>>());

		let mut descending: Vec<u32> = (0..500).rev().collect();
		quicksort_natural(&mut descending);
		assert_eq!(descending, (0..500).collect::<Vec<_>>());
	}

	#[test]
	fn custom_comparator() {
		let mut v = [3000, 1000, 2000];
		quicksort(&mut v, reversed(Natural));
		assert_eq!(v, [3000, 2000, 1000]);
	}

	#[test]
	fn strings() {
		let mut v = ["Citroen", "Aston Martin", "BMW", "Audi"];
		quicksort_natural(&mut v);
		assert_eq!(v, ["Aston Martin", "Audi", "BMW", "Citroen"]);
	}

	#[test]
	fn by_extracted_key() {
		let mut v = vec!["Citroen", "BMW", "Audi"];
		quicksort(&mut v, by_key(|s: &&str| s.len()));
		assert!(is_sorted_by(&v, |a, b| a.len().cmp(&b.len())));
	}

	#[test]
	fn prefix_only() {
		let mut buffer = [5, 4, 3, 2, 1];
		quicksort_natural(&mut buffer[..3]);
		assert_eq!(buffer, [3, 4, 5, 2, 1]);
	}

	#[test]
	fn partition_places_pivot() {
		let mut v = [9, 1, 8, 2, 5];
		let p = partition(&mut v, &mut Natural);
		assert_eq!(p, 2);
		assert_eq!(v[p], 5);
		assert!(v[..p].iter().all(|x| *x <= 5));
		assert!(v[p + 1..].iter().all(|x| *x > 5));
	}

	#[test]
	fn pseudo_random_input() {
		let mut state = 0x2545f491u32;
		let mut v: Vec<u32> = (0..2000).map(|_| {
			state ^= state << 13;
			state ^= state >> 17;
			state ^= state << 5;
			state % 100
		}).collect();

		let mut expected = v.clone();
		expected.sort_unstable();

		quicksort_natural(&mut v);
		assert_eq!(v, expected);
	}
}
