//! Orderings used to sort a [`BigArrayList`](crate::BigArrayList).
//!
//! Any `FnMut(&T, &T) -> Ordering` closure is a [`Comparator`].
//! When no comparator is given, [`Natural`] orders elements by their [`Ord`] implementation.
use core::{
	cmp::Ordering,
	fmt
};

/// Three-way comparison between two elements.
pub trait Comparator<T: ?Sized> {
	/// Compares `a` with `b`.
	fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F where F: FnMut(&T, &T) -> Ordering {
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		self(a, b)
	}
}

/// Natural ordering of the elements, given by [`Ord`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}
}

/// Reverses the ordering of the inner comparator.
///
/// Built by [`reversed`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

/// Creates a comparator ordering elements the other way around.
///
/// ```
/// # use big_array_list::comparator::{reversed, Comparator, Natural};
/// let mut descending = reversed(Natural);
/// assert!(descending.compare(&3000, &1000).is_lt());
/// ```
#[inline]
pub fn reversed<C>(comparator: C) -> Reversed<C> {
	Reversed(comparator)
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		self.0.compare(b, a)
	}
}

/// Orders elements by the natural ordering of a key extracted from each of them.
///
/// Built by [`by_key`].
#[derive(Clone, Copy)]
pub struct ByKey<F>(F);

/// Creates a comparator ordering elements by the key returned by `f`.
///
/// ```
/// # use big_array_list::comparator::{by_key, Comparator};
/// let mut by_len = by_key(|s: &&str| s.len());
/// assert!(by_len.compare(&"BMW", &"Citroen").is_lt());
/// ```
#[inline]
pub fn by_key<T: ?Sized, K: Ord, F: FnMut(&T) -> K>(f: F) -> ByKey<F> {
	ByKey(f)
}

impl<T: ?Sized, K: Ord, F: FnMut(&T) -> K> Comparator<T> for ByKey<F> {
	#[inline]
	fn compare(&mut self, a: &T, b: &T) -> Ordering {
		(self.0)(a).cmp(&(self.0)(b))
	}
}

impl<F> fmt::Debug for ByKey<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ByKey").finish_non_exhaustive()
	}
}
