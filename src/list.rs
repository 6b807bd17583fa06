use core::{
	cmp::{
		self,
		Ordering
	},
	fmt,
	iter::FusedIterator,
	mem::{
		self,
		ManuallyDrop
	},
	ops::{
		Deref,
		DerefMut
	},
	ptr::{
		self,
		NonNull
	},
	slice
};
use crate::{
	comparator::{
		by_key,
		Comparator,
		Natural
	},
	raw::RawBuffer,
	sort,
	Error,
	ReserveError
};

/// Capacity of a list created with [`BigArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Contiguous growable array type with index-checked access and in-place quicksort.
///
/// Elements are stored in a single heap buffer.
/// When the buffer is full, pushing a new element doubles its capacity,
/// so that pushing `n` elements only copies O(n) elements overall.
///
/// Index-based operations ([`get`](Self::get), [`set`](Self::set),
/// [`insert`](Self::insert), [`remove`](Self::remove)) never panic on a bad
/// index: they return [`Error::IndexOutOfRange`] and leave the list untouched.
///
/// # Examples
///
/// ```
/// # use big_array_list::BigArrayList;
/// let mut list = BigArrayList::new();
/// list.push(18);
/// list.push(2);
/// list.push(333);
/// assert_eq!(list.to_string(), "[18, 2, 333]");
///
/// list.sort();
/// assert_eq!(list, [2, 18, 333]);
/// assert_eq!(list.remove(1), Ok(18));
/// ```
pub struct BigArrayList<T> {
	/// Backing buffer. Slots `[0, len)` are initialized.
	buf: RawBuffer<T>,

	/// Number of elements.
	len: usize,

	/// Capacity requested at construction, restored by `clear`.
	initial_capacity: usize
}

impl<T> Drop for BigArrayList<T> {
	fn drop(&mut self) {
		unsafe {
			// drop every element, the buffer then frees the memory.
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len))
		}
	}
}

impl<T> BigArrayList<T> {
	/// Creates a new empty list with a capacity of [`DEFAULT_CAPACITY`] elements.
	#[inline]
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Creates a new empty list with room for exactly `capacity` elements.
	///
	/// A capacity of 0 does not allocate.
	///
	/// # Panics
	///
	/// Panics if the requested size exceeds `isize::MAX` bytes.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		BigArrayList {
			buf: RawBuffer::with_capacity(capacity),
			len: 0,
			initial_capacity: capacity
		}
	}

	/// Creates a new empty list with room for exactly `capacity` elements.
	///
	/// Returns [`Error::InvalidArgument`] if `capacity` is negative,
	/// and [`Error::Reserve`] if the buffer cannot be allocated.
	///
	/// ```
	/// # use big_array_list::{BigArrayList, Error};
	/// assert_eq!(BigArrayList::<u8>::try_with_capacity(-1).err(), Some(Error::InvalidArgument { capacity: -1 }));
	/// ```
	pub fn try_with_capacity(capacity: isize) -> Result<Self, Error> {
		if capacity < 0 {
			tracing::debug!(capacity, "rejecting negative capacity");
			return Err(Error::InvalidArgument { capacity })
		}

		let capacity = capacity as usize;
		Ok(BigArrayList {
			buf: RawBuffer::try_with_capacity(capacity)?,
			len: 0,
			initial_capacity: capacity
		})
	}

	/// Returns the number of elements in the list.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the number of elements the list can hold without reallocating.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Returns a raw pointer to the list's buffer.
	///
	/// The caller must ensure that the list outlives the pointer this
	/// function returns, or else it will end up pointing to garbage.
	/// Modifying the list may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.as_ptr()
	}

	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.as_mut_ptr()
	}

	/// Extracts a slice containing the entire list.
	///
	/// Equivalent to `&s[..]`.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.as_ptr(), self.len)
		}
	}

	/// Extracts a mutable slice of the entire list.
	///
	/// Equivalent to `&mut s[..]`.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.as_mut_ptr(), self.len)
		}
	}

	/// Forces the length of the list to `len`.
	///
	/// ## Safety
	///
	/// `len` must not exceed the capacity, and the elements at `old_len..len`
	/// must be initialized.
	#[inline]
	pub unsafe fn set_len(&mut self, len: usize) {
		debug_assert!(len <= self.capacity());
		self.len = len
	}

	#[inline]
	fn out_of_range(&self, index: usize) -> Error {
		Error::IndexOutOfRange {
			index,
			len: self.len
		}
	}

	/// Returns a reference to the element at position `index`.
	pub fn get(&self, index: usize) -> Result<&T, Error> {
		match self.as_slice().get(index) {
			Some(element) => Ok(element),
			None => Err(self.out_of_range(index))
		}
	}

	/// Returns a mutable reference to the element at position `index`.
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
		let len = self.len;
		self.as_mut_slice().get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
	}

	/// Replaces the element at position `index`, and returns the previous one.
	///
	/// Unlike [`insert`](Self::insert), no element is moved.
	pub fn set(&mut self, index: usize, element: T) -> Result<T, Error> {
		let slot = self.get_mut(index)?;
		Ok(mem::replace(slot, element))
	}

	/// Appends an element to the back of the list.
	///
	/// If the list is full, its capacity is doubled first.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn push(&mut self, value: T) {
		if self.len == self.buf.capacity() {
			self.buf.reserve(self.len, 1);
		}

		unsafe {
			let end = self.as_mut_ptr().add(self.len);
			ptr::write(end, value);
		}
		self.len += 1;
	}

	/// Removes the last element from the list and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		if self.len == 0 {
			None
		} else {
			unsafe {
				self.len -= 1;
				Some(ptr::read(self.as_ptr().add(self.len)))
			}
		}
	}

	/// Inserts an element at position `index` within the list, shifting all
	/// elements after it to the right.
	///
	/// Returns [`Error::IndexOutOfRange`] if `index > len`.
	pub fn insert(&mut self, index: usize, element: T) -> Result<(), Error> {
		let len = self.len;
		if index > len {
			return Err(self.out_of_range(index))
		}

		// space for the new element
		if len == self.buf.capacity() {
			self.buf.reserve(len, 1);
		}

		unsafe {
			let p = self.as_mut_ptr().add(index);
			// Shift everything over to make space. (Duplicating the
			// `index`th element into two consecutive places.)
			ptr::copy(p, p.add(1), len - index);
			// Write it in, overwriting the first copy of the `index`th
			// element.
			ptr::write(p, element);
		}
		self.len = len + 1;

		Ok(())
	}

	/// Removes and returns the element at position `index` within the list,
	/// shifting all elements after it to the left.
	pub fn remove(&mut self, index: usize) -> Result<T, Error> {
		let len = self.len;
		if index >= len {
			return Err(self.out_of_range(index))
		}

		unsafe {
			// the place we are taking from.
			let ptr = self.as_mut_ptr().add(index);
			// copy it out, unsafely having a copy of the value on
			// the stack and in the list at the same time.
			let ret = ptr::read(ptr);

			// Shift everything down to fill in that spot.
			ptr::copy(ptr.add(1), ptr, len - index - 1);
			self.len = len - 1;
			Ok(ret)
		}
	}

	/// Shortens the list, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater than the list's current length, this has no
	/// effect. The capacity is left untouched.
	pub fn truncate(&mut self, len: usize) {
		if len > self.len {
			return
		}

		unsafe {
			let remaining_len = self.len - len;
			let s = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(len), remaining_len);
			self.len = len;
			ptr::drop_in_place(s);
		}
	}

	/// Removes all the elements.
	///
	/// The buffer is brought back to the capacity the list was created with,
	/// releasing any memory acquired by growth.
	pub fn clear(&mut self) {
		let dropped = self.len;
		self.truncate(0);

		if mem::size_of::<T>() != 0 && self.buf.capacity() != self.initial_capacity {
			self.buf = RawBuffer::with_capacity(self.initial_capacity);
		}

		tracing::debug!(dropped, capacity = self.initial_capacity, "list cleared");
	}

	/// Reserves capacity for at least `additional` more elements.
	/// The list may reserve more space to avoid frequent reallocations.
	/// Does nothing if capacity is already sufficient.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn reserve(&mut self, additional: usize) {
		self.buf.reserve(self.len, additional)
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	#[inline]
	pub fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
		self.buf.try_reserve(self.len, additional)
	}

	/// Reserves the minimum capacity for exactly `additional` more elements.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn reserve_exact(&mut self, additional: usize) {
		self.buf.reserve_exact(self.len, additional)
	}

	/// The same as `reserve_exact`, but returns on errors instead of panicking or aborting.
	#[inline]
	pub fn try_reserve_exact(&mut self, additional: usize) -> Result<(), ReserveError> {
		self.buf.try_reserve_exact(self.len, additional)
	}

	/// Shrinks the capacity of the list with a lower bound.
	///
	/// The capacity will remain at least as large as both the length
	/// and the supplied value.
	pub fn shrink_to(&mut self, min_capacity: usize) {
		let target = cmp::max(self.len, min_capacity);
		if self.capacity() > target {
			self.buf.shrink_to(target)
		}
	}

	/// Shrinks the capacity of the list as much as possible.
	#[inline]
	pub fn shrink_to_fit(&mut self) {
		self.shrink_to(self.len)
	}

	/// Sorts the list in place according to the natural ordering of its elements.
	///
	/// This sort is not stable, see [`quicksort`](crate::sort::quicksort).
	#[inline]
	pub fn sort(&mut self) where T: Ord {
		self.sort_with(Natural)
	}

	/// Sorts the list in place with a comparison function.
	///
	/// ```
	/// # use big_array_list::BigArrayList;
	/// let mut list: BigArrayList<i32> = [3000, 1000, 2000].iter().copied().collect();
	/// list.sort_by(|a, b| b.cmp(a));
	/// assert_eq!(list, [3000, 2000, 1000]);
	/// ```
	#[inline]
	pub fn sort_by<F>(&mut self, compare: F) where F: FnMut(&T, &T) -> Ordering {
		self.sort_with(compare)
	}

	/// Sorts the list in place by the natural ordering of a key extracted from each element.
	#[inline]
	pub fn sort_by_key<K, F>(&mut self, f: F) where F: FnMut(&T) -> K, K: Ord {
		self.sort_with(by_key(f))
	}

	/// Sorts the list in place with the given [`Comparator`].
	#[inline]
	pub fn sort_with<C: Comparator<T>>(&mut self, comparator: C) {
		sort::quicksort(self.as_mut_slice(), comparator)
	}

	/// Returns an iterator over the elements of the list, in index order.
	///
	/// Each call returns a fresh iterator starting at the first element.
	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			inner: self.as_slice().iter()
		}
	}

	#[inline]
	pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
		self.as_mut_slice().iter_mut()
	}

	/// Calls `action` on every element, in index order.
	#[inline]
	pub fn for_each<F>(&self, action: F) where F: FnMut(&T) {
		self.iter().for_each(action)
	}

	/// Clones and appends all elements in a slice to the list.
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		self.reserve(other.len());
		for element in other {
			self.push(element.clone())
		}
	}

	/// Converts the list into a `Vec`, reusing its buffer.
	#[inline]
	pub fn into_vec(self) -> Vec<T> {
		let this = ManuallyDrop::new(self);
		let len = this.len;

		// SAFETY: `this` is never used again, and its destructor is not run.
		let buf = unsafe { ptr::read(&this.buf) };
		let (ptr, capacity) = buf.into_raw_parts();

		// SAFETY: the buffer was allocated by the global allocator with the
		// layout of `[T; capacity]`, and its first `len` slots are initialized.
		unsafe {
			Vec::from_raw_parts(ptr.as_ptr(), len, capacity)
		}
	}
}

impl<T> Default for BigArrayList<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for BigArrayList<T> {
	fn clone(&self) -> Self {
		let mut list = Self::with_capacity(cmp::max(self.len, self.initial_capacity));
		list.initial_capacity = self.initial_capacity;
		list.extend_from_slice(self.as_slice());
		list
	}
}

impl<T> Deref for BigArrayList<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> DerefMut for BigArrayList<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T> AsRef<[T]> for BigArrayList<T> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T> AsMut<[T]> for BigArrayList<T> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

/// Immutable list iterator.
///
/// Created by [`BigArrayList::iter`].
pub struct Iter<'a, T> {
	inner: slice::Iter<'a, T>
}

impl<'a, T> Iter<'a, T> {
	/// Advances the iterator, failing with [`Error::NoMoreElements`] once every
	/// element has been visited.
	///
	/// ```
	/// # use big_array_list::{BigArrayList, Error};
	/// let list: BigArrayList<&str> = vec!["BMW"].into();
	/// let mut it = list.iter();
	/// assert_eq!(it.try_next(), Ok(&"BMW"));
	/// assert_eq!(it.try_next(), Err(Error::NoMoreElements));
	/// ```
	#[inline]
	pub fn try_next(&mut self) -> Result<&'a T, Error> {
		self.inner.next().ok_or(Error::NoMoreElements)
	}

	/// Returns the remaining elements as a slice.
	#[inline]
	pub fn as_slice(&self) -> &'a [T] {
		self.inner.as_slice()
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.inner.next()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		self.inner.next_back()
	}
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
	#[inline]
	fn clone(&self) -> Self {
		Iter {
			inner: self.inner.clone()
		}
	}
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Iter").field(&self.as_slice()).finish()
	}
}

impl<'v, T> IntoIterator for &'v BigArrayList<T> {
	type Item = &'v T;
	type IntoIter = Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'v, T> IntoIterator for &'v mut BigArrayList<T> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

/// An iterator that moves out of a list.
///
/// Elements that are not consumed are dropped with the iterator.
pub struct IntoIter<T> {
	buf: RawBuffer<T>,
	start: usize,
	end: usize
}

impl<T> IntoIter<T> {
	/// Returns the remaining elements as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start)
		}
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		if self.start == self.end {
			None
		} else {
			unsafe {
				let item = ptr::read(self.buf.as_ptr().add(self.start));
				self.start += 1;
				Some(item)
			}
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.start;
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		if self.start == self.end {
			None
		} else {
			unsafe {
				self.end -= 1;
				Some(ptr::read(self.buf.as_ptr().add(self.end)))
			}
		}
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
	fn drop(&mut self) {
		unsafe {
			// only drop remaining elements.
			let remaining = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(self.start), self.end - self.start);
			ptr::drop_in_place(remaining)
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T> IntoIterator for BigArrayList<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		let this = ManuallyDrop::new(self);
		IntoIter {
			// SAFETY: `this` is never used again, and its destructor is not run.
			buf: unsafe { ptr::read(&this.buf) },
			start: 0,
			end: this.len
		}
	}
}

impl<T> Extend<T> for BigArrayList<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
		let iterator = iterator.into_iter();
		let (lower, _) = iterator.size_hint();
		self.reserve(lower);

		for element in iterator {
			self.push(element)
		}
	}
}

impl<'e, T: Copy + 'e> Extend<&'e T> for BigArrayList<T> {
	fn extend<I: IntoIterator<Item = &'e T>>(&mut self, iterator: I) {
		self.extend(iterator.into_iter().copied())
	}
}

impl<T> core::iter::FromIterator<T> for BigArrayList<T> {
	/// Collects the elements into a list whose capacity fits the iterator's lower size bound.
	fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
		let iterator = iterator.into_iter();
		let mut list = Self::with_capacity(iterator.size_hint().0);
		list.extend(iterator);
		list
	}
}

impl<T> From<Vec<T>> for BigArrayList<T> {
	/// Takes ownership of the `Vec` buffer without copying its elements.
	fn from(vec: Vec<T>) -> Self {
		let mut vec = ManuallyDrop::new(vec);
		let len = vec.len();
		let capacity = vec.capacity();

		// SAFETY: `Vec` never gives a null pointer, and allocates its buffer
		// with the global allocator and the layout of `[T; capacity]`.
		let buf = unsafe {
			RawBuffer::from_raw_parts(NonNull::new_unchecked(vec.as_mut_ptr()), capacity)
		};

		BigArrayList {
			buf,
			len,
			initial_capacity: if mem::size_of::<T>() == 0 { 0 } else { capacity }
		}
	}
}

impl<T: Clone> From<&[T]> for BigArrayList<T> {
	fn from(s: &[T]) -> Self {
		let mut list = Self::with_capacity(s.len());
		list.extend_from_slice(s);
		list
	}
}

impl<T> From<BigArrayList<T>> for Vec<T> {
	#[inline]
	fn from(list: BigArrayList<T>) -> Vec<T> {
		list.into_vec()
	}
}

impl<T: fmt::Debug> fmt::Debug for BigArrayList<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

/// Renders the list as `[e0, e1, ..., en]`.
impl<T: fmt::Display> fmt::Display for BigArrayList<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, element) in self.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			fmt::Display::fmt(element, f)?;
		}
		f.write_str("]")
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U] BigArrayList<T>, BigArrayList<U> }
impl_slice_eq1! { [T, U] BigArrayList<T>, Vec<U> }
impl_slice_eq1! { [T, U] Vec<T>, BigArrayList<U> }
impl_slice_eq1! { [T, U] BigArrayList<T>, [U] }
impl_slice_eq1! { [T, U] BigArrayList<T>, &[U] }
impl_slice_eq1! { [T, U] BigArrayList<T>, &mut [U] }
impl_slice_eq1! { [T, U] &[T], BigArrayList<U> }
impl_slice_eq1! { [T, U, const N: usize] BigArrayList<T>, [U; N] }
impl_slice_eq1! { [T, U, const N: usize] BigArrayList<T>, &[U; N] }

impl<T: Eq> Eq for BigArrayList<T> {}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{
		cell::Cell,
		rc::Rc
	};

	/// Counts how many times it was dropped.
	struct Droppable(Rc<Cell<usize>>);

	impl Drop for Droppable {
		fn drop(&mut self) {
			self.0.set(self.0.get() + 1)
		}
	}

	#[test]
	fn default_capacity() {
		let list: BigArrayList<u8> = BigArrayList::new();
		assert_eq!(list.capacity(), DEFAULT_CAPACITY);
		assert_eq!(list.len(), 0);
	}

	#[test]
	fn growth_doubles_capacity() {
		let mut list = BigArrayList::with_capacity(1);
		list.push(1);
		assert_eq!(list.capacity(), 1);
		list.push(2);
		assert_eq!(list.capacity(), 2);
		list.push(3);
		assert_eq!(list.capacity(), 4);
		assert_eq!(list, [1, 2, 3]);
	}

	#[test]
	fn zero_capacity_grows() {
		let mut list = BigArrayList::with_capacity(0);
		list.push("a");
		assert_eq!(list.capacity(), 1);
		assert_eq!(list.get(0), Ok(&"a"));
	}

	#[test]
	fn insert_grows_when_full() {
		let mut list = BigArrayList::with_capacity(2);
		list.push(1);
		list.push(3);
		list.insert(1, 2).unwrap();
		assert_eq!(list.capacity(), 4);
		assert_eq!(list, [1, 2, 3]);
	}

	#[test]
	fn clear_restores_initial_capacity() {
		let mut list: BigArrayList<i32> = BigArrayList::with_capacity(2);
		list.extend(0..100);
		assert!(list.capacity() >= 100);
		list.clear();
		assert_eq!(list.len(), 0);
		assert_eq!(list.capacity(), 2);
	}

	#[test]
	fn failed_operations_leave_list_unchanged() {
		let mut list: BigArrayList<i32> = vec![1, 2].into();
		assert!(list.set(2, 9).is_err());
		assert!(list.insert(3, 9).is_err());
		assert!(list.remove(2).is_err());
		assert_eq!(list, [1, 2]);
	}

	#[test]
	fn drops_every_element_once() {
		let drops = Rc::new(Cell::new(0));
		let mut list = BigArrayList::with_capacity(1);
		for _ in 0..10 {
			list.push(Droppable(drops.clone()));
		}

		drop(list.remove(3).unwrap());
		assert_eq!(drops.get(), 1);

		list.set(0, Droppable(drops.clone())).unwrap();
		assert_eq!(drops.get(), 2);

		list.truncate(5);
		assert_eq!(drops.get(), 6);

		list.clear();
		assert_eq!(drops.get(), 11);

		list.push(Droppable(drops.clone()));
		drop(list);
		assert_eq!(drops.get(), 12);
	}

	#[test]
	fn into_iter_drops_remaining() {
		let drops = Rc::new(Cell::new(0));
		let list: BigArrayList<_> = (0..4).map(|_| Droppable(drops.clone())).collect();

		let mut it = list.into_iter();
		drop(it.next());
		drop(it.next_back());
		assert_eq!(drops.get(), 2);
		assert_eq!(it.len(), 2);

		drop(it);
		assert_eq!(drops.get(), 4);
	}

	#[test]
	fn vec_conversions_keep_buffer() {
		let vec = vec![1u32, 2, 3];
		let ptr = vec.as_ptr();
		let list = BigArrayList::from(vec);
		assert_eq!(list.as_ptr(), ptr);

		let back: Vec<u32> = list.into();
		assert_eq!(back.as_ptr(), ptr);
		assert_eq!(back, [1, 2, 3]);
	}

	#[test]
	fn empty_list_into_vec() {
		let list: BigArrayList<String> = BigArrayList::with_capacity(0);
		assert!(list.into_vec().is_empty());
	}

	#[test]
	fn zero_sized_elements() {
		let mut list = BigArrayList::new();
		for _ in 0..5000 {
			list.push(());
		}
		assert_eq!(list.len(), 5000);
		assert_eq!(list.remove(10), Ok(()));
		list.clear();
		assert!(list.is_empty());
	}

	#[test]
	fn zero_sized_elements_into_vec() {
		let mut list = BigArrayList::new();
		for _ in 0..5 {
			list.push(());
		}
		let v: Vec<()> = list.into_vec();
		assert_eq!(v.len(), 5);

		let list: BigArrayList<()> = vec![(); 3].into_iter().collect();
		let v: Vec<()> = list.clone().into();
		assert_eq!(v.len(), 3);
		assert_eq!(list.into_iter().count(), 3);
	}

	#[test]
	fn shrinking() {
		let mut list: BigArrayList<i32> = BigArrayList::with_capacity(64);
		list.extend(0..10);
		list.shrink_to(20);
		assert_eq!(list.capacity(), 20);
		list.shrink_to_fit();
		assert_eq!(list.capacity(), 10);
		assert_eq!(list, (0..10).collect::<Vec<i32>>());
	}

	#[test]
	fn clone_is_deep() {
		let mut list: BigArrayList<String> = BigArrayList::with_capacity(4);
		list.push("Aston Martin".to_string());
		let copy = list.clone();
		list.set(0, "BMW".to_string()).unwrap();
		assert_eq!(copy, ["Aston Martin"]);
		assert_eq!(copy.capacity(), 4);
	}

	#[test]
	fn debug_and_display() {
		let list: BigArrayList<&str> = vec!["a", "b"].into();
		assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
		assert_eq!(list.to_string(), "[a, b]");
		assert_eq!(BigArrayList::<i32>::new().to_string(), "[]");
	}
}
