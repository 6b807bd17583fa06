use core::{
	alloc::{
		Layout,
		LayoutError
	},
	marker::PhantomData,
	mem,
	ptr::NonNull,
	cmp
};
use std::alloc::{
	self,
	handle_alloc_error
};
use crate::ReserveError;

/// A low-level utility for more ergonomically managing the backing buffer of a
/// [`BigArrayList`](crate::BigArrayList).
///
/// This type does not in anyway inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of `RawBuffer`
/// to handle the actual things *stored* inside of a `RawBuffer`.
///
/// A buffer of capacity 0, or of a zero-sized `T`, never allocates.
pub struct RawBuffer<T> {
	/// Pointer to the first slot (dangling if nothing is allocated).
	ptr: NonNull<T>,

	/// Number of allocated slots.
	capacity: usize,

	/// The buffer logically owns values of type `T`.
	marker: PhantomData<T>
}

unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> Drop for RawBuffer<T> {
	fn drop(&mut self) {
		if let Some((ptr, layout)) = self.current_memory() {
			unsafe {
				alloc::dealloc(ptr.as_ptr(), layout)
			}
		}
	}
}

impl<T> RawBuffer<T> {
	/// Creates a new buffer without allocating.
	#[inline]
	pub const fn new() -> Self {
		RawBuffer {
			ptr: NonNull::dangling(),
			capacity: 0,
			marker: PhantomData
		}
	}

	/// Creates a buffer with exactly `capacity` slots.
	///
	/// # Panics
	///
	/// Panics if the requested size exceeds `isize::MAX` bytes.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		handle_reserve(Self::try_with_capacity(capacity))
	}

	/// The same as `with_capacity`, but returns on errors instead of panicking or aborting.
	pub fn try_with_capacity(capacity: usize) -> Result<Self, ReserveError> {
		if mem::size_of::<T>() == 0 || capacity == 0 {
			return Ok(Self::new())
		}

		let layout = Layout::array::<T>(capacity).map_err(|_| ReserveError::CapacityOverflow)?;
		alloc_guard(layout.size())?;

		// SAFETY: `layout` has a non-zero size.
		let ptr = unsafe { alloc::alloc(layout) };
		match NonNull::new(ptr.cast::<T>()) {
			Some(ptr) => Ok(RawBuffer {
				ptr,
				capacity,
				marker: PhantomData
			}),
			None => Err(ReserveError::AllocError { layout })
		}
	}

	/// Creates a buffer from a pointer and a capacity.
	///
	/// ## Safety
	///
	/// If `T` is not zero-sized and `capacity` is not 0, `ptr` must have been
	/// allocated by the global allocator with the layout of `[T; capacity]`
	/// (which is the case of the buffer of a `Vec<T>` of that capacity).
	#[inline]
	pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
		RawBuffer {
			ptr,
			capacity,
			marker: PhantomData
		}
	}

	/// Decomposes the buffer into its pointer and capacity without freeing it.
	///
	/// The capacity is the one reported by [`capacity`](Self::capacity),
	/// `usize::MAX` for zero-sized types.
	#[inline]
	pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
		let parts = (self.ptr, self.capacity());
		mem::forget(self);
		parts
	}

	/// Returns a raw pointer to the first slot.
	///
	/// The pointer is dangling if the buffer has not allocated.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.ptr.as_ptr()
	}

	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Returns the number of slots of the buffer.
	///
	/// This is always `usize::MAX` for zero-sized types.
	#[inline]
	pub fn capacity(&self) -> usize {
		if mem::size_of::<T>() == 0 {
			usize::MAX
		} else {
			self.capacity
		}
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if mem::size_of::<T>() == 0 || self.capacity == 0 {
			None
		} else {
			// We have an allocated chunk of memory, so we can bypass runtime
			// checks to get our current layout.
			unsafe {
				let align = mem::align_of::<T>();
				let size = mem::size_of::<T>() * self.capacity;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}

	fn set_ptr(&mut self, ptr: NonNull<u8>, capacity: usize) {
		self.ptr = ptr.cast();
		self.capacity = capacity;
	}

	/// Returns if the buffer needs to grow to fulfill the needed extra capacity.
	#[inline]
	fn needs_to_grow(&self, len: usize, additional: usize) -> bool {
		additional > self.capacity().wrapping_sub(len)
	}

	/// Ensures that the buffer can hold at least `len + additional` slots.
	///
	/// When growing, the capacity is at least doubled so that a sequence of
	/// pushes only copies O(n) elements overall.
	/// The first `len` slots are preserved, `len` must not exceed the capacity.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn reserve(&mut self, len: usize, additional: usize) {
		handle_reserve(self.try_reserve(len, additional))
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	pub fn try_reserve(&mut self, len: usize, additional: usize) -> Result<(), ReserveError> {
		debug_assert!(len <= self.capacity());
		if self.needs_to_grow(len, additional) {
			self.grow_amortized(len, additional)
		} else {
			Ok(())
		}
	}

	/// Ensures that the buffer can hold exactly `len + additional` slots,
	/// without over-allocating. `len` must not exceed the capacity.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn reserve_exact(&mut self, len: usize, additional: usize) {
		handle_reserve(self.try_reserve_exact(len, additional))
	}

	/// The same as `reserve_exact`, but returns on errors instead of panicking or aborting.
	pub fn try_reserve_exact(&mut self, len: usize, additional: usize) -> Result<(), ReserveError> {
		debug_assert!(len <= self.capacity());
		if self.needs_to_grow(len, additional) {
			self.grow_exact(len, additional)
		} else {
			Ok(())
		}
	}

	/// Shrinks the buffer down to `new_capacity` slots.
	///
	/// Slots past `new_capacity` are discarded without being dropped.
	///
	/// # Panics
	///
	/// Panics if the current capacity is smaller than `new_capacity`.
	pub fn shrink_to(&mut self, new_capacity: usize) {
		assert!(new_capacity <= self.capacity(), "Tried to shrink to a larger capacity");
		handle_reserve(self.try_shrink_to(new_capacity))
	}

	/// The same as `shrink_to`, but returns on errors instead of panicking or aborting.
	///
	/// Does nothing if `new_capacity` is not smaller than the current capacity.
	pub fn try_shrink_to(&mut self, new_capacity: usize) -> Result<(), ReserveError> {
		if new_capacity >= self.capacity() {
			return Ok(())
		}

		let (ptr, layout) = if let Some(mem) = self.current_memory() {
			mem
		} else {
			return Ok(())
		};

		if new_capacity == 0 {
			unsafe {
				alloc::dealloc(ptr.as_ptr(), layout);
			}
			tracing::trace!(from = self.capacity, to = 0, "shrinking buffer");
			self.ptr = NonNull::dangling();
			self.capacity = 0;
		} else if new_capacity < self.capacity {
			let new_size = new_capacity * mem::size_of::<T>();
			let ptr = unsafe {
				// SAFETY: `new_size` is non-zero and smaller than the current size.
				alloc::realloc(ptr.as_ptr(), layout, new_size)
			};
			let ptr = NonNull::new(ptr).ok_or_else(|| ReserveError::AllocError {
				layout: unsafe { Layout::from_size_align_unchecked(new_size, layout.align()) }
			})?;

			tracing::trace!(from = self.capacity, to = new_capacity, "shrinking buffer");
			self.set_ptr(ptr, new_capacity);
		}

		Ok(())
	}

	fn grow_amortized(&mut self, len: usize, additional: usize) -> Result<(), ReserveError> {
		// This is ensured by the calling contexts.
		debug_assert!(additional > 0);

		if mem::size_of::<T>() == 0 {
			// Since we return a capacity of `usize::MAX` when `elem_size` is
			// 0, getting to here necessarily means the buffer is overfull.
			return Err(ReserveError::CapacityOverflow)
		}

		let required_cap = len.checked_add(additional).ok_or(ReserveError::CapacityOverflow)?;

		// This guarantees exponential growth. The doubling cannot overflow
		// because `capacity <= isize::MAX` and the type of `capacity` is `usize`.
		// An empty buffer grows to at least one slot.
		let cap = cmp::max(cmp::max(self.capacity * 2, required_cap), 1);

		let new_layout = Layout::array::<T>(cap);
		let ptr = finish_grow(new_layout, self.current_memory())?;

		tracing::trace!(from = self.capacity, to = cap, "growing buffer");
		self.set_ptr(ptr, cap);
		Ok(())
	}

	fn grow_exact(&mut self, len: usize, additional: usize) -> Result<(), ReserveError> {
		if mem::size_of::<T>() == 0 {
			return Err(ReserveError::CapacityOverflow)
		}

		let cap = len.checked_add(additional).ok_or(ReserveError::CapacityOverflow)?;
		let new_layout = Layout::array::<T>(cap);
		let ptr = finish_grow(new_layout, self.current_memory())?;

		tracing::trace!(from = self.capacity, to = cap, "growing buffer");
		self.set_ptr(ptr, cap);
		Ok(())
	}
}

impl<T> Default for RawBuffer<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

// This function is outside `RawBuffer` to minimize compile times.
// It is non-generic over `T`.
#[inline(never)]
fn finish_grow(new_layout: Result<Layout, LayoutError>, current_memory: Option<(NonNull<u8>, Layout)>) -> Result<NonNull<u8>, ReserveError> {
	// Check for the error here to minimize the size of `RawBuffer::grow_*`.
	let new_layout = new_layout.map_err(|_| ReserveError::CapacityOverflow)?;

	alloc_guard(new_layout.size())?;

	let memory = if let Some((ptr, old_layout)) = current_memory {
		debug_assert_eq!(old_layout.align(), new_layout.align());
		unsafe {
			// SAFETY: `ptr` was allocated with `old_layout`, and the new size
			// is non-zero and does not overflow `isize::MAX` once aligned.
			alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size())
		}
	} else {
		unsafe {
			alloc::alloc(new_layout)
		}
	};

	NonNull::new(memory).ok_or(ReserveError::AllocError { layout: new_layout })
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<T>(result: Result<T, ReserveError>) -> T {
	match result {
		Err(ReserveError::CapacityOverflow) => capacity_overflow(),
		Err(ReserveError::AllocError { layout }) => handle_alloc_error(layout),
		Ok(t) => t
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), ReserveError> {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		Err(ReserveError::CapacityOverflow)
	} else {
		Ok(())
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
