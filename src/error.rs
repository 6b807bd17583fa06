use core::alloc::Layout;
use thiserror::Error;

/// Error returned by the fallible reservation methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReserveError {
	/// The requested capacity exceeds `isize::MAX` bytes, or `usize::MAX` elements.
	#[error("capacity overflow")]
	CapacityOverflow,

	/// The allocator refused the request.
	#[error("memory allocation of {} bytes failed", .layout.size())]
	AllocError {
		layout: Layout
	}
}

/// Errors reported by [`BigArrayList`](crate::BigArrayList) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// Construction was requested with a negative capacity.
	#[error("invalid capacity {capacity}")]
	InvalidArgument {
		capacity: isize
	},

	/// An index-based operation was given an index past the end of the list.
	#[error("index {index} out of range for list of length {len}")]
	IndexOutOfRange {
		index: usize,
		len: usize
	},

	/// An exhausted iterator was advanced.
	#[error("no more elements")]
	NoMoreElements,

	/// The buffer could not be grown or allocated.
	#[error(transparent)]
	Reserve(#[from] ReserveError)
}
