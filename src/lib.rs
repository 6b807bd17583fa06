//! This crate provides the [`BigArrayList`] data structure,
//! a growable array list with index-checked access and in-place sorting.
//!
//! Elements are stored contiguously in a single heap buffer whose capacity
//! doubles each time it is exhausted.
//! The list can be sorted with a [quicksort](sort::quicksort) routine,
//! either according to the natural ordering of its elements
//! or using any [`Comparator`].
//!
//! ## Basic usage
//!
//! ```rust
//! use big_array_list::BigArrayList;
//!
//! let mut list = BigArrayList::with_capacity(1);
//! list.push(315);
//! list.push(12100); // <- the buffer is full, its capacity doubles here.
//! list.push(2);
//! assert_eq!(list.len(), 3);
//!
//! list.sort();
//! assert_eq!(list.to_string(), "[2, 315, 12100]");
//! ```
//!
//! Index-based operations report errors instead of panicking:
//! ```rust
//! # use big_array_list::{BigArrayList, Error};
//! let mut list: BigArrayList<i32> = vec![1, 2, 3].into();
//! assert_eq!(list.remove(1), Ok(2));
//! assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
//! ```
//!
//! Any closure can be used as a comparator:
//! ```rust
//! # use big_array_list::BigArrayList;
//! let mut list: BigArrayList<i32> = vec![3000, 1000, 2000].into();
//! list.sort_by(|a, b| b.cmp(a));
//! assert_eq!(list, [3000, 2000, 1000]);
//! ```
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for `BigArrayList`.
pub mod error;
pub mod raw;
pub mod comparator;
pub mod sort;
pub mod list;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{
	Error,
	ReserveError
};
pub use comparator::{
	Comparator,
	Natural
};
pub use list::{
	BigArrayList,
	Iter,
	IntoIter,
	DEFAULT_CAPACITY
};
