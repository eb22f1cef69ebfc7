//! A contiguous growable container that separates storage allocation from
//! element lifetime.
//!
//! This crate provides [`ContigVec`], a dynamic array that owns a single
//! contiguous heap block and constructs elements into it in place. Storage
//! can be reserved before any element exists, growth relocates elements with
//! a strategy chosen per element type at compile time, and every fallible
//! operation either fully succeeds or leaves the container exactly as it
//! was.
//!
//! # Key Features
//!
//! - **Decoupled allocation and construction**: capacity is raw storage
//!   until an element is constructed into a slot
//! - **Recoverable failures**: allocation refusal and element-duplication
//!   failures surface as [`Error`] values, never as a corrupted container
//! - **Rollback-safe growth**: a reallocation that fails partway destroys
//!   its partial work and keeps the original buffer intact
//! - **Compile-time relocation strategy**: the [`Relocate`] trait selects a
//!   bitwise move or a duplicating transfer per element type, with the
//!   unused branch eliminated during monomorphization
//! - **In-place construction**: [`ContigVec::push_with()`] initializes new
//!   elements directly in their slots
//! - **Constant-time ownership transfer**: moves and
//!   [`ContigVec::swap()`] exchange whole buffers without touching elements
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use contig_vec::ContigVec;
//!
//! let mut values = ContigVec::new();
//!
//! values.push("first".to_string())?;
//! values.push("second".to_string())?;
//!
//! assert_eq!(values.len(), 2);
//! assert_eq!(values.as_slice().join(" "), "first second");
//! # Ok::<(), contig_vec::Error>(())
//! ```
//!
//! ## Reserving capacity up front
//!
//! ```rust
//! use contig_vec::ContigVec;
//!
//! let mut values = ContigVec::new();
//! values.reserve(8)?;
//!
//! let block = values.as_ptr();
//!
//! for value in 0..8_u32 {
//!     values.push(value)?;
//! }
//!
//! // No reallocation took place; the elements live in the reserved block.
//! assert_eq!(values.as_ptr(), block);
//! assert_eq!(values.capacity(), 8);
//! # Ok::<(), contig_vec::Error>(())
//! ```
//!
//! ## Element types that refuse a transfer strategy
//!
//! ```rust
//! use contig_vec::{ContigVec, Relocate};
//!
//! // Relocates bitwise, cannot be duplicated.
//! struct Unique {
//!     id: u64,
//! }
//!
//! impl Relocate for Unique {}
//!
//! let mut values = ContigVec::new();
//! for id in 0..10 {
//!     values.push(Unique { id })?;
//! }
//!
//! assert_eq!(values.len(), 10);
//! assert_eq!(values.get(9).map(|unique| unique.id), Some(9));
//! # Ok::<(), contig_vec::Error>(())
//! ```

mod errors;
mod relocate;
mod storage;
mod vec;

pub use errors::{DuplicateError, Error};
pub(crate) use errors::Result;
pub use relocate::Relocate;
pub(crate) use storage::RawStorage;
pub use vec::ContigVec;
