//! Contig: a contiguous, growable array container with explicit capacity
//! control.
//!
//! [`Vector<T>`] owns exactly one heap allocation of `capacity` element
//! slots, of which the first `len` hold live values. It is a value type:
//! cloning duplicates the live elements into an independent buffer, moving
//! transfers the buffer wholesale, and dropping tears down the live
//! elements exactly once. This crate is one of the places `unsafe` is
//! expected — all allocator calls are confined to one internal module.
//!
//! # Architecture
//!
//! ```text
//! Vector<T> (public API: construct / insert / access / compare)
//! ├── growth   — pure 1.5x capacity policy (next_capacity, capacity_for)
//! ├── RawBuf   — one owned allocation: alloc/realloc/shrink/release
//! └── bulk move — overlap-tolerant ptr::copy for element shifting
//! ```
//!
//! Mutating operations ask the growth policy whether and how far to grow,
//! let `RawBuf` reallocate (preserving the prefix in place), shift any
//! displaced elements with a single overlap-tolerant bulk move, then write
//! the new values. Read paths index the buffer directly.
//!
//! # Capacity model
//!
//! - Growth is geometric at 1.5x — never doubling, never fixed-step — so
//!   N appends cost O(N) total with bounded wasted space.
//! - [`Vector::reserve`] takes an **absolute** capacity target and hits it
//!   exactly; [`Vector::shrink_to_fit`] trims to the length.
//! - [`Vector::new`] pre-allocates [`Vector::INITIAL_CAPACITY`] slots;
//!   [`Vector::empty`] / [`Vector::with_capacity`] give precise control.
//!
//! # Invalidation
//!
//! Any operation that changes capacity invalidates every raw pointer
//! previously obtained from [`Vector::as_ptr`] / [`Vector::as_mut_ptr`].
//! References and iterators are covered by the borrow checker and cannot
//! outlive a reallocation.
//!
//! # Example
//!
//! ```rust
//! use contig::{contig, Vector};
//!
//! let mut v = contig![1, 2, 3];
//! v.insert(0, 0);
//! v.push(4);
//! assert_eq!(v, [0, 1, 2, 3, 4]);
//!
//! let copy = v.clone();
//! assert_eq!(copy, v);
//! assert_ne!(copy.as_ptr(), v.as_ptr());
//!
//! assert_eq!(*v.at(2).unwrap(), 2);
//! assert!(v.at(99).is_err());
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for `Vector<T>` as a plain
//!   sequence.
//!
//! # Not goals
//!
//! `Vector` is not thread-safe beyond `Send`/`Sync` inheritance from `T`
//! (external synchronisation is the caller's job), is not a persistent
//! structure, and guarantees no layout beyond contiguity.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod growth;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public re-exports for the primary API surface.
pub use error::VecError;
pub use iter::IntoIter;
pub use vec::Vector;
