//! Dense bit-set views over word-packed storage.
//!
//! This crate provides [`Bitset`], a non-owning view that treats a slice of
//! 64-bit [`Word`]s as a set of non-negative integers: the element `v` is a
//! member when bit `v % 64` of word `v / 64` is set. The owner of the words
//! decides how much storage exists; the view supplies the set operations.
//!
//! # Features
//!
//! - **Compile-time access control**: [`BitsetRef`] observes, [`BitsetMut`]
//!   mutates
//! - **Ordered traversal** with [`BitPosition`] indices: successor,
//!   predecessor, signed distance and offsets
//! - **Range algebra**: union, intersection, symmetric difference and
//!   subtraction against `start..end`, plus subset/superset/equality tests
//! - **Scratch storage** via [`with_temporary_bitset`], inline for small sizes
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use dense_bitset::{Bitset, Word};
//!
//! let mut storage = [Word::EMPTY; 2];
//! let mut bits = Bitset::new(&mut storage[..]);
//!
//! bits.form_union(10..70);
//! bits.form_intersection(20..130);
//! bits.subtract(60..65);
//!
//! assert_eq!(bits.count(), 45);
//! assert_eq!(bits.first(), Some(20));
//! assert_eq!(bits.last(), Some(69));
//!
//! // Walk the members through positions
//! let mut pos = bits.start_index();
//! let mut seen = Vec::new();
//! while pos != bits.end_index() {
//!     seen.push(pos.value());
//!     pos = bits.index_after(pos);
//! }
//! assert_eq!(seen, bits.iter().collect::<Vec<_>>());
//! ```
//!
//! # Performance
//!
//! - Membership tests and single-element updates are O(1)
//! - Counting, range operations and long walks are O(n) in the number of
//!   words
//! - Stepping to a neighbouring member is O(1) amortized

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
mod iter;
mod macros;
mod position;
#[cfg(feature = "serde")]
mod ser;
mod set_ops;
pub mod storage;
mod traits;
mod traversal;
mod word;

// Re-exports
pub use bitset::{Bitset, BitsetMut, BitsetRef, word_count};
pub use iter::Iter;
pub use position::BitPosition;
pub use storage::with_temporary_bitset;
pub use traits::CapacityError;
pub use word::Word;
