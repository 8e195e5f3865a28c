//! # Compactly
//!
//! A hybrid compressed bitmap for Rust.
//!
//! This crate provides [`CompressedBitSet`], a set of `u32` positions that
//! picks its own storage: a short position list while the set is sparse, a
//! packed 32-bit word array once it grows, and a run-length control-word
//! stream when compacted. All three answer the same queries; promotion and
//! materialization happen behind the API.
//!
//! ## Quick Start
//!
//! ```
//! use compactly::CompressedBitSet;
//!
//! let mut set = CompressedBitSet::new();
//! set.set(2, true);
//! set.set(5, true);
//! set.set(31, true);
//!
//! assert!(set.get(5));
//! assert_eq!(set.count_ones(), 3);
//!
//! // The compressed words are the wire format: persist or transmit them,
//! // then rebuild an equivalent set.
//! let wire = set.to_compressed();
//! let restored = CompressedBitSet::from_compressed(wire).unwrap();
//! assert!(restored.get(5));
//! ```
//!
//! ## Storage forms
//!
//! - **Sparse**: positions stored as a list, cheap while few bits are set.
//!   An insert that pushes the list past the dense break-even point promotes
//!   the set to dense form, one way only.
//! - **Dense**: one bit per position in 32-bit words, most significant bit
//!   first within each word.
//! - **Compressed**: the dense words re-coded as 31-bit groups with
//!   run-length control words (see [`encode`]). [`CompressedBitSet::compact`]
//!   switches to this form; any mutation decodes back to dense.
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` impls; disable for `no_std` + `alloc`
//! - `serde` - serialize a set as its compressed words, deserialize with
//!   stream validation
//!
//! ## Concurrency
//!
//! The set has no internal lock. Mutation takes `&mut self`, so the borrow
//! checker enforces the single-writer rule at compile time, and the binary
//! operators borrow both operands shared. Share a set across threads behind
//! your own `RwLock` or `Mutex`.

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod bitset;
mod codec;
mod dense;
mod sparse;

pub use bitset::{CompressedBitSet, Mode, Ones};
pub use codec::{DecodeError, decode, encode};
