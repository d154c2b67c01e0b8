//! Small-size-optimised index lists and a spin-locked bounded queue.
//!
//! - [`HybridList`] keeps its first `N` elements inline and spills the rest
//!   to a heap `Vec`, preserving the invariant that the inline segment is
//!   full whenever the overflow segment is non-empty.
//! - [`HybridListArray`] owns a growable array of hybrid lists and releases
//!   every child's storage when cleared or dropped.
//! - [`BoundedQueue`] is a fixed-capacity ring buffer shared by value
//!   between worker threads, guarded by a [`SpinLock`].
//!
//! This crate contains bounded `unsafe` in `spin.rs` only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod hybrid;
pub mod queue;
pub mod spin;

pub use array::HybridListArray;
pub use hybrid::{HybridIndexList, HybridList};
pub use queue::BoundedQueue;
pub use spin::{SpinLock, SpinLockGuard};
