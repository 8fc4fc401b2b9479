//! Fixed-capacity Binary Min-Heap for Rust
//!
//! This crate provides [`FixedBinaryHeap`], an array-backed binary heap with a
//! capacity fixed at creation and an ordering supplied by the caller. It is meant
//! to be embedded in schedulers, graph searches and similar code that needs
//! ordered removal with O(log n) insert and extract and no hidden reallocation.
//!
//! # Features
//!
//! - **Fixed capacity**: storage is reserved once; a push beyond capacity is
//!   rejected with a [`PushError`] that hands the element back
//! - **Typed failures**: allocation failure, full heap and empty heap are all
//!   variants of [`HeapError`]; nothing in the library aborts unless asked to
//!   via [`EmptyPopPolicy::Exit`]
//! - **Pluggable ordering**: any [`Comparator`], including closures and the
//!   ready-made comparators in [`order`]
//! - **No use after destroy**: [`FixedBinaryHeap::destroy`] consumes the heap
//!
//! # Example
//!
//! ```rust
//! use fixed_binary_heap::{FixedBinaryHeap, HeapError};
//!
//! fn drain_two() -> Result<(u32, u32), HeapError> {
//!     let mut heap = FixedBinaryHeap::with_capacity(3)?;
//!     heap.push(30)?;
//!     heap.push(10)?;
//!     heap.push(20)?;
//!     Ok((heap.pop()?, heap.pop()?))
//! }
//!
//! assert_eq!(drain_two(), Ok((10, 20)));
//! ```
//!
//! # Thread safety
//!
//! The heap has no internal synchronization. It is `Send`/`Sync` when its
//! element and comparator types are; share it across threads behind a `Mutex`.

pub mod config;
pub mod fixed_binary;
pub mod order;
pub mod traits;

// Re-export the main types for convenience
pub use config::{EmptyPopPolicy, HeapConfig};
pub use fixed_binary::FixedBinaryHeap;
pub use traits::{Comparator, HeapError, PushError};
