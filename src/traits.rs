//! Common traits and error types for the heap
//!
//! This module provides the seam between the heap and the ordering it uses:
//!
//! - [`Comparator`]: the inverted three-way comparison that drives sift-up and sift-down
//! - [`HeapError`]: failures reported by heap construction, `push` and `pop`
//! - [`PushError`]: a rejected push, handing the element back to the caller
//!
//! Ready-made comparators live in [`crate::order`].

use std::cmp::Ordering;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Backing storage for `capacity` elements could not be reserved
    AllocationFailed {
        /// The capacity that was requested
        capacity: usize,
    },
    /// The heap already holds `capacity` elements
    Full {
        /// The fixed capacity of the heap
        capacity: usize,
    },
    /// `pop` was called on a heap with no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::AllocationFailed { capacity } => {
                write!(f, "failed to allocate storage for {} elements", capacity)
            }
            HeapError::Full { capacity } => {
                write!(f, "heap is full (capacity {})", capacity)
            }
            HeapError::Empty => write!(f, "attempting to get element from empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// A push that was rejected because the heap was full
///
/// The element is handed back so the caller can retry, reroute or drop it.
/// Converts into [`HeapError::Full`] with `?`.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    element: T,
    capacity: usize,
}

impl<T> PushError<T> {
    pub(crate) fn new(element: T, capacity: usize) -> Self {
        Self { element, capacity }
    }

    /// Returns a reference to the rejected element
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns the rejected element
    pub fn into_element(self) -> T {
        self.element
    }

    /// Returns the capacity of the heap that rejected the element
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// Hand-written so that `T: Debug` is not required to `unwrap()` a push result.
impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        HeapError::Full {
            capacity: self.capacity,
        }
        .fmt(f)
    }
}

impl<T> std::error::Error for PushError<T> {}

impl<T> From<PushError<T>> for HeapError {
    fn from(err: PushError<T>) -> Self {
        HeapError::Full {
            capacity: err.capacity,
        }
    }
}

/// Three-way comparison defining heap priority
///
/// The contract is the *inverse* of [`Ord::cmp`]:
///
/// | `compare(a, b)`     | Meaning                                           |
/// |---------------------|---------------------------------------------------|
/// | `Ordering::Equal`   | `a` and `b` have the same priority                |
/// | `Ordering::Less`    | `a` is "bigger": lower priority, sinks to the bottom |
/// | `Ordering::Greater` | `a` is "smaller": higher priority, rises to the top  |
///
/// The heap only relies on consistent pairwise answers, not on a total order.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator under this contract.
/// To reuse a conventional comparator, wrap it in
/// [`ConventionalOrder`](crate::order::ConventionalOrder).
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use fixed_binary_heap::Comparator;
///
/// // Shorter strings have higher priority.
/// let shortest_first = |a: &&str, b: &&str| b.len().cmp(&a.len());
/// assert_eq!(shortest_first.compare(&"ab", &"abc"), Ordering::Greater);
/// ```
pub trait Comparator<T> {
    /// Compares `a` against `b` under the inverted contract described above
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` has strictly lower priority than `b`
    #[inline]
    fn is_bigger(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if `a` has strictly higher priority than `b`
    #[inline]
    fn is_smaller(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
