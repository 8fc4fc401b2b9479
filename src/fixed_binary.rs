//! Fixed-capacity Binary Heap implementation
//!
//! An array-backed binary min-heap whose storage is reserved once, at creation,
//! and never grows. Ordering comes from a [`Comparator`] using the inverted
//! three-way contract, so the same type serves min-heaps, max-heaps and keyed
//! priority queues.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `with_capacity` | O(1)*      |
//! | `push`          | O(log n)   |
//! | `pop`           | O(log n)   |
//! | `peek`          | O(1)       |
//!
//! \* plus the cost of one allocation of `capacity` slots.
//!
//! # Example
//!
//! ```rust
//! use fixed_binary_heap::{FixedBinaryHeap, HeapError};
//!
//! let mut heap = FixedBinaryHeap::with_capacity(4).unwrap();
//! for value in [5, 3, 8, 1] {
//!     heap.push(value).unwrap();
//! }
//! assert!(heap.push(0).is_err());
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! heap.destroy();
//! ```

use std::fmt;

use crate::config::{EmptyPopPolicy, HeapConfig};
use crate::order::MinOrder;
use crate::traits::{Comparator, HeapError, PushError};

/// A fixed-capacity binary min-heap
///
/// The element at the top is always minimal under the comparator `C`: no other
/// stored element compares as "smaller" than it.
///
/// The heap exclusively owns its storage. Elements are stored by value; if `T`
/// is a reference or handle, the heap does not own what it points to.
pub struct FixedBinaryHeap<T, C = MinOrder> {
    /// Heap-ordered slots; `data.len()` is the size, never above `capacity`
    data: Vec<T>,
    capacity: usize,
    comparator: C,
    empty_pop_policy: EmptyPopPolicy,
}

impl<T: Ord> FixedBinaryHeap<T> {
    /// Creates an empty heap ordered by [`MinOrder`]
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailed`] if storage for `capacity` elements
    /// cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Self::with_capacity_and_comparator(capacity, MinOrder)
    }

    /// Creates an empty heap ordered by [`MinOrder`] from a [`HeapConfig`]
    pub fn from_config(config: HeapConfig) -> Result<Self, HeapError> {
        Self::from_config_with_comparator(config, MinOrder)
    }
}

impl<T, C: Comparator<T>> FixedBinaryHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailed`] if storage for `capacity` elements
    /// cannot be reserved. Nothing is leaked on failure.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Result<Self, HeapError> {
        Self::from_config_with_comparator(HeapConfig::new(capacity), comparator)
    }

    /// Creates an empty heap ordered by `comparator` from a [`HeapConfig`]
    pub fn from_config_with_comparator(config: HeapConfig, comparator: C) -> Result<Self, HeapError> {
        let capacity = config.capacity;
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailed { capacity })?;

        log::debug!("created heap with capacity {}", capacity);
        Ok(Self {
            data,
            capacity,
            comparator,
            empty_pop_policy: config.empty_pop_policy,
        })
    }

    /// Destroys the heap, dropping every remaining element and releasing storage
    ///
    /// Consuming `self` makes any further use a compile error. Letting the heap
    /// go out of scope has the same effect.
    pub fn destroy(self) {
        log::debug!(
            "destroying heap with capacity {} ({} elements left)",
            self.capacity,
            self.data.len()
        );
        drop(self);
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the fixed maximum number of elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the next push will be rejected
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Returns how many more elements can be pushed
    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the policy used by [`pop_or_exit`](Self::pop_or_exit)
    pub fn empty_pop_policy(&self) -> EmptyPopPolicy {
        self.empty_pop_policy
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element
    ///
    /// # Errors
    /// If the heap is full the element is handed back inside a [`PushError`],
    /// which converts into [`HeapError::Full`] with `?`.
    pub fn push(&mut self, element: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            log::trace!("rejected push: heap full (capacity {})", self.capacity);
            return Err(PushError::new(element, self.capacity));
        }

        self.data.push(element);
        self.sift_up();
        Ok(())
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            log::trace!("pop on empty heap");
            return Err(HeapError::Empty);
        }

        // Move the last element into the top slot, then sink it.
        let top = self.data.swap_remove(0);
        self.sift_down();
        Ok(top)
    }

    /// Removes and returns the top element, or `None` if the heap is empty
    pub fn try_pop(&mut self) -> Option<T> {
        self.pop().ok()
    }

    /// Removes and returns the top element, treating an empty heap as fatal
    ///
    /// With [`EmptyPopPolicy::Panic`] an empty heap panics. With
    /// [`EmptyPopPolicy::Exit`] it prints a diagnostic and terminates the
    /// process with exit status 1.
    pub fn pop_or_exit(&mut self) -> T {
        match self.pop() {
            Ok(top) => top,
            Err(err) => match self.empty_pop_policy {
                EmptyPopPolicy::Panic => panic!("{}", err),
                EmptyPopPolicy::Exit => {
                    log::error!("{}; terminating", err);
                    println!("[Error]: {}\nTerminating...", err);
                    std::process::exit(1);
                }
            },
        }
    }

    /// Drops every element, keeping the reserved storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pushes every element of `iter` in order
    ///
    /// # Errors
    /// Stops at the first element that does not fit and returns it. Elements
    /// already pushed stay in the heap; the rest of `iter` is not consumed.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), PushError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.push(element)?;
        }
        Ok(())
    }

    /// Consumes the heap, returning its elements in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(top) = self.try_pop() {
            sorted.push(top);
        }
        sorted
    }

    /// Moves the last element up while its parent is "bigger"
    fn sift_up(&mut self) {
        if self.data.len() <= 1 {
            return;
        }

        let mut index = self.data.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.comparator.is_bigger(&self.data[parent], &self.data[index]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the top element down while a child is "smaller"
    ///
    /// The right child is promoted only if it is strictly smaller than both the
    /// sinking element and the left child; every other case prefers the left.
    fn sift_down(&mut self) {
        let len = self.data.len();
        if len <= 1 {
            return;
        }

        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let next = if right < len
                && self.comparator.is_bigger(&self.data[index], &self.data[right])
                && self.comparator.is_smaller(&self.data[right], &self.data[left])
            {
                right
            } else if self.comparator.is_bigger(&self.data[index], &self.data[left]) {
                left
            } else {
                break;
            };

            self.data.swap(index, next);
            index = next;
        }
    }

    /// Returns true if no parent is "bigger" than either of its children
    #[cfg(test)]
    pub(crate) fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            !self
                .comparator
                .is_bigger(&self.data[(i - 1) / 2], &self.data[i])
        })
    }
}

impl<T: fmt::Debug, C> fmt::Debug for FixedBinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBinaryHeap")
            .field("capacity", &self.capacity)
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}
