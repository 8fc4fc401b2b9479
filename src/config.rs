//! Runtime configuration for [`FixedBinaryHeap`](crate::FixedBinaryHeap)

/// What [`FixedBinaryHeap::pop_or_exit`](crate::FixedBinaryHeap::pop_or_exit)
/// does when the heap is empty
///
/// [`FixedBinaryHeap::pop`](crate::FixedBinaryHeap::pop) is unaffected and always
/// returns [`HeapError::Empty`](crate::HeapError::Empty).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPopPolicy {
    /// Panic with the empty-heap message. Can be caught with `catch_unwind`.
    #[default]
    Panic,
    /// Print a diagnostic to stdout and terminate the process with status 1
    Exit,
}

/// Parameters for building a heap
///
/// # Example
///
/// ```rust
/// use fixed_binary_heap::{EmptyPopPolicy, FixedBinaryHeap, HeapConfig};
///
/// let config = HeapConfig::new(16).empty_pop_policy(EmptyPopPolicy::Exit);
/// let heap: FixedBinaryHeap<u64> = FixedBinaryHeap::from_config(config).unwrap();
/// assert_eq!(heap.capacity(), 16);
/// assert_eq!(heap.empty_pop_policy(), EmptyPopPolicy::Exit);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapConfig {
    /// Maximum number of elements the heap can hold
    pub capacity: usize,
    /// Behaviour of `pop_or_exit` on an empty heap
    pub empty_pop_policy: EmptyPopPolicy,
}

impl HeapConfig {
    /// Creates a configuration with the given capacity and the default policy
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            empty_pop_policy: EmptyPopPolicy::default(),
        }
    }

    /// Sets the empty-pop policy
    pub fn empty_pop_policy(mut self, policy: EmptyPopPolicy) -> Self {
        self.empty_pop_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeapConfig::new(4);
        assert_eq!(config.capacity, 4);
        assert_eq!(config.empty_pop_policy, EmptyPopPolicy::Panic);
        assert_eq!(HeapConfig::default().capacity, 0);
    }

    #[test]
    fn test_builder_sets_policy() {
        let config = HeapConfig::new(1).empty_pop_policy(EmptyPopPolicy::Exit);
        assert_eq!(config.empty_pop_policy, EmptyPopPolicy::Exit);
    }
}
