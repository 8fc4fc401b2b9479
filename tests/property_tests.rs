//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the heap
//! invariants are always maintained, using `std::collections::BinaryHeap` as an
//! oracle for the minimum.

use proptest::prelude::*;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fixed_binary_heap::order::{ByKey, MaxOrder};
use fixed_binary_heap::{FixedBinaryHeap, HeapError};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
    ]
}

proptest! {
    /// Pop always returns the minimum of the stored elements
    #[test]
    fn prop_pop_returns_minimum(
        capacity in 0usize..64,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let mut heap = FixedBinaryHeap::with_capacity(capacity).unwrap();
        let mut oracle = BinaryHeap::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    let result = heap.push(value);
                    if oracle.len() < capacity {
                        prop_assert!(result.is_ok());
                        oracle.push(Reverse(value));
                    } else {
                        prop_assert_eq!(result.unwrap_err().into_element(), value);
                    }
                }
                Op::Pop => {
                    let expected = oracle.pop().map(|Reverse(v)| v).ok_or(HeapError::Empty);
                    prop_assert_eq!(heap.pop(), expected);
                }
            }

            prop_assert_eq!(heap.len(), oracle.len());
            prop_assert_eq!(heap.peek().copied(), oracle.peek().map(|Reverse(v)| *v));
        }
    }

    /// Pushing n elements then popping n times sorts them
    #[test]
    fn prop_sort_equivalence(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut heap = FixedBinaryHeap::with_capacity(values.len()).unwrap();
        heap.try_extend(values.iter().copied()).unwrap();

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    /// A max-ordered heap sorts descending
    #[test]
    fn prop_max_order_sorts_descending(values in prop::collection::vec(any::<u16>(), 0..300)) {
        let mut heap = FixedBinaryHeap::with_capacity_and_comparator(values.len(), MaxOrder).unwrap();
        heap.try_extend(values.iter().copied()).unwrap();

        let mut expected = values;
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    /// Keyed ordering pops keys in non-decreasing order and keeps every payload
    #[test]
    fn prop_keyed_pops_are_non_decreasing(
        entries in prop::collection::vec((0u8..16, any::<u32>()), 0..200),
    ) {
        let mut heap = FixedBinaryHeap::with_capacity_and_comparator(
            entries.len(),
            ByKey::new(|e: &(u8, u32)| e.0),
        )
        .unwrap();
        heap.try_extend(entries.iter().copied()).unwrap();

        let popped = heap.into_sorted_vec();
        prop_assert!(popped.windows(2).all(|w| w[0].0 <= w[1].0));

        let mut popped_sorted = popped;
        popped_sorted.sort();
        let mut entries_sorted = entries;
        entries_sorted.sort();
        prop_assert_eq!(popped_sorted, entries_sorted);
    }

    /// Push into an empty heap followed by pop returns the same element
    #[test]
    fn prop_round_trip(value in any::<i32>(), capacity in 1usize..8) {
        let mut heap = FixedBinaryHeap::with_capacity(capacity).unwrap();
        heap.push(value).unwrap();
        prop_assert_eq!(heap.pop(), Ok(value));
        prop_assert_eq!(heap.pop(), Err(HeapError::Empty));
    }
}
