//! Ready-made comparators
//!
//! All of these implement [`Comparator`] under its inverted contract, so they can
//! be handed straight to [`FixedBinaryHeap`](crate::FixedBinaryHeap).
//!
//! | Comparator              | Pops first                               |
//! |-------------------------|------------------------------------------|
//! | [`MinOrder`]            | smallest by `Ord` (the default)          |
//! | [`MaxOrder`]            | largest by `Ord`                         |
//! | [`ByKey`]               | smallest extracted key                   |
//! | [`ConventionalOrder`]   | whatever a conventional comparator puts first |

use std::cmp::Ordering;

use crate::traits::Comparator;

/// Natural ascending order: the smallest element by [`Ord`] pops first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord> Comparator<T> for MinOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Natural descending order: the largest element by [`Ord`] pops first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord> Comparator<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Ascending order of a key extracted from each element
///
/// # Example
///
/// ```rust
/// use fixed_binary_heap::FixedBinaryHeap;
/// use fixed_binary_heap::order::ByKey;
///
/// let mut jobs = FixedBinaryHeap::with_capacity_and_comparator(
///     3,
///     ByKey::new(|job: &(u32, &'static str)| job.0),
/// )
/// .unwrap();
/// jobs.push((20, "compact")).unwrap();
/// jobs.push((5, "flush")).unwrap();
/// assert_eq!(jobs.pop(), Ok((5, "flush")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates a comparator ordering elements by `key(element)`, smallest first
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(b).cmp(&(self.key)(a))
    }
}

/// Adapts a conventional comparator into the inverted contract
///
/// A conventional comparator (like [`Ord::cmp`]) returns `Less` when `a` comes
/// first. Wrapping it here makes the elements it orders first pop first.
#[derive(Debug, Clone, Copy)]
pub struct ConventionalOrder<F> {
    cmp: F,
}

impl<F> ConventionalOrder<F> {
    /// Wraps a conventional `Fn(&T, &T) -> Ordering`
    pub fn new(cmp: F) -> Self {
        Self { cmp }
    }
}

impl<T, F> Comparator<T> for ConventionalOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b).reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order_is_inverted() {
        assert_eq!(MinOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(MinOrder.compare(&2, &1), Ordering::Less);
        assert_eq!(MinOrder.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn test_max_order_is_inverted() {
        assert!(MaxOrder.is_smaller(&9, &1));
        assert!(MaxOrder.is_bigger(&1, &9));
    }

    #[test]
    fn test_by_key() {
        let by_len = ByKey::new(|s: &String| s.len());
        assert!(by_len.is_smaller(&"a".to_string(), &"abc".to_string()));
        assert_eq!(
            by_len.compare(&"ab".to_string(), &"cd".to_string()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_conventional_order_matches_min_order() {
        let conventional = ConventionalOrder::new(|a: &i32, b: &i32| a.cmp(b));
        for (a, b) in [(1, 2), (2, 1), (5, 5), (-3, 7)] {
            assert_eq!(conventional.compare(&a, &b), MinOrder.compare(&a, &b));
        }
    }
}
