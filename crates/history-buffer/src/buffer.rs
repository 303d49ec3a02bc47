//! Bounded FIFO implementation

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed-capacity FIFO: push evicts the oldest entry once full.
///
/// Eviction happens on push, never on read, so the buffer always holds the
/// most recent `capacity` entries in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedHistory<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Create a buffer holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest if at capacity
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when nothing has been retained
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest retained entry
    pub fn oldest(&self) -> Option<&T> {
        self.data.front()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&T> {
        self.data.back()
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// The `count` most recent entries, oldest of them first
    pub fn last_n(&self, count: usize) -> Vec<&T> {
        let skip = self.data.len().saturating_sub(count);
        self.data.iter().skip(skip).collect()
    }

    /// Drop all retained entries
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl BoundedHistory<u64> {
    /// Count timestamps within the trailing `window_ms` ending at `now_ms`
    pub fn count_within(&self, now_ms: u64, window_ms: u64) -> usize {
        self.data
            .iter()
            .filter(|&&ts| now_ms.saturating_sub(ts) <= window_ms)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_within_capacity() {
        let mut history = BoundedHistory::new(5);
        for i in 0..3u64 {
            history.push(i);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.oldest(), Some(&0));
        assert_eq!(history.latest(), Some(&2));
    }

    #[test]
    fn test_eviction_keeps_most_recent() {
        let mut history = BoundedHistory::new(30);
        for i in 0..40u64 {
            history.push(i);
        }
        assert_eq!(history.len(), 30);
        // 40 pushes into capacity 30: the first 10 are evicted and the
        // oldest survivor is the 11th push.
        assert_eq!(history.oldest(), Some(&10));
        assert_eq!(history.latest(), Some(&39));
    }

    #[test]
    fn test_count_within_window() {
        let mut history = BoundedHistory::new(100);
        history.push(0);
        history.push(10_000);
        history.push(70_000);
        // 60s trailing window at t=70s: t=0 expired, two remain
        assert_eq!(history.count_within(70_000, 60_000), 2);
        // at t=10s everything so far is in window
        assert_eq!(history.count_within(10_000, 60_000), 2);
    }

    #[test]
    fn test_last_n_order() {
        let mut history = BoundedHistory::new(10);
        for i in 0..7u64 {
            history.push(i);
        }
        let last = history.last_n(5);
        assert_eq!(last, vec![&2, &3, &4, &5, &6]);
    }

    #[test]
    fn test_clear() {
        let mut history = BoundedHistory::new(4);
        history.push(1u64);
        history.push(2);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.oldest(), None);
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(
            capacity in 1usize..64,
            values in proptest::collection::vec(any::<u64>(), 0..256),
        ) {
            let mut history = BoundedHistory::new(capacity);
            for v in &values {
                history.push(*v);
                prop_assert!(history.len() <= capacity);
            }
            let expected = values.len().min(capacity);
            prop_assert_eq!(history.len(), expected);
        }
    }
}
