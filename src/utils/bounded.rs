//! Bounded deque for capped histories
//!
//! Fixed-capacity deque that drops its oldest item once full.

use std::collections::VecDeque;

/// A bounded deque with FIFO eviction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedDeque<T> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T> BoundedDeque<T> {
    /// Create a deque holding at most `cap` items. With 0, pushes are no-ops.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(1024)),
        }
    }

    /// Push a new value, evicting the oldest if at capacity
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Items from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Most recent item
    pub fn last(&self) -> Option<&T> {
        self.buf.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut deque = BoundedDeque::new(3);
        for i in 1..=4 {
            deque.push(i);
        }
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(deque.last(), Some(&4));
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut deque = BoundedDeque::new(0);
        deque.push(1);
        assert!(deque.is_empty());
    }
}
