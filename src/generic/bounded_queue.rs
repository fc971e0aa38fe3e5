//! A queue of the most recent values pushed, with a running sum.
//!
//! Used to track the recent lbd of learnt clauses and the recent length of the trail when deciding whether to restart.
//!
//! ```rust
//! # use otter_red::generic::bounded_queue::BoundedQueue;
//! let mut queue = BoundedQueue::new(3);
//!
//! queue.push(2);
//! queue.push(4);
//! assert!(!queue.is_full());
//!
//! queue.push(6);
//! queue.push(8);
//! assert!(queue.is_full());
//! assert_eq!(queue.average(), 6.0);
//! ```

use std::collections::VecDeque;

pub struct BoundedQueue {
    values: VecDeque<u64>,
    capacity: usize,
    sum: u64,
}

impl BoundedQueue {
    /// A queue holding at most `capacity` values, with a capacity of at least one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        BoundedQueue {
            values: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0,
        }
    }

    /// Pushes `value`, dropping the oldest value if the queue is full.
    pub fn push(&mut self, value: u64) {
        if self.values.len() == self.capacity {
            if let Some(oldest) = self.values.pop_front() {
                self.sum -= oldest;
            }
        }
        self.values.push_back(value);
        self.sum += value;
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// The average of the values in the queue, or zero if the queue is empty.
    pub fn average(&self) -> f64 {
        match self.values.len() {
            0 => 0.0,
            length => self.sum as f64 / length as f64,
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.sum = 0;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest() {
        let mut queue = BoundedQueue::new(2);
        queue.push(10);
        queue.push(20);
        queue.push(30);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.average(), 25.0);
    }

    #[test]
    fn clear_resets_sum() {
        let mut queue = BoundedQueue::new(4);
        queue.push(7);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.average(), 0.0);

        queue.push(3);
        assert_eq!(queue.average(), 3.0);
    }
}
