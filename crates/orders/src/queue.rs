use std::collections::VecDeque;

use warehouse_core::OrderId;

/// FIFO queue of pending order ids.
///
/// Dequeuing from an empty queue yields `None`; every `i64` (negative ones
/// included) is a valid order id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQueue {
    pending: VecDeque<OrderId>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the rear. O(1).
    pub fn enqueue(&mut self, id: OrderId) {
        self.pending.push_back(id);
    }

    /// Remove and return the front order. O(1).
    pub fn dequeue(&mut self) -> Option<OrderId> {
        self.pending.pop_front()
    }

    pub fn front(&self) -> Option<OrderId> {
        self.pending.front().copied()
    }

    /// Pending orders, front to rear.
    pub fn iter(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.pending.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
