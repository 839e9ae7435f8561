//! Unbounded FIFO of pending events.

use std::collections::VecDeque;

use crate::core::Publisher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQueue<E> {
    events: VecDeque<E>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    pub fn publish(&mut self, event: E) {
        self.events.push_back(event);
    }

    /// Drain everything queued so far, oldest first
    pub fn take_all(&mut self) -> Vec<E> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Publisher<E> for EventQueue<E> {
    fn publish(&mut self, event: E) {
        self.events.push_back(event);
    }
}

impl<E> Extend<E> for EventQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_all_preserves_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.publish(1);
        queue.publish(2);
        queue.extend([3, 4]);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.take_all(), vec![1, 2, 3, 4]);
        assert!(queue.is_empty());
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn works_as_a_publisher() {
        fn send<P: Publisher<&'static str>>(sink: &mut P) {
            sink.publish("eats");
        }
        let mut queue = EventQueue::new();
        send(&mut queue);
        assert_eq!(queue.take_all(), vec!["eats"]);
    }
}
