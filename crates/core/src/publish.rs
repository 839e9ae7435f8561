//! Outbound event sink used by game cores.
//!
//! A core that needs to react to its own state on a later frame (the snake
//! reaching the apple) publishes an event instead of acting immediately. The
//! pump collects published events and delivers them with the next batch.

use std::collections::VecDeque;

pub trait Publisher<E> {
    fn publish(&mut self, event: E);
}

impl<E> Publisher<E> for Vec<E> {
    fn publish(&mut self, event: E) {
        self.push(event);
    }
}

impl<E> Publisher<E> for VecDeque<E> {
    fn publish(&mut self, event: E) {
        self.push_back(event);
    }
}

impl<E, P: Publisher<E> + ?Sized> Publisher<E> for &mut P {
    fn publish(&mut self, event: E) {
        (**self).publish(event);
    }
}
