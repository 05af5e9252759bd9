// SPDX-License-Identifier: MPL-2.0
//! A minimal single-subscriber observable cell.
//!
//! The subscriber runs synchronously on every write, and once eagerly when
//! registered, so derived state is in sync from the moment of wiring.
//! Re-entrant writes are unrepresentable: the subscriber executes under the
//! cell's unique mutable borrow.

pub struct Observable<T> {
    value: T,
    subscriber: Option<Box<dyn FnMut(&T)>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscriber: None,
        }
    }

    pub fn get(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Writes the value and notifies the subscriber, if any.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Registers the subscriber (replacing any previous one) and invokes it
    /// immediately with the current value.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) {
        self.subscriber = Some(Box::new(subscriber));
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&self.value);
        }
    }
}
