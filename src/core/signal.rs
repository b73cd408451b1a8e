//! synchronous ordered-subscriber broadcast
//!
//! Stands in for a toolkit signal/slot mechanism. Subscribers run on the
//! caller's thread, in registration order, and return nothing. Emission
//! snapshots the subscriber list first, so a handler may connect or
//! disconnect without invalidating the ongoing broadcast; subscribers added
//! during an emission are not invoked by it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Token identifying one connection, used to disconnect it later.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Subscription(u64);

pub struct Signal<T: 'static> {
    subscribers: RefCell<Vec<(u64, Rc<dyn Fn(&T)>)>>,
    next_token: Cell<u64>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Signal<T> {
        Signal {
            subscribers: RefCell::new(Vec::new()),
            next_token: Cell::new(1),
        }
    }

    pub fn connect(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let token = self.next_token.get();
        self.next_token.set(token + 1);
        self.subscribers.borrow_mut().push((token, Rc::new(handler)));
        Subscription(token)
    }

    /// Disconnecting an already-disconnected subscription is a no-op.
    pub fn disconnect(&self, subscription: Subscription) {
        self.subscribers.borrow_mut().retain(|(token, _)| *token != subscription.0);
    }

    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Rc<dyn Fn(&T)>> =
            self.subscribers.borrow().iter().map(|(_, handler)| Rc::clone(handler)).collect();
        for handler in snapshot {
            handler(value);
        }
    }

    pub fn subscriber_count(&self) -> usize { self.subscribers.borrow().len() }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Signal<T> { Signal::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_in_registration_order() {
        let signal = Signal::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = Rc::clone(&log);
        signal.connect(move |v: &i32| l.borrow_mut().push(("first", *v)));
        let l = Rc::clone(&log);
        signal.connect(move |v: &i32| l.borrow_mut().push(("second", *v)));

        signal.emit(&7);
        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::new();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        let sub = signal.connect(move |_: &()| c.set(c.get() + 1));
        signal.emit(&());
        signal.disconnect(sub);
        signal.emit(&());
        // idempotent
        signal.disconnect(sub);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_connect_during_emit_not_invoked_same_broadcast() {
        let signal = Rc::new(Signal::new());
        let count = Rc::new(Cell::new(0));

        let s = Rc::clone(&signal);
        let c = Rc::clone(&count);
        signal.connect(move |_: &()| {
            let c = Rc::clone(&c);
            s.connect(move |_: &()| c.set(c.get() + 1));
        });

        signal.emit(&());
        assert_eq!(count.get(), 0);
        signal.emit(&());
        assert_eq!(count.get(), 1);
    }
}
