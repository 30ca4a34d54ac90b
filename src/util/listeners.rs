/// Token returned by [`Subscribers::subscribe`]; pass it back to
/// [`Subscribers::unsubscribe`] to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A registry of listeners notified synchronously on change. Used for both
/// store-state and session-identity notifications.
pub struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Subscribers {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the token was already removed
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Notify every listener, in subscription order
    pub fn emit(&mut self, value: &T) {
        for (_, listener) in &mut self.entries {
            listener(value);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Subscribers::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_every_listener_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<u32> = Subscribers::new();

        let first = Rc::clone(&seen);
        subs.subscribe(move |v| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&seen);
        subs.subscribe(move |v| second.borrow_mut().push(("second", *v)));

        subs.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_removes_exactly_one_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut subs: Subscribers<()> = Subscribers::new();

        let keep = Rc::clone(&count);
        subs.subscribe(move |()| *keep.borrow_mut() += 1);
        let drop_me = Rc::clone(&count);
        let token = subs.subscribe(move |()| *drop_me.borrow_mut() += 10);

        assert!(subs.unsubscribe(token));
        assert!(!subs.unsubscribe(token));

        subs.emit(&());
        assert_eq!(*count.borrow(), 1);
        assert_eq!(subs.len(), 1);
    }
}
