use crate::util::listeners::{SubscriberId, Subscribers};

/// Tracks the current authenticated identity and notifies listeners when it
/// changes. The store depends only on the opaque identity string; credential
/// exchange lives entirely outside this crate, which calls
/// [`SessionTracker::set_user`] when sign-in state changes.
#[derive(Default)]
pub struct SessionTracker {
    current: Option<String>,
    subscribers: Subscribers<Option<String>>,
}

impl SessionTracker {
    /// Signed-out tracker
    pub fn new() -> Self {
        SessionTracker::default()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Update the identity; listeners fire only on an actual change
    pub fn set_user(&mut self, user: Option<String>) {
        if self.current == user {
            return;
        }
        self.current = user;
        let snapshot = self.current.clone();
        self.subscribers.emit(&snapshot);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Option<String>) + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_on_change_only() {
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let mut session = SessionTracker::new();

        let sink = Rc::clone(&seen);
        session.subscribe(move |user| sink.borrow_mut().push(user.clone()));

        session.set_user(Some("user-1".into()));
        session.set_user(Some("user-1".into())); // no change, no event
        session.set_user(None);

        assert_eq!(*seen.borrow(), vec![Some("user-1".to_string()), None]);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn unsubscribed_listener_stops_firing() {
        let count = Rc::new(RefCell::new(0));
        let mut session = SessionTracker::new();

        let sink = Rc::clone(&count);
        let token = session.subscribe(move |_| *sink.borrow_mut() += 1);

        session.set_user(Some("user-1".into()));
        assert!(session.unsubscribe(token));
        session.set_user(None);

        assert_eq!(*count.borrow(), 1);
    }
}
