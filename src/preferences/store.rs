//! Observable single-value store shared by the language and theme preferences.

use std::fmt;

/// Handle returned by [`PreferenceStore::subscribe`], used to detach a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(T)>;

/// Holds one enumerated setting and notifies listeners when it changes.
///
/// Listeners run synchronously, in subscription order, before the mutating
/// call returns.
pub struct PreferenceStore<T> {
    value: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T: fmt::Debug> fmt::Debug for PreferenceStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Default + Copy + PartialEq> Default for PreferenceStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + PartialEq> PreferenceStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> T {
        self.value
    }

    /// Stores `value` and notifies listeners. Returns `false` without
    /// notifying when the value is unchanged.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notify();
        true
    }

    pub fn update(&mut self, f: impl FnOnce(T) -> T) -> T {
        let next = f(self.value);
        self.set(next);
        self.value
    }

    pub fn subscribe(&mut self, listener: impl FnMut(T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let value = self.value;
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_set_notifies_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = PreferenceStore::new(1u8);

        let first = Rc::clone(&seen);
        store.subscribe(move |v| first.borrow_mut().push(("first", v)));
        let second = Rc::clone(&seen);
        store.subscribe(move |v| second.borrow_mut().push(("second", v)));

        assert!(store.set(2));
        assert_eq!(*seen.borrow(), vec![("first", 2), ("second", 2)]);
    }

    #[test]
    fn test_set_same_value_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = PreferenceStore::new(true);
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(!store.set(true));
        assert_eq!(*calls.borrow(), 0);
        assert!(store.set(false));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = PreferenceStore::new(0i32);
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        assert_eq!(store.subscriber_count(), 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(5);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(store.get(), 5);
    }

    #[test]
    fn test_update_returns_new_value() {
        let mut store = PreferenceStore::new(3i32);
        assert_eq!(store.update(|v| v * 2), 6);
        assert_eq!(store.get(), 6);
    }
}
