use log::info;

use super::store::{PreferenceStore, SubscriptionId};
use crate::definitions::ThemeMode;

/// The session-wide light/dark flag. Renderers derive their palette from it.
#[derive(Debug, Default)]
pub struct ThemePreference {
    store: PreferenceStore<ThemeMode>,
}

impl ThemePreference {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            store: PreferenceStore::new(mode),
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.store.get()
    }

    /// Sets the theme directly. Setting the active theme again is a no-op
    /// and does not notify.
    pub fn set_theme(&mut self, mode: ThemeMode) -> bool {
        let changed = self.store.set(mode);
        if changed {
            info!("Theme set to {}", mode);
        }
        changed
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.store.update(ThemeMode::toggle);
        info!("Theme switched to {}", next);
        next
    }

    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_scenario() {
        let mut prefs = ThemePreference::default();
        assert_eq!(prefs.theme(), ThemeMode::Light);
        prefs.toggle_theme();
        assert_eq!(prefs.theme(), ThemeMode::Dark);
        prefs.toggle_theme();
        assert_eq!(prefs.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_set_theme() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut prefs = ThemePreference::default();
        let sink = Rc::clone(&seen);
        prefs.subscribe(move |mode| sink.borrow_mut().push(mode));

        assert!(!prefs.set_theme(ThemeMode::Light));
        assert!(prefs.set_theme(ThemeMode::Dark));
        assert_eq!(prefs.theme(), ThemeMode::Dark);
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark]);
    }

    #[test]
    fn test_unsubscribed_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut prefs = ThemePreference::default();
        let counter = Rc::clone(&calls);
        let id = prefs.subscribe(move |_| *counter.borrow_mut() += 1);
        prefs.toggle_theme();
        assert!(prefs.unsubscribe(id));
        prefs.toggle_theme();
        assert_eq!(*calls.borrow(), 1);
    }
}
