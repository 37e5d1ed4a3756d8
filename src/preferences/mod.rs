//! Session preferences driving every visible language and theme difference.
//!
//! `Preferences` is constructed once per session and passed by reference to
//! the presentation components. Nothing else owns a copy of the language or
//! the theme.

mod language;
mod store;
mod theme;

pub use language::LanguagePreference;
pub use store::{PreferenceStore, SubscriptionId};
pub use theme::ThemePreference;

use std::cell::Cell;
use std::rc::Rc;

use crate::definitions::{LanguageCode, ThemeMode};
use crate::i18n::LabelPair;

#[derive(Debug, Default)]
pub struct Preferences {
    pub language: LanguagePreference,
    pub theme: ThemePreference,
}

/// Listener handles for a flag subscribed to both stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawSubscription {
    pub language: SubscriptionId,
    pub theme: SubscriptionId,
}

impl Preferences {
    pub fn new(language: LanguageCode, theme: ThemeMode) -> Self {
        Self {
            language: LanguagePreference::new(language),
            theme: ThemePreference::new(theme),
        }
    }

    /// Shorthand for resolving a label against the active language.
    pub fn t(&self, pair: &LabelPair) -> &'static str {
        self.language.resolve(pair)
    }

    /// Raises `flag` whenever either store changes.
    pub fn subscribe_redraw(&mut self, flag: Rc<Cell<bool>>) -> RedrawSubscription {
        let on_language = Rc::clone(&flag);
        let language = self.language.subscribe(move |_| on_language.set(true));
        let theme = self.theme.subscribe(move |_| flag.set(true));
        RedrawSubscription { language, theme }
    }

    pub fn unsubscribe_redraw(&mut self, subscription: RedrawSubscription) {
        self.language.unsubscribe(subscription.language);
        self.theme.unsubscribe(subscription.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    #[test]
    fn test_fresh_session_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.language.language(), LanguageCode::En);
        assert_eq!(prefs.theme.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_redraw_flag_raised_by_either_store() {
        let flag = Rc::new(Cell::new(false));
        let mut prefs = Preferences::default();
        let subscription = prefs.subscribe_redraw(Rc::clone(&flag));

        prefs.language.toggle_language();
        assert!(flag.replace(false));
        prefs.theme.toggle_theme();
        assert!(flag.replace(false));
        prefs.theme.set_theme(ThemeMode::Dark);
        assert!(!flag.get());

        prefs.unsubscribe_redraw(subscription);
        prefs.language.toggle_language();
        assert!(!flag.get());
    }

    #[test]
    fn test_resolve_follows_language() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.t(&i18n::NEW_QUERY), "New query");
        prefs.language.toggle_language();
        assert_eq!(prefs.t(&i18n::NEW_QUERY), "Ny forespørgsel");
    }
}
