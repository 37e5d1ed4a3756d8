use log::info;

use super::store::{PreferenceStore, SubscriptionId};
use crate::definitions::LanguageCode;
use crate::i18n::LabelPair;

/// The active display language of the session.
#[derive(Debug, Default)]
pub struct LanguagePreference {
    store: PreferenceStore<LanguageCode>,
}

impl LanguagePreference {
    pub fn new(language: LanguageCode) -> Self {
        Self {
            store: PreferenceStore::new(language),
        }
    }

    pub fn language(&self) -> LanguageCode {
        self.store.get()
    }

    /// Flips between English and Danish. Subscribers have seen the new
    /// language by the time this returns.
    pub fn toggle_language(&mut self) -> LanguageCode {
        let next = self.store.update(LanguageCode::toggle);
        info!("Language switched to {}", next);
        next
    }

    pub fn set_language(&mut self, language: LanguageCode) -> bool {
        let changed = self.store.set(language);
        if changed {
            info!("Language set to {}", language);
        }
        changed
    }

    pub fn resolve(&self, pair: &LabelPair) -> &'static str {
        pair.text(self.language())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(LanguageCode) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}
