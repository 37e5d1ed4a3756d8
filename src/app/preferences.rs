use super::App;
use crate::components::status_bar::StatusMessage;
use crate::definitions::ThemeMode;
use crate::i18n;

// Implementation block for preference-related logic in the App.
impl App {
    /// Switches between English and Danish. The store's redraw subscription
    /// schedules the next frame.
    pub(crate) fn toggle_language(&mut self) {
        self.preferences.language.toggle_language();
        self.set_status(StatusMessage::Label(i18n::LANGUAGE_SWITCHED));
    }

    /// Switches between the light and dark palettes.
    pub(crate) fn toggle_theme(&mut self) {
        let label = match self.preferences.theme.toggle_theme() {
            ThemeMode::Dark => i18n::DARK_MODE_ON,
            ThemeMode::Light => i18n::LIGHT_MODE_ON,
        };
        self.set_status(StatusMessage::Label(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::definitions::LanguageCode;

    #[test]
    fn test_toggle_language_schedules_redraw() {
        let mut app = App::new(Settings::default());
        assert!(app.take_redraw());
        assert!(!app.take_redraw());

        app.toggle_language();
        assert_eq!(app.preferences.language.language(), LanguageCode::Da);
        assert!(app.take_redraw());
        assert_eq!(app.status.text(&app.preferences), "Sproget er skiftet til dansk");
    }

    #[test]
    fn test_toggle_theme_reports_new_mode() {
        let mut app = App::new(Settings::default());
        app.toggle_theme();
        assert_eq!(app.preferences.theme.theme(), ThemeMode::Dark);
        assert_eq!(app.status, StatusMessage::Label(i18n::DARK_MODE_ON));
        app.toggle_theme();
        assert_eq!(app.preferences.theme.theme(), ThemeMode::Light);
        assert_eq!(app.status, StatusMessage::Label(i18n::LIGHT_MODE_ON));
    }
}
