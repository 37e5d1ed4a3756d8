use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use ratatui::layout::Rect;

use super::App;
use crate::components::{footer::current_year, status_bar::StatusMessage};
use crate::config::Settings;
use crate::definitions::ControlRegistry;
use crate::preferences::Preferences;

impl App {
    /// Creates a new session from `settings`.
    ///
    /// The preference stores are seeded from the settings and a redraw flag is
    /// subscribed to both, so any language or theme change schedules a frame.
    pub fn new(settings: Settings) -> Self {
        let mut preferences = Preferences::new(
            settings.preferences.language,
            settings.preferences.theme,
        );
        let needs_redraw = Rc::new(Cell::new(true));
        preferences.subscribe_redraw(Rc::clone(&needs_redraw));
        debug!(
            "Initializing session: language={}, theme={}",
            preferences.language.language(),
            preferences.theme.theme()
        );

        Self {
            running: true,
            preferences,
            controls: ControlRegistry::default(),
            viewport: Rect::default(),
            sidebar_override: None,
            selection: None,
            status: StatusMessage::Hint,
            year: current_year(),
            sidebar_min_width: settings.ui.sidebar_min_width,
            status_timeout: settings.ui.status_timeout(),
            tick_rate: settings.ui.tick_rate(),
            status_set_at: None,
            needs_redraw,
        }
    }
}
