use log::debug;

use super::App;
use crate::components::status_bar::StatusMessage;
use crate::definitions::ControlKind;
use crate::i18n;

/// Everything a key binding or a click can ask the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    ToggleLanguage,
    ToggleTheme,
    ToggleSidebar,
    ExportData,
    NewQuery,
    Select(ControlKind),
    Quit,
}

impl From<ControlKind> for CommandAction {
    fn from(kind: ControlKind) -> Self {
        match kind {
            ControlKind::ToggleSidebar => CommandAction::ToggleSidebar,
            ControlKind::ToggleLanguage => CommandAction::ToggleLanguage,
            ControlKind::ToggleTheme => CommandAction::ToggleTheme,
            ControlKind::ExportData => CommandAction::ExportData,
            ControlKind::NewQuery => CommandAction::NewQuery,
            ControlKind::ExampleQuery(_) | ControlKind::Category(_) => CommandAction::Select(kind),
        }
    }
}

impl App {
    /// The single source of truth for executing a `CommandAction`.
    pub fn execute_action(&mut self, action: CommandAction) {
        debug!("Executing action {:?}", action);
        match action {
            CommandAction::ToggleLanguage => self.toggle_language(),
            CommandAction::ToggleTheme => self.toggle_theme(),
            CommandAction::ToggleSidebar => self.toggle_sidebar(),
            CommandAction::ExportData => {
                self.set_status(StatusMessage::Label(i18n::EXPORT_UNAVAILABLE));
            }
            CommandAction::NewQuery => {
                self.selection = None;
                self.set_status(StatusMessage::Label(i18n::QUERY_CLEARED));
            }
            CommandAction::Select(kind) => {
                self.selection = Some(kind);
                self.set_status(StatusMessage::Selected(kind));
            }
            CommandAction::Quit => self.quit(),
        }
    }

    fn toggle_sidebar(&mut self) {
        let visible = !self.sidebar_visible();
        self.sidebar_override = Some(visible);
        let label = if visible {
            i18n::SIDEBAR_SHOWN
        } else {
            i18n::SIDEBAR_HIDDEN
        };
        self.set_status(StatusMessage::Label(label));
    }
}
