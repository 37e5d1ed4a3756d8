use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, CommandAction};

impl App {
    /// The main entry point for handling keyboard events.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = key_binding(key) {
            self.execute_action(action);
        }
    }
}

/// Maps a key press to its action.
pub fn key_binding(key: KeyEvent) -> Option<CommandAction> {
    if key.code == KeyCode::Esc {
        return Some(CommandAction::Quit);
    }
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('l') => Some(CommandAction::ToggleLanguage),
        KeyCode::Char('t') => Some(CommandAction::ToggleTheme),
        KeyCode::Char('b') => Some(CommandAction::ToggleSidebar),
        KeyCode::Char('e') => Some(CommandAction::ExportData),
        KeyCode::Char('n') => Some(CommandAction::NewQuery),
        KeyCode::Char('q') | KeyCode::Char('c') => Some(CommandAction::Quit),
        _ => None,
    }
}
