use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{cell_width, sidebar::entry_text};
use crate::definitions::ControlKind;
use crate::i18n::{self, LabelPair};
use crate::preferences::Preferences;
use crate::ui::theme::palette;

/// What the status line reports. Kept as labels, not text, so a language
/// switch re-translates a message that is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Hint,
    Label(LabelPair),
    Selected(ControlKind),
}

impl StatusMessage {
    pub fn text(&self, prefs: &Preferences) -> String {
        match self {
            StatusMessage::Hint => prefs.t(&i18n::KEY_HINT).to_string(),
            StatusMessage::Label(pair) => prefs.t(pair).to_string(),
            StatusMessage::Selected(kind) => {
                let item = entry_text(prefs, *kind).unwrap_or_default();
                i18n::fill(prefs.t(&i18n::SELECTED), "item", &item)
            }
        }
    }
}

pub fn render_status_bar(
    f: &mut Frame<'_>,
    area: Rect,
    prefs: &Preferences,
    status: &StatusMessage,
) {
    let colors = palette(prefs.theme.theme());
    let style = Style::default().bg(colors.accent).fg(colors.button_text);

    let left = format!(" {}", status.text(prefs));
    let theme = prefs.theme.theme();
    let right = format!(
        "{} | {} {} ",
        prefs.language.language().code().to_uppercase(),
        theme.icon(),
        theme.label()
    );
    let gap = area
        .width
        .saturating_sub(cell_width(&left) + cell_width(&right)) as usize;
    let line = if gap > 0 {
        Line::from(vec![
            Span::raw(left),
            Span::raw(" ".repeat(gap)),
            Span::raw(right),
        ])
    } else {
        Line::from(left)
    };
    f.render_widget(Paragraph::new(line).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{LanguageCode, ThemeMode};
    use crate::ui::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_message_retranslates() {
        let mut prefs = Preferences::default();
        let status = StatusMessage::Label(i18n::EXPORT_UNAVAILABLE);
        assert_eq!(status.text(&prefs), "Export is not available yet");
        prefs.language.toggle_language();
        assert_eq!(status.text(&prefs), "Eksport er endnu ikke tilgængelig");
    }

    #[test]
    fn test_selected_message() {
        let prefs = Preferences::new(LanguageCode::Da, ThemeMode::Light);
        assert_eq!(
            StatusMessage::Selected(ControlKind::Category(1)).text(&prefs),
            "Valgt: Økonomi"
        );
        assert_eq!(
            StatusMessage::Selected(ControlKind::ExampleQuery(2)).text(&prefs),
            "Valgt: Eksempel forespørgsel 2"
        );
    }

    #[test]
    fn test_render_shows_preferences() {
        let mut terminal = Terminal::new(TestBackend::new(90, 1)).unwrap();
        let prefs = Preferences::new(LanguageCode::Da, ThemeMode::Dark);
        terminal
            .draw(|f| {
                let area = f.size();
                render_status_bar(f, area, &prefs, &StatusMessage::Hint)
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Ctrl+L sprog"));
        assert!(text.trim_end().ends_with("DA | ☀ dark"));
    }
}
