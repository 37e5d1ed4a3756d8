use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Paragraph},
};

use super::cell_width;
use crate::definitions::{ControlKind, ControlRegistry};
use crate::i18n;
use crate::preferences::Preferences;
use crate::ui::theme::palette;

const BUTTONS: [(ControlKind, &str, i18n::LabelPair); 2] = [
    (ControlKind::ExportData, "⇩", i18n::EXPORT_DATA),
    (ControlKind::NewQuery, "↻", i18n::NEW_QUERY),
];

/// Floating buttons stacked in the bottom-right corner of `area`.
pub fn render_action_panel(
    f: &mut Frame<'_>,
    area: Rect,
    prefs: &Preferences,
    controls: &mut ControlRegistry,
) {
    let colors = palette(prefs.theme.theme());
    let style = Style::default()
        .bg(colors.button_bg)
        .fg(colors.button_text)
        .add_modifier(Modifier::BOLD);

    let captions: Vec<(ControlKind, String)> = BUTTONS
        .iter()
        .map(|(kind, icon, label)| (*kind, format!(" {} {} ", icon, prefs.t(label))))
        .collect();
    let width = captions
        .iter()
        .map(|(_, caption)| cell_width(caption))
        .max()
        .unwrap_or(0);
    let height = captions.len() as u16 * 2 - 1;
    if width + 2 > area.width || height + 1 > area.height {
        return;
    }

    let x = area.x + area.width - width - 2;
    let top = area.y + area.height - height - 1;
    for (idx, (kind, caption)) in captions.into_iter().enumerate() {
        let rect = Rect::new(x, top + idx as u16 * 2, width, 1);
        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(caption).style(style), rect);
        controls.register(kind, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{LanguageCode, ThemeMode};
    use crate::ui::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(prefs: &Preferences, width: u16, height: u16) -> (String, ControlRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut controls = ControlRegistry::default();
        terminal
            .draw(|f| {
                let area = f.size();
                render_action_panel(f, area, prefs, &mut controls)
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), controls)
    }

    #[test]
    fn test_buttons_in_bottom_right() {
        let (text, controls) = draw(&Preferences::default(), 40, 10);
        assert!(text.contains("Export data"));
        assert!(text.contains("New query"));
        let export = controls.area(ControlKind::ExportData).unwrap();
        let new_query = controls.area(ControlKind::NewQuery).unwrap();
        assert_eq!(export.x + export.width, 38);
        assert_eq!(new_query.y, 8);
        assert_eq!(export.y, 6);
    }

    #[test]
    fn test_danish_captions() {
        let prefs = Preferences::new(LanguageCode::Da, ThemeMode::Light);
        let (text, _) = draw(&prefs, 40, 10);
        assert!(text.contains("Eksportér data"));
        assert!(text.contains("Ny forespørgsel"));
    }

    #[test]
    fn test_hidden_when_area_too_small() {
        let (_, controls) = draw(&Preferences::default(), 10, 2);
        assert!(controls.is_empty());
    }
}
