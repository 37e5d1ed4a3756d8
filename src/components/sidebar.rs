use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::definitions::{ControlKind, ControlRegistry};
use crate::i18n::{self, LabelPair};
use crate::preferences::Preferences;
use crate::ui::theme::palette;

pub const SIDEBAR_WIDTH: u16 = 30;

enum Row {
    Title,
    Blank,
    Heading(LabelPair),
    Entry(ControlKind),
}

fn rows() -> Vec<Row> {
    let mut rows = vec![Row::Title, Row::Blank, Row::Heading(i18n::RECENT_QUERIES)];
    rows.extend((1..=i18n::EXAMPLE_QUERY_COUNT).map(|n| Row::Entry(ControlKind::ExampleQuery(n))));
    rows.push(Row::Blank);
    rows.push(Row::Heading(i18n::DATA_CATEGORIES));
    rows.extend((0..i18n::CATEGORIES.len()).map(|idx| Row::Entry(ControlKind::Category(idx))));
    rows
}

/// Text of a sidebar entry in the active language.
pub fn entry_text(prefs: &Preferences, kind: ControlKind) -> Option<String> {
    match kind {
        ControlKind::ExampleQuery(n) => Some(i18n::fill(
            prefs.t(&i18n::EXAMPLE_QUERY),
            "n",
            &n.to_string(),
        )),
        ControlKind::Category(idx) => i18n::CATEGORIES
            .get(idx)
            .map(|pair| prefs.t(pair).to_string()),
        _ => None,
    }
}

pub fn render_sidebar(
    f: &mut Frame<'_>,
    area: Rect,
    prefs: &Preferences,
    selected: Option<ControlKind>,
    controls: &mut ControlRegistry,
) {
    let colors = palette(prefs.theme.theme());
    let base = Style::default().bg(colors.bg_panel).fg(colors.fg_primary);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(colors.border))
        .style(base);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for (offset, row) in rows().into_iter().enumerate() {
        let line = match row {
            Row::Title => Line::from(vec![
                Span::styled(" ◆ ", base.fg(colors.accent)),
                Span::styled(
                    prefs.t(&i18n::SIDEBAR_TITLE),
                    base.fg(colors.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
            Row::Blank => Line::default(),
            Row::Heading(pair) => Line::from(Span::styled(
                format!(" {}", prefs.t(&pair).to_uppercase()),
                base.fg(colors.accent_strong).add_modifier(Modifier::BOLD),
            )),
            Row::Entry(kind) => {
                let marker = match kind {
                    ControlKind::Category(_) => "▪ ",
                    _ => "  ",
                };
                let text = entry_text(prefs, kind).unwrap_or_default();
                let style = if selected == Some(kind) {
                    base.fg(colors.button_text).bg(colors.accent)
                } else {
                    base.fg(colors.accent_strong)
                };
                if (offset as u16) < inner.height {
                    controls.register(
                        kind,
                        Rect {
                            y: inner.y + offset as u16,
                            height: 1,
                            ..inner
                        },
                    );
                }
                Line::from(vec![
                    Span::styled("  ", base),
                    Span::styled(format!("{}{}", marker, text), style),
                ])
            }
        };
        lines.push(line);
    }
    f.render_widget(Paragraph::new(lines).style(base), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::{LanguageCode, ThemeMode};
    use crate::ui::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(prefs: &Preferences, height: u16) -> (String, ControlRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(SIDEBAR_WIDTH, height)).unwrap();
        let mut controls = ControlRegistry::default();
        terminal
            .draw(|f| {
                let area = f.size();
                render_sidebar(f, area, prefs, None, &mut controls)
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), controls)
    }

    #[test]
    fn test_english_content() {
        let (text, controls) = draw(&Preferences::default(), 20);
        assert!(text.contains("Statistics Explorer"));
        assert!(text.contains("RECENT QUERIES"));
        assert!(text.contains("Example query 3"));
        assert!(text.contains("DATA CATEGORIES"));
        assert!(text.contains("Environment"));
        assert_eq!(controls.len(), i18n::EXAMPLE_QUERY_COUNT + i18n::CATEGORIES.len());
        assert_eq!(controls.hit_test(4, 3), Some(ControlKind::ExampleQuery(1)));
        assert_eq!(controls.hit_test(4, 8), Some(ControlKind::Category(0)));
    }

    #[test]
    fn test_danish_content() {
        let prefs = Preferences::new(LanguageCode::Da, ThemeMode::Dark);
        let (text, _) = draw(&prefs, 20);
        assert!(text.contains("Statistik Udforsker"));
        assert!(text.contains("SENESTE FORESPØRGSLER"));
        assert!(text.contains("Eksempel forespørgsel 1"));
        assert!(text.contains("DATAKATEGORIER"));
        assert!(text.contains("Økonomi"));
        assert!(text.contains("Miljø"));
        assert!(!text.contains("Economy"));
    }

    #[test]
    fn test_clipped_rows_are_not_clickable() {
        let (_, controls) = draw(&Preferences::default(), 6);
        assert_eq!(controls.area(ControlKind::ExampleQuery(3)), Some(Rect::new(0, 5, SIDEBAR_WIDTH - 1, 1)));
        assert_eq!(controls.area(ControlKind::Category(0)), None);
    }

    #[test]
    fn test_entry_text() {
        let prefs = Preferences::new(LanguageCode::Da, ThemeMode::Light);
        assert_eq!(entry_text(&prefs, ControlKind::Category(3)).as_deref(), Some("Sundhed"));
        assert_eq!(entry_text(&prefs, ControlKind::Category(9)), None);
        assert_eq!(entry_text(&prefs, ControlKind::NewQuery), None);
    }
}
