use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use super::cell_width;
use crate::i18n;
use crate::preferences::Preferences;
use crate::ui::theme::palette;

/// Placeholder main panel: greeting, notice and a disabled query input.
pub fn render_welcome(f: &mut Frame<'_>, area: Rect, prefs: &Preferences) {
    let colors = palette(prefs.theme.theme());
    let base = Style::default().bg(colors.bg_primary).fg(colors.fg_primary);
    f.render_widget(Block::default().style(base), area);

    let placeholder = prefs.t(&i18n::QUERY_PLACEHOLDER);
    let submit = format!("[ {} ]", prefs.t(&i18n::SUBMIT));
    let field_width = area
        .width
        .saturating_sub(cell_width(&submit) + 8)
        .clamp(cell_width(placeholder) + 2, 60);
    let padding = (field_width as usize).saturating_sub(cell_width(placeholder) as usize + 1);
    let disabled = base.fg(colors.disabled_fg);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            prefs.t(&i18n::WELCOME_HEADING),
            base.fg(colors.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(prefs.t(&i18n::WELCOME_NOTICE), base.fg(colors.fg_dim))),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("│ {}{}│", placeholder, " ".repeat(padding)), disabled),
            Span::styled(" ", base),
            Span::styled(submit, disabled.add_modifier(Modifier::DIM)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            prefs.t(&i18n::COMING_SOON),
            base.fg(colors.fg_dim).add_modifier(Modifier::ITALIC),
        )),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(base);
    f.render_widget(body, area);
}
