use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;
use crate::components::{
    action_panel::render_action_panel,
    footer::render_footer,
    header::render_header,
    sidebar::{SIDEBAR_WIDTH, render_sidebar},
    status_bar::render_status_bar,
    welcome::render_welcome,
};
use crate::i18n;

pub mod theme;
use theme::palette;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

/// Draws one full frame. Clickable regions are re-registered on every draw.
pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    app.controls.clear();
    app.viewport = size;

    let prefs = &app.preferences;
    let colors = palette(prefs.theme.theme());
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let notice = i18n::fill(
            prefs.t(&i18n::TOO_SMALL),
            "size",
            &format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
        );
        let block = Paragraph::new(notice)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(prefs.t(&i18n::APP_TITLE))
                    .borders(Borders::ALL)
                    .style(Style::default().fg(colors.accent).bg(colors.bg_panel)),
            )
            .style(Style::default().fg(colors.fg_primary).bg(colors.bg_primary));
        f.render_widget(block, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(colors.bg_primary));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);
    let header_area = vertical[0];
    let body = vertical[1];
    let footer_area = vertical[2];
    let status_area = vertical[3];

    render_header(f, header_area, prefs, &mut app.controls);

    let main_area = if app.sidebar_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(body);
        render_sidebar(f, columns[0], prefs, app.selection, &mut app.controls);
        columns[1]
    } else {
        body
    };

    render_welcome(f, main_area, prefs);
    render_action_panel(f, main_area, prefs, &mut app.controls);
    render_footer(f, footer_area, prefs, app.year);
    render_status_bar(f, status_area, prefs, &app.status);
}

/// Flattens a buffer into text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        if y > area.y {
            out.push('\n');
        }
        for x in area.x..area.x + area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
    }
    out
}

/// Renders a single frame off-screen and returns it as text.
pub fn snapshot(app: &mut App, width: u16, height: u16) -> std::io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render(f, app))?;
    Ok(buffer_text(terminal.backend().buffer()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_text_rows() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 3, 2));
        buffer.set_string(0, 0, "ab", Style::default());
        buffer.set_string(0, 1, "cde", Style::default());
        assert_eq!(buffer_text(&buffer), "ab \ncde");
    }
}
