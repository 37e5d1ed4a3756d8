use chrono::{DateTime, Datelike, Local, TimeZone};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

use crate::i18n;
use crate::preferences::Preferences;
use crate::ui::theme::palette;

pub fn render_footer(f: &mut Frame<'_>, area: Rect, prefs: &Preferences, year: i32) {
    let colors = palette(prefs.theme.theme());
    let text = i18n::fill(prefs.t(&i18n::FOOTER), "year", &year.to_string());
    let footer = Paragraph::new(format!(" {}", text))
        .style(Style::default().bg(colors.footer_bg).fg(colors.footer_text));
    f.render_widget(footer, area);
}

/// Year of the local calendar, as printed in the footer.
pub fn current_year() -> i32 {
    year_at(&Local::now())
}

/// Calendar year of `now` in its own time zone.
fn year_at<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use chrono::{FixedOffset, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_current_year_is_local() {
        let before = Local::now().year();
        let year = current_year();
        let after = Local::now().year();
        assert!(year == before || year == after);
    }

    #[test]
    fn test_new_year_follows_local_offset() {
        // 2025-12-31 23:30 UTC is already 2026 in Copenhagen.
        let instant = Utc.with_ymd_and_hms(2025, 12, 31, 23, 30, 0).unwrap();
        let copenhagen = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(year_at(&instant), 2025);
        assert_eq!(year_at(&instant.with_timezone(&copenhagen)), 2026);
    }

    #[test]
    fn test_footer_text() {
        let mut terminal = Terminal::new(TestBackend::new(50, 1)).unwrap();
        let prefs = Preferences::default();
        terminal
            .draw(|f| {
                let area = f.size();
                render_footer(f, area, &prefs, 2025)
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("© 2025 Danish Statistics Explorer"));
    }
}
