use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::{cell_width, right_aligned};
use crate::definitions::{ControlKind, ControlRegistry, ThemeMode};
use crate::i18n;
use crate::preferences::Preferences;
use crate::ui::theme::palette;

const SIDEBAR_TRIGGER: &str = " ☰ ";
const LOGO: &str = "◆ ";

/// Draws the title bar with the sidebar trigger and the language and theme buttons.
///
/// Button captions shrink to their short form when the full captions would
/// collide with the title.
pub fn render_header(
    f: &mut Frame<'_>,
    area: Rect,
    prefs: &Preferences,
    controls: &mut ControlRegistry,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = prefs.theme.theme();
    let colors = palette(theme);
    let base = Style::default().bg(colors.bar_bg).fg(colors.bar_text);
    f.render_widget(Block::default().style(base), area);

    let title = prefs.t(&i18n::APP_TITLE);
    let left = Line::from(vec![
        Span::styled(SIDEBAR_TRIGGER, base),
        Span::styled(LOGO, base.fg(colors.accent)),
        Span::styled(title, base.add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(left).style(base), area);
    controls.register(
        ControlKind::ToggleSidebar,
        Rect {
            width: cell_width(SIDEBAR_TRIGGER).min(area.width),
            height: 1,
            ..area
        },
    );

    let left_width = cell_width(SIDEBAR_TRIGGER) + cell_width(LOGO) + cell_width(title);
    let (language_caption, theme_caption) = {
        let full = (full_language_caption(prefs), full_theme_caption(prefs, theme));
        let needed = cell_width(&full.0) + cell_width(&full.1) + 2;
        if left_width.saturating_add(needed).saturating_add(2) <= area.width {
            full
        } else {
            (
                format!("[{}]", prefs.language.language().code().to_uppercase()),
                format!("[{}]", theme.icon()),
            )
        }
    };

    let button = base.fg(colors.accent_strong).add_modifier(Modifier::BOLD);
    let right_edge = area.x.saturating_add(area.width).saturating_sub(1);
    let theme_rect = right_aligned(area, right_edge, cell_width(&theme_caption));
    let language_rect = right_aligned(
        area,
        theme_rect.x.saturating_sub(1),
        cell_width(&language_caption),
    );
    if language_rect.x < area.x.saturating_add(left_width) {
        // Not even the short captions fit next to the title.
        return;
    }

    f.render_widget(Paragraph::new(theme_caption).style(button), theme_rect);
    f.render_widget(Paragraph::new(language_caption).style(button), language_rect);
    controls.register(ControlKind::ToggleTheme, theme_rect);
    controls.register(ControlKind::ToggleLanguage, language_rect);
}

fn full_language_caption(prefs: &Preferences) -> String {
    format!("[{}]", prefs.t(&i18n::SWITCH_LANGUAGE))
}

fn full_theme_caption(prefs: &Preferences, theme: ThemeMode) -> String {
    let tip = match theme {
        ThemeMode::Light => &i18n::SWITCH_TO_DARK,
        ThemeMode::Dark => &i18n::SWITCH_TO_LIGHT,
    };
    format!("[{} {}]", theme.icon(), prefs.t(tip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::LanguageCode;
    use crate::ui::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(prefs: &Preferences, width: u16) -> (String, ControlRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        let mut controls = ControlRegistry::default();
        terminal
            .draw(|f| {
                let area = f.size();
                render_header(f, area, prefs, &mut controls)
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), controls)
    }

    #[test]
    fn test_full_captions_in_english() {
        let prefs = Preferences::default();
        let (text, controls) = draw(&prefs, 100);
        assert!(text.contains("Danish Statistics Explorer"));
        assert!(text.contains("[Switch to Danish]"));
        assert!(text.contains("Switch to dark mode]"));
        assert!(controls.area(ControlKind::ToggleLanguage).is_some());
        assert!(controls.area(ControlKind::ToggleTheme).is_some());
        assert_eq!(controls.hit_test(1, 0), Some(ControlKind::ToggleSidebar));
    }

    #[test]
    fn test_captions_follow_both_stores() {
        let prefs = Preferences::new(LanguageCode::Da, ThemeMode::Dark);
        let (text, _) = draw(&prefs, 100);
        assert!(text.contains("Dansk Statistik Udforsker"));
        assert!(text.contains("[Switch to English]"));
        assert!(text.contains("[☀ Switch to light mode]"));
    }

    #[test]
    fn test_short_captions_on_narrow_bar() {
        let prefs = Preferences::default();
        let (text, controls) = draw(&prefs, 40);
        assert!(text.contains("[EN]"));
        assert!(!text.contains("Switch to Danish"));
        let theme = controls.area(ControlKind::ToggleTheme).unwrap();
        assert_eq!(theme.x + theme.width, 39);
    }
}
