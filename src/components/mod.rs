//! Presentation components.
//!
//! Each component draws from the session [`Preferences`](crate::preferences::Preferences)
//! and the static label tables only; none keeps its own language or theme.

pub mod action_panel;
pub mod footer;
pub mod header;
pub mod sidebar;
pub mod status_bar;
pub mod welcome;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub(crate) fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

/// A one-row rect of `width` cells ending at `right` (exclusive), clipped to `area`.
pub(crate) fn right_aligned(area: Rect, right: u16, width: u16) -> Rect {
    let right = right.min(area.x.saturating_add(area.width));
    let x = right.saturating_sub(width).max(area.x);
    Rect {
        x,
        y: area.y,
        width: right.saturating_sub(x),
        height: 1.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_width_counts_danish_letters_once() {
        assert_eq!(cell_width("Økonomi"), 7);
        assert_eq!(cell_width("Miljø"), 5);
    }

    #[test]
    fn test_right_aligned_clips_to_area() {
        let area = Rect::new(5, 2, 20, 1);
        assert_eq!(right_aligned(area, 25, 4), Rect::new(21, 2, 4, 1));
        assert_eq!(right_aligned(area, 40, 4), Rect::new(21, 2, 4, 1));
        assert_eq!(right_aligned(area, 8, 10), Rect::new(5, 2, 3, 1));
    }
}
