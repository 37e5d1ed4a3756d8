use ratatui::style::Color;

use crate::definitions::ThemeMode;

/// Colors used by every component for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub fg_primary: Color,
    pub fg_dim: Color,
    pub accent: Color,
    pub accent_strong: Color,

    pub bar_bg: Color,
    pub bar_text: Color,
    pub button_bg: Color,
    pub button_text: Color,

    pub border: Color,
    pub disabled_fg: Color,
    pub footer_bg: Color,
    pub footer_text: Color,
}

pub const LIGHT: Palette = Palette {
    bg_primary: Color::Rgb(255, 255, 255),
    bg_panel: Color::Rgb(244, 247, 252),
    fg_primary: Color::Rgb(30, 41, 59),
    fg_dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(0, 82, 155),
    accent_strong: Color::Rgb(0, 61, 117),

    bar_bg: Color::Rgb(255, 255, 255),
    bar_text: Color::Rgb(0, 72, 140),
    button_bg: Color::Rgb(0, 82, 155),
    button_text: Color::Rgb(255, 255, 255),

    border: Color::Rgb(204, 222, 240),
    disabled_fg: Color::Rgb(160, 170, 185),
    footer_bg: Color::Rgb(235, 243, 251),
    footer_text: Color::Rgb(0, 72, 140),
};

pub const DARK: Palette = Palette {
    bg_primary: Color::Rgb(17, 24, 39),
    bg_panel: Color::Rgb(24, 32, 48),
    fg_primary: Color::Rgb(226, 232, 240),
    fg_dim: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(96, 165, 250),
    accent_strong: Color::Rgb(147, 197, 253),

    bar_bg: Color::Rgb(17, 24, 39),
    bar_text: Color::Rgb(147, 197, 253),
    button_bg: Color::Rgb(37, 99, 235),
    button_text: Color::Rgb(255, 255, 255),

    border: Color::Rgb(31, 41, 55),
    disabled_fg: Color::Rgb(75, 85, 99),
    footer_bg: Color::Rgb(24, 32, 48),
    footer_text: Color::Rgb(147, 197, 253),
};

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
