use ratatui::style::{Color, Modifier, Style};

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const MASK_PANEL_HEIGHT: u16 = 3;
pub(super) const VALUE_PANEL_HEIGHT: u16 = 3;
pub(super) const HELP_HEIGHT: u16 = 1;
pub(super) const PRESETS_MIN_HEIGHT: u16 = 3;
pub(super) const APP_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0x9c, 0xa3, 0xaf);
pub(super) const ACCENT_CARET_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const ACCENT_VALUE_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(APP_BG_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_BORDER_RGB))
    }
}

pub(super) fn text_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn placeholder_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_MUTED_RGB))
    }
}

/// Caret cell, drawn reversed.
pub(super) fn caret_style(no_color: bool) -> Style {
    let base = Style::default().add_modifier(Modifier::REVERSED);
    if no_color {
        base
    } else {
        base.fg(rgb(ACCENT_CARET_RGB))
    }
}

pub(super) fn value_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(ACCENT_VALUE_RGB))
    }
}

pub(super) fn highlight_style(no_color: bool) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    if no_color {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base.fg(rgb(ACCENT_CARET_RGB))
    }
}
