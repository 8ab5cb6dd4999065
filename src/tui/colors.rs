//! Semantic styles for the TUI. Widgets pick a style by meaning; the
//! palette lives here.

use ratatui::style::{Color, Modifier, Style};

pub const BAR_BG: Color = Color::Rgb(40, 40, 50);
pub const STATUS_BG: Color = Color::Rgb(0, 95, 135);

/// Menu bar items, highlighted while their dropdown is open
pub fn bar_item(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(BAR_BG)
    }
}

pub fn bar_title() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BAR_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn bar_fill() -> Style {
    Style::default().bg(BAR_BG)
}

/// Widget borders, brighter when the widget has focus
pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn menu_row(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn result_title(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn result_url(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub fn notice() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC)
}

pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn status_bar() -> Style {
    Style::default().fg(Color::White).bg(STATUS_BG)
}
