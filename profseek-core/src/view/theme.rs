//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants from the official Catppuccin theme specification:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn search_bar_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn search_bar_border_style() -> Style {
    Style::default().fg(CYAN)
}

pub fn card_name_style() -> Style {
    Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
}

pub fn card_score_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn card_detail_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn card_link_style() -> Style {
    Style::default().fg(CYAN)
}

pub fn card_highlight_style() -> Style {
    Style::default().bg(CURRENT_LINE).fg(FOREGROUND)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn error_style() -> Style {
    Style::default().fg(RED)
}

pub fn busy_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(CURRENT_LINE).fg(FOREGROUND)
}
