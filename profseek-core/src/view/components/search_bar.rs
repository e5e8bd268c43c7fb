//! src/view/components/search_bar.rs
//! Query input field with a cursor indicator.

use crate::model::search_state::UIState;
use crate::view::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub struct SearchBar;

impl SearchBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, ui_state: &UIState, area: Rect) {
        let mut input_text = ui_state.input.to_string();

        if ui_state.input_cursor >= input_text.len() {
            input_text.push('│');
        } else {
            input_text.insert(ui_state.input_cursor, '│');
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Describe your research interest ")
            .title_alignment(Alignment::Center)
            .border_style(theme::search_bar_border_style())
            .style(theme::search_bar_style());

        let paragraph = Paragraph::new(input_text)
            .block(block)
            .style(Style::default().fg(theme::FOREGROUND));

        frame.render_widget(paragraph, area);
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}
