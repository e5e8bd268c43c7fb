//! src/view/components/loading_indicator.rs
//! Busy indicator for an in-flight search. No progress source exists (the
//! service gives no partial feedback), so this stays indeterminate.

use crate::view::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub struct LoadingIndicator;

impl LoadingIndicator {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(" Searching ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND));

        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Ranking faculty against your query…",
                theme::busy_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A cold service start can take a while.",
                theme::placeholder_style(),
            )),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}
