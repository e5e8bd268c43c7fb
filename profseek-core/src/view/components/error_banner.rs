//! src/view/components/error_banner.rs

use crate::view::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ErrorBanner {
    message: String,
}

impl ErrorBanner {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(" Search Failed ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::error_style())
            .style(Style::default().bg(theme::BACKGROUND));

        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(self.message.clone(), theme::error_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to try again.",
                theme::placeholder_style(),
            )),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}
