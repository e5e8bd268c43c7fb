//! src/view/components/placeholder.rs
//! The two quiet states of the results region: the pre-search invitation and
//! the zero-matches notice. They are deliberately distinct.

use crate::view::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub enum Placeholder {
    /// No search submitted yet this session.
    ReadyToSearch,

    /// A completed search matched nothing.
    ZeroMatches,
}

impl Placeholder {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let (title, lines) = match self {
            Self::ReadyToSearch => (
                " Faculty Finder ",
                vec![
                    Line::from(""),
                    Line::from("Describe a research interest above and press Enter."),
                    Line::from(""),
                    Line::from("Matches are ranked by semantic similarity, not keywords."),
                ],
            ),
            Self::ZeroMatches => (
                " No Matches ",
                vec![
                    Line::from(""),
                    Line::from("No faculty matched that query."),
                    Line::from(""),
                    Line::from("Try broader wording or a related topic."),
                ],
            ),
        };

        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::COMMENT))
            .style(Style::default().bg(theme::BACKGROUND));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .style(theme::placeholder_style())
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}
