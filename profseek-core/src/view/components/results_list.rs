//! src/view/components/results_list.rs
//! ============================================================================
//! Ranked faculty cards. Order is exactly what the service returned; the
//! client never re-sorts. Rows a card has no value for are left out rather
//! than rendered empty.

use crate::view::presenter::MatchCard;
use crate::view::theme;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub struct ResultsList;

impl ResultsList {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        cards: &[MatchCard],
        selected: Option<usize>,
        area: Rect,
    ) {
        let title = format!(" {} Matches ", cards.len());

        let items: Vec<ListItem> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| Self::card_item(i, card, selected == Some(i)))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme::PURPLE))
            .style(Style::default().bg(theme::BACKGROUND));

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(theme::FOREGROUND));

        frame.render_widget(list, area);
    }

    fn card_item(index: usize, card: &MatchCard, is_selected: bool) -> ListItem<'static> {
        let base = if is_selected {
            theme::card_highlight_style()
        } else {
            Style::default()
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{:2} ", index + 1), theme::card_detail_style()),
            Span::styled(card.name.clone(), theme::card_name_style()),
            Span::styled(
                format!("  {}% match", card.percent),
                theme::card_score_style(),
            ),
        ])];

        lines.push(Line::from(vec![
            Span::styled("   Specialization: ", theme::card_detail_style()),
            Span::styled(card.specialization.clone(), Style::default().fg(theme::FOREGROUND)),
        ]));

        if let Some(teaching) = &card.teaching {
            lines.push(Line::from(vec![
                Span::styled("   Teaching: ", theme::card_detail_style()),
                Span::styled(teaching.clone(), Style::default().fg(theme::FOREGROUND)),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled("   Portrait: ", theme::card_detail_style()),
            Span::styled(card.portrait_url.clone(), theme::card_detail_style()),
        ]));

        if let Some(profile) = &card.profile_url {
            lines.push(Line::from(vec![
                Span::styled("   Profile: ", theme::card_detail_style()),
                Span::styled(profile.clone(), theme::card_link_style()),
            ]));
        }

        lines.push(Line::from(""));

        ListItem::new(lines).style(base)
    }
}

impl Default for ResultsList {
    fn default() -> Self {
        Self::new()
    }
}
