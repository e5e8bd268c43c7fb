//! src/view/components/status_bar.rs
//! Key hints and the current lifecycle tag.

use crate::model::search_state::SearchState;
use crate::view::theme;
use ratatui::{prelude::*, widgets::Paragraph};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, search: &SearchState, area: Rect) {
        let state_tag = match search {
            SearchState::Idle => "idle",
            SearchState::Loading => "searching…",
            SearchState::Success(list) => {
                if list.is_empty() {
                    "no matches"
                } else {
                    "results"
                }
            }
            SearchState::Error(_) => "error",
        };

        let line = Line::from(vec![
            Span::styled(format!(" {state_tag} "), Style::default().fg(theme::CYAN)),
            Span::raw("│ Enter/Ctrl+S search "),
            Span::raw("│ ↑/↓ select "),
            Span::raw("│ Ctrl+O open profile "),
            Span::raw("│ Esc clear "),
            Span::raw("│ Ctrl+C quit"),
        ]);

        let paragraph = Paragraph::new(line).style(theme::status_bar_style());
        frame.render_widget(paragraph, area);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
