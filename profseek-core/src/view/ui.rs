//! src/view/ui.rs
//! ============================================================================
//! # UIRenderer: Frame Composition
//!
//! Lays out the search bar, the results region, and the status bar, and
//! draws exactly what the presenter payload says for the results region.
//! The payload is an enum, so the busy indicator, error banner, placeholders
//! and card list are mutually exclusive by construction.

use ratatui::prelude::*;

use crate::{
    model::app_state::AppState,
    view::{
        components::{
            error_banner::ErrorBanner, loading_indicator::LoadingIndicator,
            placeholder::Placeholder, results_list::ResultsList, search_bar::SearchBar,
            status_bar::StatusBar,
        },
        presenter::{DisplayPayload, present},
    },
};

pub struct UIRenderer {
    search_bar: SearchBar,
    results_list: ResultsList,
    loading: LoadingIndicator,
    status_bar: StatusBar,
}

impl UIRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            results_list: ResultsList::new(),
            loading: LoadingIndicator::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Results region
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        self.search_bar.render(frame, &state.ui, chunks[0]);
        self.render_results_region(frame, state, chunks[1]);
        self.status_bar.render(frame, &state.search, chunks[2]);
    }

    fn render_results_region(&self, frame: &mut Frame<'_>, state: &AppState, area: Rect) {
        match present(&state.search, state.ui.has_searched, &state.config) {
            DisplayPayload::Busy => self.loading.render(frame, area),
            DisplayPayload::Failure(message) => ErrorBanner::new(message).render(frame, area),
            DisplayPayload::NoMatches => Placeholder::ZeroMatches.render(frame, area),
            DisplayPayload::Ready => Placeholder::ReadyToSearch.render(frame, area),
            DisplayPayload::Cards(cards) => {
                self.results_list
                    .render(frame, &cards, state.ui.selected, area);
            }
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
