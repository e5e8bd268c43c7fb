//! src/model/app_state.rs
//! ============================================================================
//! # AppState: Single-Writer Application State
//!
//! Owns the search lifecycle, the UI state, and the submission ticket
//! counter. Only the event loop mutates this; background tasks communicate
//! exclusively through the `TaskResult` channel.

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::{
    config::Config,
    controller::event_loop::TaskResult,
    error::AppError,
    model::{match_record::MatchRecord, search_state::SearchState, search_state::UIState},
    tasks::search_task::spawn_search,
};

pub struct AppState {
    pub config: Arc<Config>,
    pub ui: UIState,
    pub search: SearchState,

    /// Monotonically increasing submission ticket. Completions carrying an
    /// older ticket are discarded, so a slow superseded request can never
    /// overwrite the outcome of a later one.
    latest_ticket: u64,

    http: Client,
    task_tx: UnboundedSender<TaskResult>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<Config>, task_tx: UnboundedSender<TaskResult>) -> Self {
        // No request timeout: the service's own latency (cold starts
        // included) is surfaced only through failure, never a client
        // deadline.
        Self {
            config,
            ui: UIState::new(),
            search: SearchState::Idle,
            latest_ticket: 0,
            http: Client::new(),
            task_tx,
        }
    }

    /// Validate the current input and, if it qualifies, transition to
    /// `Loading` and hand out a fresh ticket plus the trimmed query.
    ///
    /// Blank input is a silent no-op: state untouched, no ticket consumed.
    pub fn begin_search(&mut self) -> Option<(u64, String)> {
        let query = self.ui.input.trim();
        if query.is_empty() {
            debug!("Ignoring submission with blank query");
            return None;
        }

        let query = query.to_string();
        self.latest_ticket += 1;
        self.search = SearchState::Loading;
        self.ui.has_searched = true;
        self.ui.selected = None;
        self.ui.request_redraw();

        info!(ticket = self.latest_ticket, %query, "Search submitted");
        Some((self.latest_ticket, query))
    }

    /// Submit the current input: state flips to `Loading` synchronously,
    /// then the request runs on a background task.
    pub fn submit_search(&mut self) {
        if let Some((ticket, query)) = self.begin_search() {
            spawn_search(
                ticket,
                query,
                self.http.clone(),
                self.config.search_url.clone(),
                self.task_tx.clone(),
            );
        }
    }

    /// Apply a completed search, unless a newer submission has superseded it.
    pub fn apply_search_outcome(&mut self, ticket: u64, outcome: Result<Vec<MatchRecord>, String>) {
        if ticket != self.latest_ticket {
            debug!(
                ticket,
                latest = self.latest_ticket,
                "Discarding superseded search completion"
            );
            return;
        }

        self.search = match outcome {
            Ok(records) => {
                info!(ticket, matches = records.len(), "Search succeeded");
                SearchState::Success(records)
            }
            Err(message) => {
                info!(ticket, %message, "Search ended in error");
                SearchState::Error(message)
            }
        };

        let count = self.search.records().map_or(0, <[MatchRecord]>::len);
        self.ui.validate_selection(count);
        self.ui.request_redraw();
    }

    /// Latest ticket handed out so far.
    #[must_use]
    pub const fn latest_ticket(&self) -> u64 {
        self.latest_ticket
    }

    /// Open the selected card's profile link in the system browser. The link
    /// is an outbound reference only; the client never dereferences it.
    pub fn open_selected_profile(&self) -> Result<(), AppError> {
        let Some(records) = self.search.records() else {
            return Ok(());
        };
        let Some(record) = self.ui.selected.and_then(|idx| records.get(idx)) else {
            return Ok(());
        };
        let Some(url) = record.profile_url.as_deref() else {
            debug!(name = %record.name, "Selected record has no profile link");
            return Ok(());
        };

        info!(%url, "Opening profile link");
        webbrowser::open(url).map_err(|e| AppError::browser_launch(url, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn state() -> AppState {
        let (task_tx, _task_rx) = mpsc::unbounded_channel();
        AppState::new(Arc::new(Config::default()), task_tx)
    }

    fn record(name: &str, score: f64) -> MatchRecord {
        MatchRecord {
            name: name.to_string(),
            score,
            specialization: None,
            teaching: None,
            image_url: None,
            profile_url: None,
        }
    }

    #[test]
    fn begin_search_transitions_to_loading_and_stamps_ticket() {
        let mut st = state();
        st.ui.input = "systems for machine learning".into();

        let (ticket, query) = st.begin_search().expect("query qualifies");
        assert_eq!(ticket, 1);
        assert_eq!(query, "systems for machine learning");
        assert_eq!(st.search, SearchState::Loading);
        assert!(st.ui.has_searched);
    }

    #[test]
    fn blank_query_is_a_silent_noop() {
        let mut st = state();
        st.ui.input = "   \t ".into();

        assert!(st.begin_search().is_none());
        assert_eq!(st.search, SearchState::Idle);
        assert_eq!(st.latest_ticket(), 0);
        assert!(!st.ui.has_searched);
    }

    #[test]
    fn query_is_trimmed_before_submission() {
        let mut st = state();
        st.ui.input = "  bioinformatics  ".into();

        let (_, query) = st.begin_search().unwrap();
        assert_eq!(query, "bioinformatics");
    }

    #[test]
    fn resubmission_clears_previous_results() {
        let mut st = state();
        st.ui.input = "robotics".into();
        let (ticket, _) = st.begin_search().unwrap();
        st.apply_search_outcome(ticket, Ok(vec![record("A", 0.9)]));
        assert!(matches!(&st.search, SearchState::Success(list) if list.len() == 1));

        st.begin_search().unwrap();
        assert_eq!(st.search, SearchState::Loading);
    }

    #[test]
    fn superseded_completion_is_discarded() {
        let mut st = state();
        st.ui.input = "compilers".into();
        let (first, _) = st.begin_search().unwrap();
        let (second, _) = st.begin_search().unwrap();
        assert!(second > first);

        // Fast second submission resolves first.
        st.apply_search_outcome(second, Ok(vec![record("B", 0.42)]));
        // Slow first submission arrives afterwards and must not win.
        st.apply_search_outcome(first, Ok(vec![record("A", 0.87)]));

        match &st.search {
            SearchState::Success(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].name, "B");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn stale_error_cannot_overwrite_fresh_success() {
        let mut st = state();
        st.ui.input = "databases".into();
        let (first, _) = st.begin_search().unwrap();
        let (second, _) = st.begin_search().unwrap();

        st.apply_search_outcome(second, Ok(vec![]));
        st.apply_search_outcome(first, Err("late failure".to_string()));

        assert_eq!(st.search, SearchState::Success(vec![]));
    }

    #[test]
    fn empty_result_list_is_success_not_error() {
        let mut st = state();
        st.ui.input = "quantum".into();
        let (ticket, _) = st.begin_search().unwrap();

        st.apply_search_outcome(ticket, Ok(vec![]));
        assert_eq!(st.search, SearchState::Success(vec![]));
    }

    #[test]
    fn failure_outcome_lands_in_error_state() {
        let mut st = state();
        st.ui.input = "security".into();
        let (ticket, _) = st.begin_search().unwrap();

        st.apply_search_outcome(ticket, Err("down for maintenance".to_string()));
        assert_eq!(
            st.search,
            SearchState::Error("down for maintenance".to_string())
        );
    }

    #[test]
    fn selection_resets_against_new_results() {
        let mut st = state();
        st.ui.input = "vision".into();
        let (ticket, _) = st.begin_search().unwrap();
        st.ui.selected = Some(7);

        st.apply_search_outcome(ticket, Ok(vec![record("A", 0.9), record("B", 0.8)]));
        assert_eq!(st.ui.selected, Some(1));
    }
}
