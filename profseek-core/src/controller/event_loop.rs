//! src/controller/event_loop.rs
//! ============================================================================
//! # EventLoop: Action Dispatch and Task Completion Handling
//!
//! Owns the `AppState` and the receiving half of the task channel. All state
//! mutation funnels through here, on the one control task, so no locking is
//! needed anywhere.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::{
    controller::actions::Action,
    model::{app_state::AppState, match_record::MatchRecord},
};

/// A result reported back from a background task.
#[derive(Debug)]
pub enum TaskResult {
    /// A search request finished. `ticket` identifies the submission; the
    /// event loop discards results from superseded submissions.
    SearchCompleted {
        ticket: u64,
        outcome: Result<Vec<MatchRecord>, String>,
    },
}

pub struct EventLoop {
    state: AppState,
    task_rx: UnboundedReceiver<TaskResult>,
}

impl EventLoop {
    #[must_use]
    pub fn new(state: AppState, task_rx: UnboundedReceiver<TaskResult>) -> Self {
        Self { state, task_rx }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Wait for the next background task completion.
    pub async fn next_task_result(&mut self) -> Option<TaskResult> {
        self.task_rx.recv().await
    }

    pub fn apply_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::SearchCompleted { ticket, outcome } => {
                self.state.apply_search_outcome(ticket, outcome);
            }
        }
    }

    /// Handle one action. Returns `false` when the application should quit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        debug!(?action, "Dispatching action");

        match action {
            Action::Quit => return false,

            Action::InsertChar(ch) => self.state.ui.insert_char(ch),
            Action::DeleteCharBefore => {
                self.state.ui.delete_char_before();
            }
            Action::ClearInput => self.state.ui.clear_input(),
            Action::MoveCursorLeft => self.state.ui.move_cursor_left(),
            Action::MoveCursorRight => self.state.ui.move_cursor_right(),

            Action::SubmitSearch => self.state.submit_search(),

            Action::MoveSelectionUp => {
                let count = self.result_count();
                self.state.ui.move_selection(-1, count);
            }
            Action::MoveSelectionDown => {
                let count = self.result_count();
                self.state.ui.move_selection(1, count);
            }

            Action::OpenSelectedProfile => {
                if let Err(e) = self.state.open_selected_profile() {
                    warn!(error = %e, "Browser launch failed");
                }
            }

            Action::Resize(_, _) => self.state.ui.request_redraw(),

            Action::NoOp => {}
        }

        true
    }

    fn result_count(&self) -> usize {
        self.state.search.records().map_or(0, <[MatchRecord]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, model::search_state::SearchState};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn event_loop() -> EventLoop {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let state = AppState::new(Arc::new(Config::default()), task_tx);
        EventLoop::new(state, task_rx)
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
    fn quit_action_terminates() {
        let mut el = event_loop();
        assert!(!el.handle_action(Action::Quit));
        assert!(el.handle_action(Action::NoOp));
    }

    #[test]
    fn typing_actions_edit_the_query() {
        let mut el = event_loop();
        for ch in "nlp".chars() {
            el.handle_action(Action::InsertChar(ch));
        }
        assert_eq!(el.state().ui.input, "nlp");

        el.handle_action(Action::DeleteCharBefore);
        assert_eq!(el.state().ui.input, "nl");

        el.handle_action(Action::ClearInput);
        assert_eq!(el.state().ui.input, "");
    }

    #[test]
    fn selection_actions_respect_result_count() {
        let mut el = event_loop();
        el.handle_action(Action::MoveSelectionDown);
        assert_eq!(el.state().ui.selected, None);

        el.state_mut().ui.input = "graphics".into();
        let (ticket, _) = el.state_mut().begin_search().unwrap();
        el.apply_task_result(TaskResult::SearchCompleted {
            ticket,
            outcome: Ok(vec![record("A", 0.9), record("B", 0.8)]),
        });

        el.handle_action(Action::MoveSelectionDown);
        el.handle_action(Action::MoveSelectionDown);
        el.handle_action(Action::MoveSelectionDown);
        assert_eq!(el.state().ui.selected, Some(1));

        el.handle_action(Action::MoveSelectionUp);
        assert_eq!(el.state().ui.selected, Some(0));
    }

    #[tokio::test]
    async fn completions_flow_from_channel_into_state() {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let state = AppState::new(Arc::new(Config::default()), task_tx.clone());
        let mut el = EventLoop::new(state, task_rx);

        el.state_mut().ui.input = "hci".into();
        let (ticket, _) = el.state_mut().begin_search().unwrap();

        task_tx
            .send(TaskResult::SearchCompleted {
                ticket,
                outcome: Ok(vec![record("C", 0.7)]),
            })
            .unwrap();

        let result = el.next_task_result().await.unwrap();
        el.apply_task_result(result);

        assert!(matches!(
            &el.state().search,
            SearchState::Success(list) if list.len() == 1
        ));
    }

    #[test]
    fn overlapping_submissions_keep_only_the_latest_outcome() {
        let mut el = event_loop();
        el.state_mut().ui.input = "theory".into();
        let (first, _) = el.state_mut().begin_search().unwrap();
        let (second, _) = el.state_mut().begin_search().unwrap();

        el.apply_task_result(TaskResult::SearchCompleted {
            ticket: second,
            outcome: Err("fresh failure".to_string()),
        });
        el.apply_task_result(TaskResult::SearchCompleted {
            ticket: first,
            outcome: Ok(vec![record("stale", 0.99)]),
        });

        assert_eq!(
            el.state().search,
            SearchState::Error("fresh failure".to_string())
        );
    }
}
