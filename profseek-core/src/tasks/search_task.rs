//! src/tasks/search_task.rs
//! ============================================================================
//! # Search Task: Background Query Against the Ranking Service
//!
//! Spawns an async HTTP POST carrying the query, validates the response shape
//! once at this boundary, and reports the outcome back to the event loop
//! stamped with the submission ticket. The event loop decides whether the
//! ticket is still current; this task never touches state directly.

use reqwest::Client;
use serde_json::Value;
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    controller::event_loop::TaskResult, error::AppError, model::match_record::MatchRecord,
};

/// Shown for connectivity-level failures; the underlying cause goes to the
/// log only.
pub const MSG_CONNECTIVITY: &str =
    "Could not reach the search service. Check your connection and try again.";

/// Shown when the service answered but the body had no usable `results`
/// array and no `message` of its own.
pub const MSG_UNEXPECTED: &str = "The search service returned an unexpected response.";

/// Spawn a single search request. Completion is observed through the
/// `TaskResult` channel; there is no retry and no client-side deadline.
pub fn spawn_search(
    ticket: u64,
    query: String,
    client: Client,
    search_url: String,
    task_tx: UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(ticket, %query, url = %search_url, "Submitting search request");

        let outcome = match run_search(&client, &search_url, &query).await {
            Ok(records) => {
                debug!(ticket, matches = records.len(), "Search completed");
                Ok(records)
            }
            Err(err) => {
                warn!(ticket, error = %err, "Search failed");
                Err(user_message(&err))
            }
        };

        // Receiver gone means the app is shutting down.
        let _ = task_tx.send(TaskResult::SearchCompleted { ticket, outcome });
    })
}

async fn run_search(
    client: &Client,
    search_url: &str,
    query: &str,
) -> Result<Vec<MatchRecord>, AppError> {
    let response = client
        .post(search_url)
        .json(&serde_json::json!({ "query": query }))
        .send()
        .await
        .map_err(|e| AppError::transport(e.to_string()))?;

    let status_2xx = response.status().is_success();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::transport(e.to_string()))?;

    interpret_body(status_2xx, &body)
}

/// Classify a response body into a validated record list or a typed error.
///
/// - 2xx with a `results` array (even empty) is success.
/// - well-formed JSON without a usable `results` array is a malformed
///   response: the server's own `message` wins, else [`MSG_UNEXPECTED`].
/// - non-2xx uses the body's `message` when one parses, else it counts as a
///   transport failure.
pub(crate) fn interpret_body(status_2xx: bool, body: &str) -> Result<Vec<MatchRecord>, AppError> {
    let value: Option<Value> = serde_json::from_str(body).ok();

    if !status_2xx {
        return Err(server_message(value.as_ref()).map_or_else(
            || AppError::transport(format!("non-2xx status, body: {}", truncate(body, 200))),
            AppError::MalformedResponse,
        ));
    }

    let Some(value) = value else {
        return Err(AppError::MalformedResponse(MSG_UNEXPECTED.to_string()));
    };

    match value.get("results") {
        Some(results) if results.is_array() => {
            serde_json::from_value::<Vec<MatchRecord>>(results.clone()).map_err(|e| {
                debug!(error = %e, "Record inside `results` failed validation");
                AppError::MalformedResponse(
                    server_message(Some(&value)).unwrap_or_else(|| MSG_UNEXPECTED.to_string()),
                )
            })
        }
        _ => Err(AppError::MalformedResponse(
            server_message(Some(&value)).unwrap_or_else(|| MSG_UNEXPECTED.to_string()),
        )),
    }
}

/// The text shown in the error banner for a failed search.
pub(crate) fn user_message(err: &AppError) -> String {
    match err {
        AppError::Transport { .. } => MSG_CONNECTIVITY.to_string(),
        AppError::MalformedResponse(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A human-readable explanation supplied by the service, if any.
fn server_message(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(status_2xx: bool, body: &str) -> Result<Vec<MatchRecord>, String> {
        interpret_body(status_2xx, body).map_err(|e| user_message(&e))
    }

    #[test]
    fn empty_results_array_is_success() {
        let outcome = resolve(true, r#"{ "results": [] }"#);
        assert_eq!(outcome, Ok(vec![]));
    }

    #[test]
    fn records_keep_service_order() {
        let outcome = resolve(
            true,
            r#"{ "results": [
                { "name": "A", "score": 0.87 },
                { "name": "B", "score": 0.42 }
            ] }"#,
        )
        .unwrap();

        let names: Vec<&str> = outcome.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(outcome[0].score_percent(), 87);
        assert_eq!(outcome[1].score_percent(), 42);
    }

    #[test]
    fn missing_results_field_is_malformed_with_fallback_text() {
        let outcome = resolve(true, r#"{ "status": "warming up" }"#);
        assert_eq!(outcome, Err(MSG_UNEXPECTED.to_string()));
    }

    #[test]
    fn missing_results_field_prefers_server_message() {
        let outcome = resolve(true, r#"{ "message": "index rebuilding, hold on" }"#);
        assert_eq!(outcome, Err("index rebuilding, hold on".to_string()));
    }

    #[test]
    fn results_with_wrong_type_is_malformed() {
        let outcome = resolve(true, r#"{ "results": "lots" }"#);
        assert_eq!(outcome, Err(MSG_UNEXPECTED.to_string()));
    }

    #[test]
    fn invalid_record_shape_is_malformed() {
        // Second record lacks the required `name`.
        let outcome = resolve(
            true,
            r#"{ "results": [ { "name": "A", "score": 0.9 }, { "score": 0.1 } ] }"#,
        );
        assert_eq!(outcome, Err(MSG_UNEXPECTED.to_string()));
    }

    #[test]
    fn non_2xx_with_json_message_uses_it_verbatim() {
        let outcome = resolve(false, r#"{ "message": "service rebooting" }"#);
        assert_eq!(outcome, Err("service rebooting".to_string()));
    }

    #[test]
    fn non_2xx_without_parseable_body_is_connectivity() {
        let err = interpret_body(false, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::Transport { .. }));
        assert_eq!(user_message(&err), MSG_CONNECTIVITY);
    }

    #[test]
    fn non_json_2xx_body_is_malformed() {
        let outcome = resolve(true, "plain text surprise");
        assert_eq!(outcome, Err(MSG_UNEXPECTED.to_string()));
    }

    #[test]
    fn non_2xx_never_succeeds_even_with_results() {
        let outcome = resolve(false, r#"{ "results": [ { "name": "A", "score": 0.5 } ] }"#);
        assert!(outcome.is_err());
    }

    #[test]
    fn transport_details_never_reach_the_user() {
        let err = AppError::transport("dns error: no such host");
        assert_eq!(user_message(&err), MSG_CONNECTIVITY);
        assert!(!user_message(&err).contains("dns"));
    }
}
