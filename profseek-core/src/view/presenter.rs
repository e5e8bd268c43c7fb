//! src/view/presenter.rs
//! ============================================================================
//! # Presenter: SearchState → Display Payload
//!
//! Pure mapping from the search lifecycle (plus the "has the user ever
//! searched" flag) to a display decision. `DisplayPayload` is an enum, so
//! exactly one of {busy indicator, error banner, zero-matches notice, ready
//! notice, card list} is representable at a time. No network access, no
//! mutable state.

use crate::{
    config::Config,
    model::{
        match_record::{MatchRecord, resolve_asset_url},
        search_state::SearchState,
    },
};

/// Marker shown when a record carries no specialization.
pub const UNSPECIFIED_MARKER: &str = "Not specified";

/// Everything the renderer needs for one faculty card. URLs are already
/// normalized; optional fields that should be omitted are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCard {
    pub name: String,

    /// `round(score * 100)`.
    pub percent: u16,

    pub specialization: String,

    /// Omitted from the card entirely when `None`.
    pub teaching: Option<String>,

    /// Fetchable portrait URL; falls back to the configured placeholder.
    pub portrait_url: String,

    pub profile_url: Option<String>,
}

/// The mutually exclusive display decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayPayload {
    /// Pre-search: invite the user to type a query.
    Ready,

    /// A request is in flight.
    Busy,

    /// The last submission resolved to an error.
    Failure(String),

    /// A completed search matched nothing.
    NoMatches,

    /// One card per record, in service ranking order.
    Cards(Vec<MatchCard>),
}

/// Map the current search state to its display payload.
///
/// Precedence: loading, then error, then zero-matches (only after a
/// submission), then cards, then the pre-search notice.
#[must_use]
pub fn present(search: &SearchState, has_searched: bool, config: &Config) -> DisplayPayload {
    match search {
        SearchState::Loading => DisplayPayload::Busy,
        SearchState::Error(message) => DisplayPayload::Failure(message.clone()),
        SearchState::Success(list) if list.is_empty() && has_searched => DisplayPayload::NoMatches,
        SearchState::Success(list) if !list.is_empty() => {
            DisplayPayload::Cards(list.iter().map(|rec| build_card(rec, config)).collect())
        }
        _ => DisplayPayload::Ready,
    }
}

fn build_card(record: &MatchRecord, config: &Config) -> MatchCard {
    let portrait_url = record
        .image_url
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map_or_else(
            || config.placeholder_image.clone(),
            |raw| resolve_asset_url(raw, &config.asset_origin),
        );

    MatchCard {
        name: record.name.clone(),
        percent: record.score_percent(),
        specialization: record
            .specialization
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNSPECIFIED_MARKER.to_string()),
        teaching: record.teaching.clone().filter(|s| !s.trim().is_empty()),
        portrait_url,
        profile_url: record.profile_url.clone().filter(|s| !s.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            asset_origin: "https://example.org".to_string(),
            placeholder_image: "https://example.org/images/placeholder.png".to_string(),
            ..Config::default()
        }
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
    fn loading_takes_precedence() {
        let payload = present(&SearchState::Loading, true, &config());
        assert_eq!(payload, DisplayPayload::Busy);
    }

    #[test]
    fn error_renders_its_message_not_the_zero_matches_notice() {
        let payload = present(&SearchState::Error("warming up".into()), true, &config());
        assert_eq!(payload, DisplayPayload::Failure("warming up".to_string()));
    }

    #[test]
    fn empty_success_after_search_is_zero_matches() {
        let payload = present(&SearchState::Success(vec![]), true, &config());
        assert_eq!(payload, DisplayPayload::NoMatches);
    }

    #[test]
    fn idle_maps_to_the_ready_notice() {
        let payload = present(&SearchState::Idle, false, &config());
        assert_eq!(payload, DisplayPayload::Ready);
    }

    #[test]
    fn cards_preserve_service_order_and_percentages() {
        let state = SearchState::Success(vec![record("A", 0.87), record("B", 0.42)]);
        let DisplayPayload::Cards(cards) = present(&state, true, &config()) else {
            panic!("expected cards");
        };

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "A");
        assert_eq!(cards[0].percent, 87);
        assert_eq!(cards[1].name, "B");
        assert_eq!(cards[1].percent, 42);
    }

    #[test]
    fn missing_specialization_uses_the_marker() {
        let state = SearchState::Success(vec![record("A", 0.5)]);
        let DisplayPayload::Cards(cards) = present(&state, true, &config()) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].specialization, UNSPECIFIED_MARKER);
    }

    #[test]
    fn missing_teaching_is_omitted_not_empty() {
        let mut rec = record("A", 0.5);
        rec.teaching = Some("   ".to_string());
        let state = SearchState::Success(vec![rec]);

        let DisplayPayload::Cards(cards) = present(&state, true, &config()) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].teaching, None);
    }

    #[test]
    fn portraits_resolve_relative_paths_and_fall_back_to_placeholder() {
        let mut with_path = record("A", 0.5);
        with_path.image_url = Some("/images/x.png".to_string());
        let mut absolute = record("B", 0.5);
        absolute.image_url = Some("https://cdn.example.com/y.png".to_string());
        let bare = record("C", 0.5);

        let state = SearchState::Success(vec![with_path, absolute, bare]);
        let DisplayPayload::Cards(cards) = present(&state, true, &config()) else {
            panic!("expected cards");
        };

        assert_eq!(cards[0].portrait_url, "https://example.org/images/x.png");
        assert_eq!(cards[1].portrait_url, "https://cdn.example.com/y.png");
        assert_eq!(
            cards[2].portrait_url,
            "https://example.org/images/placeholder.png"
        );
    }
}
