//! src/model/match_record.rs
//! ============================================================================
//! # MatchRecord: One Ranked Faculty Candidate
//!
//! The typed shape of a single entry in the ranking service's `results`
//! array. Deserialization happens exactly once, at the network boundary in
//! `tasks::search_task`; everything downstream works with validated records.

use serde::Deserialize;

/// One candidate faculty member returned by the ranking service.
///
/// `score` is cosine similarity in `[0, 1]`; display code converts it to a
/// rounded percentage. Optional fields stay `None` rather than empty strings
/// so the renderer can omit them outright.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub name: String,

    pub score: f64,

    #[serde(default)]
    pub specialization: Option<String>,

    #[serde(default)]
    pub teaching: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub profile_url: Option<String>,
}

impl MatchRecord {
    /// Similarity as a rounded percentage for display.
    #[must_use]
    pub fn score_percent(&self) -> u16 {
        (self.score * 100.0).round().clamp(0.0, u16::MAX as f64) as u16
    }
}

/// Normalize a portrait reference to a single fetchable URL.
///
/// Absolute URLs pass through unchanged; everything else is treated as a path
/// relative to the configured asset origin.
#[must_use]
pub fn resolve_asset_url(raw: &str, origin: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if raw.starts_with('/') {
        format!("{origin}{raw}")
    } else {
        format!("{origin}/{raw}")
    }
}
