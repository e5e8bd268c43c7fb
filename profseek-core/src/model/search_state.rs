//! src/model/search_state.rs
//! ============================================================================
//! # SearchState & UIState
//!
//! `SearchState` is the single tagged value describing the search lifecycle.
//! Exactly one variant is live at any time, which makes contradictory
//! combinations ("loading" and "error" both true) unrepresentable. `UIState`
//! carries the input buffer and selection alongside it.

use compact_str::CompactString;

use crate::model::match_record::MatchRecord;

/// Lifecycle of the current search. Initial value is `Idle`; transitions are
/// driven only by submission and by the matching completion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No search has been submitted yet.
    #[default]
    Idle,

    /// A request is in flight. Previous results are already gone.
    Loading,

    /// Request completed; the list may be empty (a valid zero-matches
    /// outcome, distinct from an error).
    Success(Vec<MatchRecord>),

    /// Request failed or returned an unexpected shape.
    Error(String),
}

impl SearchState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Records of the current success state, if any.
    #[must_use]
    pub fn records(&self) -> Option<&[MatchRecord]> {
        match self {
            Self::Success(list) => Some(list),
            _ => None,
        }
    }
}

/// UI-local state: the query input buffer, card selection, and redraw flag.
#[derive(Debug, Clone)]
pub struct UIState {
    pub input: CompactString,
    pub input_cursor: usize,

    /// Selected card index within the current result list.
    pub selected: Option<usize>,

    /// Whether the user has ever submitted a search this session. Drives the
    /// distinction between the pre-search and zero-matches placeholders.
    pub has_searched: bool,

    needs_redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: CompactString::new(""),
            input_cursor: 0,
            selected: None,
            has_searched: false,
            needs_redraw: true,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    #[inline]
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub fn clear_input(&mut self) {
        self.input = CompactString::new("");
        self.input_cursor = 0;
        self.request_redraw();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut input_str = self.input.to_string();
        input_str.insert(self.input_cursor, ch);
        self.input = input_str.into();
        self.input_cursor += ch.len_utf8();
        self.request_redraw();
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.input_cursor > 0 {
            let mut input_str = self.input.to_string();
            let char_indices: Vec<_> = input_str.char_indices().collect();

            if let Some((char_pos, _)) = char_indices
                .iter()
                .rev()
                .find(|(pos, _)| *pos < self.input_cursor)
            {
                input_str.remove(*char_pos);
                self.input = input_str.into();
                self.input_cursor = *char_pos;
                self.request_redraw();
                return true;
            }
        }
        false
    }

    pub fn move_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input.as_str()[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(pos, _)| pos);
            self.input_cursor = prev;
            self.request_redraw();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            let next = self.input.as_str()[self.input_cursor..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            self.input_cursor += next;
            self.request_redraw();
        }
    }

    /// Move the card selection, clamped to `count` entries.
    pub fn move_selection(&mut self, delta: isize, count: usize) {
        if count == 0 {
            self.selected = None;
            return;
        }

        let current = self.selected.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, count as isize - 1) as usize;
        self.selected = Some(next);
        self.request_redraw();
    }

    /// Keep the selection valid against the current result count.
    pub fn validate_selection(&mut self, count: usize) {
        match self.selected {
            Some(_) if count == 0 => self.selected = None,
            Some(sel) if sel >= count => self.selected = Some(count - 1),
            None if count > 0 => self.selected = Some(0),
            _ => {}
        }
    }
}
