//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! The `Action` enum abstracts raw terminal events into meaningful commands,
//! giving the event loop a single interface to process.

/// A high-level action the application can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Clear the query input.
    ClearInput,

    /// Delete the character before the input cursor.
    DeleteCharBefore,

    /// Insert a character at the input cursor.
    InsertChar(char),

    /// Move the input cursor left.
    MoveCursorLeft,

    /// Move the input cursor right.
    MoveCursorRight,

    /// Move card selection down.
    MoveSelectionDown,

    /// Move card selection up.
    MoveSelectionUp,

    /// No operation. Used when an event is consumed but no state change is
    /// needed.
    NoOp,

    /// Open the selected card's profile link in the system browser.
    OpenSelectedProfile,

    /// Quit the application.
    Quit,

    /// A terminal resize event.
    Resize(u16, u16),

    /// Submit the current query to the ranking service.
    SubmitSearch,
}
