//! UI event types.
//!
//! All external inputs (terminal, clock) are converted to `UiEvent` before
//! being processed by the reducer.

use std::time::Duration;

use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
///
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Clock tick. `now` is the time elapsed since mount.
    Tick { now: Duration },

    /// Frame event with current terminal dimensions.
    /// Emitted at the start of each frame before other events.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, mouse, resize).
    Terminal(CrosstermEvent),
}
