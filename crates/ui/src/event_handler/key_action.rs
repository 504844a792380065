/// Actions that can be triggered by key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Reveal the next turn
    Advance,
    /// Hide the most recently revealed turn
    Retreat,
    /// Jump to the last turn
    RevealAll,
    /// Jump back to the first turn
    Rewind,
    /// Expand or collapse processing steps of the focused turn
    ToggleDetail,
    /// Move focus to the next revealed turn
    FocusNext,
    /// Move focus to the previous revealed turn
    FocusPrev,
    /// Collapse every expanded turn
    CollapseAll,
    /// Re-read the transcript file from disk
    Reload,
    ScrollUp,
    ScrollDown,
    /// Leave the player
    Exit,
}
