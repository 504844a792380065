mod focus;
mod scroll;

use turnplay_core::Playback;

/// Severity of the status-line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational notice such as saturated navigation
    Info,
    /// A rejected command
    Error,
}

/// UI-only state layered over a [`Playback`]
///
/// Tracks:
/// - Which revealed turn has focus (the target of detail toggles)
/// - Manual scroll adjustment relative to the focused turn
/// - The last notice or error shown on the status line
/// - The transcript generation the view was built for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    focused: Option<usize>,
    scroll_adjust: i32,
    status: Option<(StatusKind, String)>,
    generation: u64,
}

impl ViewState {
    /// Build view state positioned on the playback cursor
    pub fn new(playback: &Playback) -> Self {
        Self { focused: playback.cursor(), scroll_adjust: 0, status: None, generation: playback.generation() }
    }

    /// Reconcile with playback after a command
    ///
    /// A new transcript generation resets focus and scroll. Otherwise focus is
    /// clamped to the revealed prefix.
    pub fn sync(&mut self, playback: &Playback) {
        if self.generation != playback.generation() {
            self.generation = playback.generation();
            self.focused = playback.cursor();
            self.reset_scroll();
            return;
        }

        self.clamp_focus(playback.visible_prefix().len());
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, message)| message.as_str())
    }

    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.as_ref().map(|(kind, _)| *kind)
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some((StatusKind::Info, message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some((StatusKind::Error, message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
