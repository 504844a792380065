mod event_loop;
mod keybinds;

pub use event_loop::run;

use crate::components::{DisplayOptions, PlaybackView};
use crate::state::ViewState;

use ratatui::Frame;
use std::path::PathBuf;
use turnplay_core::logging::{PrivacyConfig, sanitize_path};
use turnplay_core::{Playback, PlaybackCommand, Transcript, read_transcript_file};

/// Lines moved per scroll key press
pub const SCROLL_STEP: usize = 5;

/// Main TUI application
///
/// Owns the playback engine and the UI-only view state built on top of it.
pub struct App {
    playback: Playback,
    view: ViewState,
    options: DisplayOptions,
    privacy: PrivacyConfig,
    source: Option<PathBuf>,
    should_exit: bool,
}

impl App {
    /// Create a new application
    pub fn new(playback: Playback, options: DisplayOptions) -> Self {
        let view = ViewState::new(&playback);
        Self { playback, view, options, privacy: PrivacyConfig::default(), source: None, should_exit: false }
    }

    /// Remember the file the transcript came from so it can be reloaded
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Set how message text appears in logs
    pub fn with_privacy(mut self, privacy: PrivacyConfig) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Re-read the source file and load it
    ///
    /// Unreadable or invalid files leave the current transcript in place.
    pub fn reload(&mut self) {
        let Some(path) = self.source.as_deref() else {
            self.view.set_info("No transcript file to reload");
            return;
        };

        match read_transcript_file(path) {
            Ok(transcript) => self.load(transcript),
            Err(e) => {
                tracing::warn!(path = %sanitize_path(path), error = %e, "reload failed");
                self.view.set_error(e.to_string());
            }
        }
    }

    /// Replace the transcript; rejected transcripts leave playback untouched
    fn load(&mut self, transcript: Transcript) {
        self.apply(PlaybackCommand::Load(transcript));
    }

    /// Draw the whole screen
    pub fn render(&self, frame: &mut Frame<'_>) {
        PlaybackView::new(&self.playback, &self.view, self.options).render(frame, frame.area());
    }
}
