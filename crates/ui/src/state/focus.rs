use super::ViewState;
use turnplay_core::{Playback, Turn};

impl ViewState {
    /// Index of the focused turn within the revealed prefix
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The focused turn, if it is revealed
    pub fn focused_turn<'a>(&self, playback: &'a Playback) -> Option<&'a Turn> {
        self.focused.and_then(|i| playback.visible_prefix().get(i))
    }

    /// Move focus onto the playback cursor
    pub fn follow_cursor(&mut self, cursor: Option<usize>) {
        if self.focused != cursor {
            self.focused = cursor;
            self.reset_scroll();
        }
    }

    /// Focus the next revealed turn
    pub fn focus_next(&mut self, visible: usize) -> bool {
        match self.focused {
            Some(current) if current + 1 < visible => {
                self.focused = Some(current + 1);
                self.reset_scroll();
                true
            }
            None if visible > 0 => {
                self.focused = Some(0);
                self.reset_scroll();
                true
            }
            _ => false,
        }
    }

    /// Focus the previous revealed turn
    pub fn focus_prev(&mut self) -> bool {
        match self.focused {
            Some(current) if current > 0 => {
                self.focused = Some(current - 1);
                self.reset_scroll();
                true
            }
            _ => false,
        }
    }

    pub(super) fn clamp_focus(&mut self, visible: usize) {
        self.focused = match (self.focused, visible) {
            (_, 0) => None,
            (Some(current), _) if current >= visible => Some(visible - 1),
            (None, _) => Some(visible - 1),
            (focused, _) => focused,
        };
    }
}
