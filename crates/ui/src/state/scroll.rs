use super::ViewState;

impl ViewState {
    /// Scroll up
    pub fn scroll_up(&mut self, lines: usize) {
        let lines = i32::try_from(lines).unwrap_or(i32::MAX);
        self.scroll_adjust = self.scroll_adjust.saturating_sub(lines);
    }

    /// Scroll down
    pub fn scroll_down(&mut self, lines: usize) {
        let lines = i32::try_from(lines).unwrap_or(i32::MAX);
        self.scroll_adjust = self.scroll_adjust.saturating_add(lines);
    }

    /// Drop manual scrolling and snap back to the focused turn
    pub fn reset_scroll(&mut self) {
        self.scroll_adjust = 0;
    }

    /// Manual adjustment in lines, negative is up
    pub fn scroll_adjust(&self) -> i32 {
        self.scroll_adjust
    }

    /// First visible line for content of `total` lines in a viewport of `height`
    ///
    /// `anchor` is the line where the focused turn starts. The offset is
    /// always within `0..=total - height`.
    pub fn resolve_offset(&self, anchor: usize, total: usize, height: usize) -> usize {
        let max_offset = total.saturating_sub(height);
        let base = anchor.min(max_offset) as i64;
        (base + i64::from(self.scroll_adjust)).clamp(0, max_offset as i64) as usize
    }
}
