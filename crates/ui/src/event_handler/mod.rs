mod key_action;

pub use key_action::KeyAction;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Event handler for the playback TUI
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal
    ///
    /// Returns `Some(event)` if an event is available, `None` on timeout or error.
    /// Terminal errors are logged but not propagated, since they are typically
    /// fatal and the loop will exit on the next iteration.
    pub fn read() -> Option<Event> {
        match crossterm::event::poll(std::time::Duration::from_millis(100)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::error!(error = %e, "terminal read failed");
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::error!(error = %e, "event poll failed");
                None
            }
        }
    }

    /// Map a key press to an action
    pub fn handle_key_event(event: KeyEvent) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Some(KeyAction::Exit),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Char('n') => Some(KeyAction::Advance),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace | KeyCode::Char('p') => Some(KeyAction::Retreat),
            KeyCode::End | KeyCode::Char('G') => Some(KeyAction::RevealAll),
            KeyCode::Home | KeyCode::Char('g') => Some(KeyAction::Rewind),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Char('d') => Some(KeyAction::ToggleDetail),
            KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::FocusNext),
            KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::FocusPrev),
            KeyCode::Char('c') => Some(KeyAction::CollapseAll),
            KeyCode::Char('r') => Some(KeyAction::Reload),
            KeyCode::PageUp => Some(KeyAction::ScrollUp),
            KeyCode::PageDown => Some(KeyAction::ScrollDown),
            KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Exit),
            _ => None,
        }
    }

    /// Handle any terminal event
    pub fn handle_event(event: &Event) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event),
            _ => None,
        }
    }
}
