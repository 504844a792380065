use super::App;
use crate::event_handler::EventHandler;

use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;
use std::panic;

/// Run the interactive player until the user exits
///
/// Enters raw mode and the alternate screen, and restores both on exit or panic.
pub fn run(app: &mut App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    tracing::info!(
        session = %app.playback().session_name(),
        turns = app.playback().turn_count(),
        "playback started"
    );

    let result = event_loop(app, &mut terminal);

    terminal.show_cursor()?;
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;

    tracing::info!(cursor = ?app.playback().cursor(), "playback finished");
    result
}

fn event_loop(app: &mut App, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    terminal.clear()?;
    terminal.draw(|frame| app.render(frame))?;

    while !app.should_exit() {
        if let Some(event) = EventHandler::read() {
            app.handle_event(event);
            terminal.draw(|frame| app.render(frame))?;
        }
    }

    Ok(())
}

fn restore_terminal() {
    let backend = CrosstermBackend::new(std::io::stdout());
    if let Ok(mut terminal) = Terminal::new(backend) {
        let _ = terminal.show_cursor();
    }
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
}
