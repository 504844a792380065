use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use std::io::Write;
use turnplay_core::{Playback, Transcript, Turn, parse_transcript};
use turnplay_ui::{App, DisplayOptions, KeyAction, Theme};

const DEMO: &str = include_str!("../../../demo/session.json");

fn demo_app(options: DisplayOptions) -> App {
    let transcript = parse_transcript(DEMO).unwrap();
    App::new(Playback::with_transcript(transcript).unwrap(), options)
}

fn render(app: &App, width: u16, height: u16) -> String {
    buffer_to_string(&render_buffer(app, width, height))
}

fn render_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().buffer().clone()
}

/// Foreground of the first cell on the status row
fn status_color(buffer: &Buffer) -> Color {
    buffer[(0, buffer.area().height - 1)].fg
}

#[test]
fn test_render_first_turn() {
    let app = demo_app(DisplayOptions::default());
    let content = render(&app, 120, 30);

    assert!(content.contains("Deadline anxiety"));
    assert!(content.contains("turn 1/4"));
    assert!(content.contains("agents: loop_router, Researcher, Asker, Clarifier"));
    assert!(content.contains("Check enquiry"));
    assert!(content.contains("feeling a bit anxious"));
    assert!(content.contains("▸ 4 steps"));
    assert!(!content.contains("Check understanding"));
    assert!(content.contains("1 of 4 revealed"));
}

#[test]
fn test_render_expanded_steps() {
    let mut app = demo_app(DisplayOptions::default());
    app.handle_action(KeyAction::ToggleDetail);
    let content = render(&app, 120, 30);

    assert!(content.contains("[route] loop_router: no research yet"));
    assert!(content.contains("[research] Researcher: searching"));
    assert!(content.contains("1.2s"));
    assert!(content.contains("1 expanded"));
    assert!(!content.contains("▸ 4 steps"));
}

#[test]
fn test_render_without_delays_or_agents() {
    let mut app = demo_app(DisplayOptions { show_delays: false, show_agents: false });
    app.handle_action(KeyAction::ToggleDetail);
    let content = render(&app, 120, 30);

    assert!(content.contains("[research] Researcher: searching"));
    assert!(!content.contains("1.2s"));
    assert!(!content.contains("agents:"));
}

#[test]
fn test_render_reveal_all_follows_last_turn() {
    let mut app = demo_app(DisplayOptions::default());
    app.handle_action(KeyAction::RevealAll);
    let content = render(&app, 100, 20);

    assert!(content.contains("turn 4/4"));
    assert!(content.contains("Turn 4"));
    assert!(content.contains("The session is complete."));
    assert!(content.contains("· end"));
}

#[test]
fn test_render_unknown_agent_step() {
    let mut app = demo_app(DisplayOptions::default());
    app.handle_action(KeyAction::RevealAll);
    app.handle_action(KeyAction::ToggleDetail);
    let content = render(&app, 120, 40);

    assert!(content.contains("[complete] loop_router: process complete"));
    assert!(content.contains("[general] unknown: session closed without errors"));
}

#[test]
fn test_render_status_line() {
    let mut app = demo_app(DisplayOptions::default());
    app.handle_action(KeyAction::Retreat);
    let content = render(&app, 120, 30);
    assert!(content.contains("Already at the first turn"));
}

#[test]
fn test_status_colors_follow_severity() {
    let one_turn = Transcript::new("solo", vec![Turn::new("only", "u", "a")]);
    let mut app = App::new(Playback::with_transcript(one_turn).unwrap(), DisplayOptions::default());
    assert_eq!(status_color(&render_buffer(&app, 100, 20)), Theme::MUTED);

    app.handle_action(KeyAction::Advance);
    let buffer = render_buffer(&app, 100, 20);
    assert!(buffer_to_string(&buffer).contains("Already at the last turn"));
    assert_eq!(status_color(&buffer), Theme::YELLOW);
    assert_ne!(status_color(&buffer), Theme::RED);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "turns": [
            {{ "turnId": "d", "userMessage": "u", "agentMessage": "a" }},
            {{ "turnId": "d", "userMessage": "u", "agentMessage": "a" }}
        ] }}"#
    )
    .unwrap();
    let mut app = app.with_source(file.path());
    app.handle_action(KeyAction::Reload);
    let buffer = render_buffer(&app, 100, 20);
    assert!(buffer_to_string(&buffer).contains("duplicate"));
    assert_eq!(status_color(&buffer), Theme::RED);
}

#[test]
fn test_render_empty_transcript() {
    let mut playback = Playback::new();
    playback
        .load_value(serde_json::json!({ "sessionName": "blank", "turns": [] }))
        .unwrap();
    let app = App::new(playback, DisplayOptions::default());
    let content = render(&app, 80, 12);

    assert!(content.contains("blank"));
    assert!(content.contains("turn 0/0"));
    assert!(content.contains("This transcript has no turns."));
    assert!(content.contains("no agents"));
}

#[test]
fn test_render_narrow_terminal() {
    let mut app = demo_app(DisplayOptions::default());
    app.handle_action(KeyAction::RevealAll);
    app.handle_action(KeyAction::ToggleDetail);
    let content = render(&app, 30, 10);
    assert!(content.contains("turn 4/4"));
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut s = String::new();
    for y in 0..buffer.area().height {
        for x in 0..buffer.area().width {
            s.push(buffer[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        s.push('\n');
    }
    s
}
