pub mod app;
pub mod components;
pub mod event_handler;
pub mod state;
pub mod theme;

pub use app::{App, run};
pub use components::{DisplayOptions, PlaybackView};
pub use event_handler::{EventHandler, KeyAction};
pub use state::{StatusKind, ViewState};
pub use theme::Theme;
