mod state;

use crossterm::event::KeyCode;

pub use state::{App, RANGE_MAX, RANGE_MIN};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}
