use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Blocks until the next crossterm event and maps it to an `AppEvent`.
/// Non-key events (resize, focus) become a `Tick` so the frame is redrawn.
pub fn next() -> Result<Option<AppEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(Some(AppEvent::KeyPress(key.code)))
        }
        Event::Key(_) => Ok(None),
        _ => Ok(Some(AppEvent::Tick)),
    }
}

/// Runs the main event loop. The swatch board only changes on input, so the
/// loop blocks between redraws instead of polling on a tick rate.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = next()? {
            app.update(event);
        }
    }
    Ok(())
}
