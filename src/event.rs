use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::KeyPress(key.code)),
            // the next draw picks up the new size
            Event::Resize(..) => Some(AppEvent::Tick),
            _ => None,
        });
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            app.fit_to(crate::ui::palette_area(frame.area()));
            crate::ui::draw(frame, app);
        })?;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event);
        }
    }
    tracing::info!("event loop finished");
    Ok(())
}
