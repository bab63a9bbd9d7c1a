mod slider;
mod state;

use crossterm::event::KeyCode;

use crate::layout::Grid;

pub use slider::{SLIDER_MAX, Slider};
pub use state::App;

/// Website offered by the "More information" dialog.
pub const MOMA_URL: &str = "http://www.moma.org";

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// Popup drawn on top of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Info,
}

/// Startup options for the interactive palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub grid: Grid,
    pub seed: Option<u64>,
}
