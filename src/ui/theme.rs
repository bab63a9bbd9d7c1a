use ratatui::style::Color;

/// Colors of the chrome around the palette.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Borders and section titles
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Slider while a gesture is running
    pub fn active() -> Color {
        Color::LightGreen
    }

    /// Status messages
    pub fn warn() -> Color {
        Color::Yellow
    }

    pub fn highlight() -> Color {
        Color::Cyan
    }

    pub fn dim() -> Color {
        Color::DarkGray
    }

    pub fn text() -> Color {
        Color::White
    }

    /// Titles and the idle slider
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
