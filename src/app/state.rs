use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use ratatui::layout::Rect;

use crate::layout::{GeneratorError, Grid, Size};
use crate::palette::Palette;

use super::{AppEvent, MOMA_URL, Options, Overlay, Slider};

const FINE_STEP: i16 = 1;
const COARSE_STEP: i16 = 10;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub grid: Grid,
    pub palette: Palette,
    pub slider: Slider,
    pub overlay: Overlay,
    pub status: Option<String>,
    pub layout: Option<PaletteLayout>,
    rng: StdRng,
    open_url: fn(&str) -> Result<()>,
}

/// Cell sizes computed for one palette area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteLayout {
    pub area: Rect,
    pub rows: Result<Vec<Vec<Size>>, GeneratorError>,
}

fn open_in_browser(url: &str) -> Result<()> {
    opener::open_browser(url).with_context(|| format!("failed to open {url}"))
}

impl App {
    pub fn new(options: Options) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let palette = Palette::random(usize::from(options.grid.items()), &mut rng);
        tracing::info!(
            items = options.grid.items(),
            columns = options.grid.columns(),
            seed = ?options.seed,
            "palette created"
        );
        Self {
            running: true,
            grid: options.grid,
            palette,
            slider: Slider::default(),
            overlay: Overlay::None,
            status: None,
            layout: None,
            rng,
            open_url: open_in_browser,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    /// Makes sure the cell sizes match `area`, generating a new layout when it changed.
    pub fn fit_to(&mut self, area: Rect) {
        if self.layout.as_ref().is_some_and(|layout| layout.area == area) {
            return;
        }
        let generator_rng = StdRng::seed_from_u64(self.rng.random());
        let rows = self.grid.layout(area.width, area.height, generator_rng);
        match &rows {
            Ok(_) => tracing::debug!(?area, "palette layout generated"),
            Err(err) => tracing::warn!(?area, %err, "palette does not fit"),
        }
        self.layout = Some(PaletteLayout { area, rows });
    }

    fn handle_key(&mut self, key: KeyCode) {
        match self.overlay {
            Overlay::Help => {
                self.handle_help_key(key);
                return;
            }
            Overlay::Info => {
                self.handle_info_key(key);
                return;
            }
            Overlay::None => {}
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => self.overlay = Overlay::Help,
            KeyCode::Char('i') => self.overlay = Overlay::Info,
            KeyCode::Char('r') => self.regenerate(),
            KeyCode::Left | KeyCode::Char('h') => self.slider.nudge(-FINE_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.slider.nudge(FINE_STEP),
            KeyCode::Down | KeyCode::PageDown => self.slider.nudge(-COARSE_STEP),
            KeyCode::Up | KeyCode::PageUp => self.slider.nudge(COARSE_STEP),
            KeyCode::Enter | KeyCode::Char(' ') => self.release_slider(),
            KeyCode::Esc => {
                if self.slider.is_tracking() {
                    self.slider.cancel();
                    self.status = Some("Slider change cancelled".to_string());
                } else {
                    self.status = None;
                }
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => self.overlay = Overlay::None,
            _ => {}
        }
    }

    fn handle_info_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.overlay = Overlay::None;
                self.visit_website();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn visit_website(&mut self) {
        match (self.open_url)(MOMA_URL) {
            Ok(()) => {
                tracing::info!(url = MOMA_URL, "opened website");
                self.status = Some(format!("Opened {MOMA_URL}"));
            }
            Err(err) => {
                tracing::error!("{err:#}");
                self.status = Some(format!("{err:#}"));
            }
        }
    }

    fn release_slider(&mut self) {
        let Some(delta) = self.slider.release() else {
            return;
        };
        if delta == 0 {
            return;
        }
        self.palette.shift(delta);
        tracing::debug!(delta, "palette shifted");
        self.status = Some(format!("Shifted colors by {delta:+}"));
    }

    fn regenerate(&mut self) {
        self.slider.cancel();
        self.palette = Palette::random(usize::from(self.grid.items()), &mut self.rng);
        self.layout = None;
        tracing::info!("palette regenerated");
        self.status = Some("New palette".to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::palette::Rgb;

    fn app() -> App {
        App::new(Options {
            grid: Grid::new(12, 3).unwrap(),
            seed: Some(17),
        })
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.update(AppEvent::KeyPress(*key));
        }
    }

    #[test]
    fn slider_gesture_shifts_non_white_cells() {
        let mut app = app();
        let before: Vec<Rgb> = app.palette.colors().to_vec();
        press(&mut app, &[KeyCode::Right, KeyCode::Up, KeyCode::Left]);
        assert_eq!(app.palette.colors(), before.as_slice());

        press(&mut app, &[KeyCode::Enter]);
        let expected: Vec<Rgb> = before.iter().map(|color| color.shifted(10)).collect();
        assert_eq!(app.palette.colors(), expected.as_slice());
        assert_eq!(app.slider.position(), 10);
        assert_eq!(app.status.as_deref(), Some("Shifted colors by +10"));
    }

    #[test]
    fn slide_back_to_start_leaves_palette_alone() {
        let mut app = app();
        let before = app.palette.clone();
        press(&mut app, &[KeyCode::Right, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.palette, before);
        assert!(!app.slider.is_tracking());
        assert_eq!(app.status, None);
    }

    #[test]
    fn escape_cancels_gesture() {
        let mut app = app();
        let before = app.palette.clone();
        press(&mut app, &[KeyCode::Up, KeyCode::Esc, KeyCode::Enter]);
        assert_eq!(app.palette, before);
        assert_eq!(app.slider.position(), 0);
    }

    #[test]
    fn seeded_apps_agree() {
        let mut first = app();
        let mut second = app();
        let area = Rect::new(0, 3, 80, 24);
        first.fit_to(area);
        second.fit_to(area);
        assert_eq!(first.palette, second.palette);
        assert_eq!(first.layout, second.layout);
    }

    #[test]
    fn layout_follows_area() {
        let mut app = app();
        app.fit_to(Rect::new(0, 0, 80, 20));
        let rows = app.layout.as_ref().unwrap().rows.clone().unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.iter().map(|s| s.width).sum::<u16>() == 80));

        app.fit_to(Rect::new(0, 0, 120, 40));
        let rows = app.layout.as_ref().unwrap().rows.clone().unwrap();
        assert!(rows.iter().all(|row| row.iter().map(|s| s.width).sum::<u16>() == 120));
        assert!(rows.iter().flatten().all(|size| size.height == 10));
    }

    #[test]
    fn tiny_area_keeps_error() {
        let mut app = app();
        app.fit_to(Rect::new(0, 0, 2, 2));
        assert!(app.layout.as_ref().unwrap().rows.is_err());
    }

    #[test]
    fn regenerate_drops_layout() {
        let mut app = app();
        app.fit_to(Rect::new(0, 0, 80, 20));
        let before = app.palette.clone();
        press(&mut app, &[KeyCode::Char('r')]);
        assert!(app.layout.is_none());
        assert_ne!(app.palette, before);
        assert!(app.palette.white_index().is_some());
    }

    #[test]
    fn info_dialog_visits_website() {
        let mut app = app();
        app.open_url = |_| Ok(());
        press(&mut app, &[KeyCode::Char('i')]);
        assert_eq!(app.overlay, Overlay::Info);
        press(&mut app, &[KeyCode::Right]);
        assert!(!app.slider.is_tracking());
        press(&mut app, &[KeyCode::Char('y')]);
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.status, Some(format!("Opened {MOMA_URL}")));
    }

    #[test]
    fn info_dialog_reports_browser_failure() {
        let mut app = app();
        app.open_url = |_| Err(anyhow!("no browser"));
        press(&mut app, &[KeyCode::Char('i'), KeyCode::Enter]);
        assert_eq!(app.status.as_deref(), Some("no browser"));

        press(&mut app, &[KeyCode::Char('i'), KeyCode::Char('n')]);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn help_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('?')]);
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.overlay, Overlay::None);
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
    }
}
