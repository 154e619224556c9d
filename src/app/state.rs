use crossterm::event::KeyCode;
use rand::Rng;

use crate::color::{self, Rgb};

use super::AppEvent;

/// Channel range for the ranged swatch pair.
pub const RANGE_MIN: i64 = 50;
pub const RANGE_MAX: i64 = 205;

/// One generated-together set of swatches, regenerated as a whole on
/// every refresh.
pub struct SwatchBoard {
    pub rgb_any: Rgb,
    pub rgb_range: Rgb,
    pub hex_any: String,
    pub hex_range: String,
    pub flag: String,
}

impl SwatchBoard {
    /// Draw a fresh board. The ranged hex swatch is converted from the
    /// ranged RGB triple so the pair always describes the same color.
    pub fn generate(rng: &mut dyn Rng) -> Self {
        let rgb_any = color::random_rgb(rng);
        let rgb_range = color::random_rgb_in_range(rng, RANGE_MIN as f64, RANGE_MAX as f64);
        let hex_any = color::random_hex_color(rng);
        let hex_range = rgb_range.to_hex();
        let flag = color::flag_color(rng);
        Self {
            rgb_any,
            rgb_range,
            hex_any,
            hex_range,
            flag,
        }
    }
}

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub board: SwatchBoard,
    pub refreshes: u64,
    rng: Box<dyn Rng>,
}

impl App {
    pub fn new(mut rng: Box<dyn Rng>) -> Self {
        let board = SwatchBoard::generate(rng.as_mut());
        Self {
            running: true,
            board,
            refreshes: 0,
            rng,
        }
    }

    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => self.refresh(),
            _ => {}
        }
    }

    fn refresh(&mut self) {
        self.board = SwatchBoard::generate(self.rng.as_mut());
        self.refreshes += 1;
    }
}
