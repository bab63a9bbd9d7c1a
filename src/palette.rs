/// Palette colors: random fills with a single white cell.
use rand::RngExt;
use ratatui::style::Color;

/// Channels wrap modulo this value when shifted, so a shifted color never reaches white.
const MAX_COLOR_VALUE: i32 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_white(self) -> bool {
        self == Self::WHITE
    }

    /// Moves every channel by `delta`, wrapping around. White is left alone.
    pub fn shifted(self, delta: i32) -> Self {
        if self.is_white() {
            return self;
        }
        let shift = |channel: u8| (i32::from(channel) + delta).rem_euclid(MAX_COLOR_VALUE) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Draws a random color that is not white.
pub fn random_color<R: RngExt>(rng: &mut R) -> Rgb {
    loop {
        let color = Rgb::new(rng.random(), rng.random(), rng.random());
        if !color.is_white() {
            return color;
        }
    }
}

/// Colors of every palette cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// `amount` colors where exactly one, at a random position, is white.
    pub fn random<R: RngExt>(amount: usize, rng: &mut R) -> Self {
        if amount == 0 {
            return Self { colors: Vec::new() };
        }
        let white_index = rng.random_range(0..amount);
        let colors = (0..amount)
            .map(|index| {
                if index == white_index {
                    Rgb::WHITE
                } else {
                    random_color(rng)
                }
            })
            .collect();
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn white_index(&self) -> Option<usize> {
        self.colors.iter().position(|color| color.is_white())
    }

    /// Applies a slider movement of `delta` to every non-white cell.
    pub fn shift(&mut self, delta: i32) {
        for color in &mut self.colors {
            *color = color.shifted(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn palette_has_exactly_one_white() {
        for seed in 0..100 {
            let palette = Palette::random(12, &mut StdRng::seed_from_u64(seed));
            assert_eq!(palette.colors().len(), 12);
            assert_eq!(palette.colors().iter().filter(|c| c.is_white()).count(), 1);
        }
    }

    #[test]
    fn empty_palette() {
        let palette = Palette::random(0, &mut StdRng::seed_from_u64(0));
        assert!(palette.colors().is_empty());
        assert_eq!(palette.white_index(), None);
    }

    #[test]
    fn shift_keeps_white_in_place() {
        let mut palette = Palette::random(6, &mut StdRng::seed_from_u64(9));
        let white = palette.white_index();
        palette.shift(37);
        assert_eq!(palette.white_index(), white);
        assert_eq!(palette.get(white.unwrap()), Some(Rgb::WHITE));
    }

    #[test]
    fn shift_wraps_channels() {
        assert_eq!(Rgb::new(250, 0, 10).shifted(10), Rgb::new(5, 10, 20));
        assert_eq!(Rgb::new(255, 255, 0).shifted(0), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::new(3, 100, 0).shifted(-5), Rgb::new(253, 95, 250));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb::new(255, 8, 171).to_hex(), "#FF08AB");
        assert_eq!(Color::from(Rgb::new(1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    proptest! {
        #[test]
        fn shifted_color_never_turns_white(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), delta in -1000i32..1000) {
            let color = Rgb::new(r, g, b);
            prop_assume!(!color.is_white());
            prop_assert!(!color.shifted(delta).is_white());
        }
    }
}
