use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::render::Color;

/// Colors handed out, in input order, to series without an explicit color.
pub const DEFAULT_PALETTE: [&str; 14] = [
    "#C00", "#00C", "#080", "#888", "#808", "#088", "#C80", "#600", "#006", "#040", "#333",
    "#404", "#840", "#044",
];

/// Hands out palette colors first, then uniformly random RGB colors.
#[derive(Debug)]
pub struct ColorAssigner {
    next_palette_index: usize,
    rng: SmallRng,
}

impl ColorAssigner {
    /// Creates an assigner; `seed` makes the random fallback reproducible.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            next_palette_index: 0,
            rng,
        }
    }

    pub fn next_color(&mut self) -> Color {
        if let Some(color) = palette_color(self.next_palette_index) {
            self.next_palette_index += 1;
            return color;
        }
        Color::from_rgb8(self.rng.random(), self.rng.random(), self.rng.random())
    }

    /// Returns `explicit` when set, otherwise the next assigned color.
    pub fn resolve(&mut self, explicit: Option<Color>) -> Color {
        explicit.unwrap_or_else(|| self.next_color())
    }
}

/// Palette entry at `index`, parsed.
#[must_use]
pub fn palette_color(index: usize) -> Option<Color> {
    DEFAULT_PALETTE
        .get(index)
        .and_then(|hex| Color::parse_css(hex).ok())
}
