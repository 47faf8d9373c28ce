use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Cubic polynomial palette over normalised escape time `t` in `[0, 1]`.
///
/// Both ends of the range (`t = 0` and `t = 1`) are black.
#[must_use]
pub fn cubic_palette(t: f64) -> [f64; 3] {
    let s = 1.0 - t;

    [
        9.0 * s * t * t * t,
        15.0 * s * s * t * t,
        8.5 * s * s * s * t,
    ]
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CubicColourMap {
    max_iterations: u32,
}

impl CubicColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    #[must_use]
    pub fn normalise(&self, iterations: u32) -> f64 {
        iterations.min(self.max_iterations) as f64 / self.max_iterations as f64
    }
}

impl ColourMap<u32> for CubicColourMap {
    fn map(&self, iterations: u32) -> Colour {
        Colour::from_unit_rgb(cubic_palette(self.normalise(iterations)))
    }
}
