/// Integer cell of a render grid, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Continuous window position as delivered by the windowing system, origin
/// top-left with Y increasing downward.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelPosition {
    pub x: f64,
    pub y: f64,
}

impl PixelPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of a grid cell, the position a fragment shader would sample at.
    #[must_use]
    pub fn cell_centre(point: Point) -> Self {
        Self {
            x: point.x as f64 + 0.5,
            y: point.y as f64 + 0.5,
        }
    }
}
