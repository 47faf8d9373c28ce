//! Dynamic render resolution.
//!
//! The render grid is scaled with zoom so that the spacing between sampled
//! plane points shrinks as the view is magnified. The presenter resamples the
//! grid back onto the window.

use crate::core::data::pixel_size::PixelSize;

/// Render pixels per window pixel at a given zoom.
#[must_use]
pub fn resolution_factor(zoom: f64) -> f64 {
    zoom
}

fn scaled_dimension(dimension: u32, factor: f64, max_dimension: u32) -> u32 {
    let max_dimension = max_dimension.max(1);
    let scaled = (dimension as f64 * factor).round();

    if scaled.is_nan() || scaled < 1.0 {
        1
    } else if scaled >= max_dimension as f64 {
        max_dimension
    } else {
        scaled as u32
    }
}

/// Size of the grid actually evaluated for `window_size` at `zoom`, each axis
/// clamped to `1..=max_dimension`.
#[must_use]
pub fn render_size(window_size: PixelSize, zoom: f64, max_dimension: u32) -> PixelSize {
    let factor = resolution_factor(zoom);

    PixelSize {
        width: scaled_dimension(window_size.width, factor, max_dimension),
        height: scaled_dimension(window_size.height, factor, max_dimension),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewportGeometry {
    window_size: PixelSize,
    render_size: PixelSize,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(window_size: PixelSize, zoom: f64, max_dimension: u32) -> Self {
        Self {
            window_size,
            render_size: render_size(window_size, zoom, max_dimension),
        }
    }

    #[must_use]
    pub fn window_size(&self) -> PixelSize {
        self.window_size
    }

    #[must_use]
    pub fn render_size(&self) -> PixelSize {
        self.render_size
    }
}
