use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::view_state::{ViewState, ViewStateError};

pub const WINDOW_TITLE: &str = "Mandelbrot Zoom with Dynamic Resolution";
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_MAX_ITERATIONS: u32 = 500;
const DEFAULT_ZOOM: f64 = 1.0;
const DEFAULT_ZOOM_STEP: f64 = 1.1;
const DEFAULT_MAX_RENDER_DIMENSION: u32 = 4096;

pub(crate) fn default_center() -> Complex {
    Complex {
        real: -0.5,
        imag: 0.0,
    }
}

/// Start-up parameters for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: PixelSize,
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    /// Zoom multiplier applied per scroll notch.
    pub zoom_step: f64,
    /// Upper bound for each axis of the render grid.
    pub max_render_dimension: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_size: PixelSize::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            center: default_center(),
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_step: DEFAULT_ZOOM_STEP,
            max_render_dimension: DEFAULT_MAX_RENDER_DIMENSION,
        }
    }
}

impl ViewerConfig {
    pub fn initial_view(&self) -> Result<ViewState, ViewStateError> {
        ViewState::new(self.center, self.zoom, self.max_iterations)
    }

    pub fn validate(&self) -> Result<(), ViewStateError> {
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ViewStateError::InvalidZoomFactor {
                factor: self.zoom_step,
            });
        }

        self.initial_view().map(|_| ())
    }
}
