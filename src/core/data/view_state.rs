use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidZoom { zoom: f64 },
    InvalidZoomFactor { factor: f64 },
    ZeroMaxIterations,
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be finite and greater than zero, got {}", zoom)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(
                    f,
                    "zoom factor must be finite and greater than zero, got {}",
                    factor
                )
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ViewStateError {}

fn is_valid_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Pan/zoom parameters of the view.
///
/// `zoom` is kept strictly positive: it can only be set through the
/// constructor or changed by a positive multiplicative factor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
}

impl ViewState {
    pub fn new(center: Complex, zoom: f64, max_iterations: u32) -> Result<Self, ViewStateError> {
        if !is_valid_scale(zoom) {
            return Err(ViewStateError::InvalidZoom { zoom });
        }

        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        Ok(Self {
            center,
            zoom,
            max_iterations,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Shifts the centre by `delta` in plane units.
    pub fn pan_by(&mut self, delta: Complex) {
        self.center = self.center + delta;
    }

    pub fn zoom_by(&mut self, factor: f64) -> Result<(), ViewStateError> {
        if !is_valid_scale(factor) {
            return Err(ViewStateError::InvalidZoomFactor { factor });
        }

        let zoom = self.zoom * factor;

        // Repeated zoom-out can underflow to zero; keep the last valid zoom.
        if is_valid_scale(zoom) {
            self.zoom = zoom;
        }

        Ok(())
    }
}
