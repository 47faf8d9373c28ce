use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::{PixelPosition, Point};
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::view::transform::ViewTransform;

/// Escape-time evaluation over a render grid for one view snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    transform: ViewTransform,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(view: &ViewState, render_size: PixelSize) -> Self {
        Self {
            transform: ViewTransform::new(view, render_size),
            max_iterations: view.max_iterations(),
        }
    }

    #[must_use]
    pub fn render_size(&self) -> PixelSize {
        self.transform.extent()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = self
            .transform
            .pixel_to_complex(PixelPosition::cell_centre(pixel));

        escape_time(c, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn default_view() -> ViewState {
        ViewState::new(
            Complex {
                real: -0.5,
                imag: 0.0,
            },
            1.0,
            500,
        )
        .unwrap()
    }

    #[test]
    fn test_centre_cell_is_in_set() {
        let algorithm = MandelbrotAlgorithm::new(&default_view(), PixelSize::new(800, 600));

        assert_eq!(algorithm.compute(Point { x: 400, y: 300 }), 500);
    }

    #[test]
    fn test_corner_cell_escapes() {
        // Top-left samples near (-1.5, 1.0), well outside the set.
        let algorithm = MandelbrotAlgorithm::new(&default_view(), PixelSize::new(800, 600));

        assert!(algorithm.compute(Point { x: 0, y: 0 }) < 500);
    }

    #[test]
    fn test_grid_is_vertically_symmetric() {
        // The set is symmetric about the real axis and the view is centred on it.
        let algorithm = MandelbrotAlgorithm::new(&default_view(), PixelSize::new(64, 64));

        for y in 0..32 {
            for x in 0..64 {
                assert_eq!(
                    algorithm.compute(Point { x, y }),
                    algorithm.compute(Point { x, y: 63 - y }),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_exposes_snapshot_parameters() {
        let algorithm = MandelbrotAlgorithm::new(&default_view(), PixelSize::new(10, 20));

        assert_eq!(algorithm.render_size(), PixelSize::new(10, 20));
        assert_eq!(algorithm.max_iterations(), 500);
    }
}
