use crate::core::data::complex::Complex;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::PixelPosition;
use crate::core::data::view_state::ViewState;

/// Plane units covered by the full width (and height) of the viewport at zoom 1.
pub const PLANE_SPAN_AT_UNIT_ZOOM: f64 = 2.0;

/// Maps a window position to the complex plane.
///
/// Normalised coordinates are centred on the viewport so `center` lands in
/// the middle. Screen Y grows downward while plane Y grows upward, hence the
/// subtraction on the imaginary axis.
#[must_use]
pub fn pixel_to_complex(
    pixel: PixelPosition,
    window_size: PixelSize,
    center: Complex,
    zoom: f64,
) -> Complex {
    let scale = PLANE_SPAN_AT_UNIT_ZOOM / zoom;
    let nx = pixel.x / window_size.width as f64 - 0.5;
    let ny = pixel.y / window_size.height as f64 - 0.5;

    Complex {
        real: center.real + nx * scale,
        imag: center.imag - ny * scale,
    }
}

/// Inverse of [`pixel_to_complex`].
#[must_use]
pub fn complex_to_pixel(
    point: Complex,
    window_size: PixelSize,
    center: Complex,
    zoom: f64,
) -> PixelPosition {
    let scale = PLANE_SPAN_AT_UNIT_ZOOM / zoom;
    let nx = (point.real - center.real) / scale;
    let ny = (center.imag - point.imag) / scale;

    PixelPosition {
        x: (nx + 0.5) * window_size.width as f64,
        y: (ny + 0.5) * window_size.height as f64,
    }
}

/// A view bound to one viewport extent.
///
/// The extent is either the window (for pointer maths) or the render grid
/// (for sampling); normalised coordinates agree between the two.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    center: Complex,
    zoom: f64,
    extent: PixelSize,
}

impl ViewTransform {
    #[must_use]
    pub fn new(view: &ViewState, extent: PixelSize) -> Self {
        Self {
            center: view.center(),
            zoom: view.zoom(),
            extent,
        }
    }

    #[must_use]
    pub fn extent(&self) -> PixelSize {
        self.extent
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: PixelPosition) -> Complex {
        pixel_to_complex(pixel, self.extent, self.center, self.zoom)
    }

    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> PixelPosition {
        complex_to_pixel(point, self.extent, self.center, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn window() -> PixelSize {
        PixelSize::new(800, 600)
    }

    fn default_center() -> Complex {
        Complex {
            real: -0.5,
            imag: 0.0,
        }
    }

    #[test]
    fn test_viewport_centre_maps_to_center() {
        let c = pixel_to_complex(PixelPosition::new(400.0, 300.0), window(), default_center(), 1.0);

        assert_eq!(c, default_center());
    }

    #[test]
    fn test_centre_is_fixed_under_zoom() {
        let c = pixel_to_complex(PixelPosition::new(400.0, 300.0), window(), default_center(), 1.1);

        assert_eq!(c, default_center());
    }

    #[test]
    fn test_corners_span_two_units_over_zoom() {
        let top_left = pixel_to_complex(PixelPosition::new(0.0, 0.0), window(), Complex::ZERO, 1.0);
        let bottom_right =
            pixel_to_complex(PixelPosition::new(800.0, 600.0), window(), Complex::ZERO, 2.0);

        assert_eq!(top_left, Complex { real: -1.0, imag: 1.0 });
        assert_eq!(
            bottom_right,
            Complex {
                real: 0.5,
                imag: -0.5
            }
        );
    }

    #[test]
    fn test_upper_half_of_screen_is_positive_imaginary() {
        let above = pixel_to_complex(PixelPosition::new(400.0, 100.0), window(), Complex::ZERO, 1.0);
        let below = pixel_to_complex(PixelPosition::new(400.0, 500.0), window(), Complex::ZERO, 1.0);

        assert!(above.imag > 0.0);
        assert!(below.imag < 0.0);
        assert!((above.imag + below.imag).abs() < EPSILON);
    }

    #[test]
    fn test_right_of_centre_is_larger_real() {
        let right = pixel_to_complex(PixelPosition::new(700.0, 300.0), window(), Complex::ZERO, 1.0);

        assert!(right.real > 0.0);
    }

    #[test]
    fn test_round_trip_is_identity_inside_viewport() {
        let center = Complex {
            real: -0.743643887,
            imag: 0.131825904,
        };

        for &zoom in &[0.25, 1.0, 3.7, 1.0e6] {
            for &(x, y) in &[(0.0, 0.0), (0.5, 0.5), (123.25, 456.75), (799.5, 599.5), (400.0, 300.0)] {
                let pixel = PixelPosition::new(x, y);
                let c = pixel_to_complex(pixel, window(), center, zoom);
                let back = complex_to_pixel(c, window(), center, zoom);

                assert!((back.x - x).abs() < 1e-6, "x round trip at zoom {zoom}: {} vs {x}", back.x);
                assert!((back.y - y).abs() < 1e-6, "y round trip at zoom {zoom}: {} vs {y}", back.y);
            }
        }
    }

    #[test]
    fn test_render_grid_and_window_agree_on_normalised_position() {
        let view = ViewState::new(default_center(), 2.0, 100).unwrap();
        let on_window = ViewTransform::new(&view, window());
        let on_grid = ViewTransform::new(&view, PixelSize::new(1600, 1200));

        let from_window = on_window.pixel_to_complex(PixelPosition::new(200.0, 150.0));
        let from_grid = on_grid.pixel_to_complex(PixelPosition::new(400.0, 300.0));

        assert!((from_window.real - from_grid.real).abs() < EPSILON);
        assert!((from_window.imag - from_grid.imag).abs() < EPSILON);
    }

    #[test]
    fn test_transform_struct_matches_free_functions() {
        let view = ViewState::new(default_center(), 1.5, 100).unwrap();
        let transform = ViewTransform::new(&view, window());
        let pixel = PixelPosition::new(10.0, 20.0);

        assert_eq!(transform.extent(), window());
        assert_eq!(
            transform.pixel_to_complex(pixel),
            pixel_to_complex(pixel, window(), default_center(), 1.5)
        );
    }
}
