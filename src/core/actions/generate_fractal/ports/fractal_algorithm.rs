use crate::core::data::point::Point;

/// Per-cell evaluation of a render grid.
///
/// Implementations must be pure with respect to `pixel` so grid cells can be
/// computed concurrently and in any order.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
