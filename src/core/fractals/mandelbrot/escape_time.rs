use crate::core::data::complex::Complex;

/// Escape radius 2, squared.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterations of `z -> z² + c` from `z = 0` before the orbit leaves radius 2.
///
/// At iteration `n` the next orbit value is computed first; if it lies outside
/// the escape radius the result is `n`. Returns `max_iterations` when the
/// orbit stays bounded for the whole budget.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        let next = z * z + c;

        if next.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        z = next;
    }

    max_iterations
}
