use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Evaluates every cell of a `size` grid in parallel using rayon's
/// work-stealing scheduler, one task per row.
///
/// Checks the cancellation token at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row. Results are in
/// row-major order.
///
/// Returns [`Cancelled`] as soon as any row observes cancellation.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    size: PixelSize,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
    C: CancelToken,
{
    let row_width = size.width as usize;

    let rows: Result<Vec<Vec<Alg::Output>>, Cancelled> = (0..size.height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..size.width {
                if x as usize % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                row.push(algorithm.compute(Point { x, y }));
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
