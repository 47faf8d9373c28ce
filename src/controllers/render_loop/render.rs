use crate::controllers::render_loop::data::render_request::RenderRequest;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::CubicColourMap;

/// Renders one frame: escape times for every cell of the render grid, then
/// the cubic palette.
pub fn render_frame<C: CancelToken>(
    request: &RenderRequest,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let algorithm = MandelbrotAlgorithm::new(&request.view, request.render_size);
    let colour_map = CubicColourMap::new(algorithm.max_iterations());

    let escape_times = generate_fractal_parallel_rayon(algorithm.render_size(), &algorithm, cancel)?;

    generate_pixel_buffer(&escape_times, &colour_map, algorithm.render_size(), cancel)
}
