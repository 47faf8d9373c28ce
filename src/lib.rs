mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::adapters::pixel_format::resample_rgb_to_rgba;
pub use crate::config::{ViewerConfig, WINDOW_TITLE};
pub use crate::controllers::interaction::{DragSession, InputEvent, InteractionController, Redraw};
pub use crate::controllers::render_loop::render::render_frame;
pub use crate::controllers::render_loop::{FrameData, FramePresenterPort, RenderLoop, RenderRequest};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_size::PixelSize;
pub use crate::core::data::point::{PixelPosition, Point};
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::fractals::mandelbrot::colour_map::cubic_palette;
pub use crate::core::fractals::mandelbrot::escape_time::escape_time;
pub use crate::core::view::resolution::{ViewportGeometry, render_size, resolution_factor};
pub use crate::core::view::transform::{ViewTransform, complex_to_pixel, pixel_to_complex};

#[cfg(feature = "gui")]
pub use crate::input::gui::GuiError;
#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
