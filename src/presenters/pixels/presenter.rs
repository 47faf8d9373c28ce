use std::sync::Arc;

use log::{debug, error};
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::resample_rgb_to_rgba;
use crate::controllers::render_loop::{FrameData, FramePresenterPort};
use crate::core::data::pixel_size::PixelSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Draws finished frames into a window-sized `pixels` framebuffer.
///
/// The render grid rarely matches the window, so every frame is rescaled on
/// the CPU before upload. The last frame is kept and rescaled again after a
/// resize until a fresh one arrives.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    buffer_size: PixelSize,
    frame: Option<FrameData>,
    last_presented_generation: u64,
    needs_redraw: bool,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            buffer_size: PixelSize::new(size.width, size.height),
            frame: None,
            last_presented_generation: 0,
            needs_redraw: true,
        })
    }

    fn share_adapter(&self) -> Arc<dyn FramePresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn FramePresenterPort>
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        if self.buffer_size.is_empty() {
            return Ok(());
        }

        self.accept_pending_frame();

        if self.needs_redraw {
            self.draw();
            self.needs_redraw = false;
        }

        self.pixels.render()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            error!("failed to resize surface to {}x{}: {}", width, height, err);
            return;
        }

        match self.pixels.resize_buffer(width, height) {
            Ok(()) => {
                self.buffer_size = PixelSize::new(width, height);
                self.needs_redraw = true;
            }
            Err(err) => {
                error!("failed to resize buffer to {}x{}: {}", width, height, err);
            }
        }
    }
}

impl PixelsPresenter {
    fn accept_pending_frame(&mut self) {
        let Some(frame) = self.adapter.take_frame() else {
            return;
        };

        if frame.generation <= self.last_presented_generation {
            debug!("dropping out-of-date generation {}", frame.generation);
            return;
        }

        debug!(
            "presenting generation {} ({}x{}, {} ms)",
            frame.generation,
            frame.pixel_buffer.size().width,
            frame.pixel_buffer.size().height,
            frame.render_duration.as_millis()
        );

        self.last_presented_generation = frame.generation;
        self.frame = Some(frame);
        self.needs_redraw = true;
    }

    fn draw(&mut self) {
        let dest = self.pixels.frame_mut();

        match &self.frame {
            Some(frame) => resample_rgb_to_rgba(
                frame.pixel_buffer.buffer(),
                frame.pixel_buffer.size(),
                dest,
                self.buffer_size,
            ),
            None => {
                for pixel in dest.chunks_exact_mut(4) {
                    pixel.copy_from_slice(&[0, 0, 0, 255]);
                }
            }
        }
    }
}
