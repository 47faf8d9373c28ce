use std::sync::Arc;

use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::render_loop::FramePresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

/// Window-side half of a presenter: owns the surface and draws the newest
/// frame delivered through its shared adapter.
pub trait GuiPresenterPort {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, GuiError>
    where
        Self: Sized;
    fn render(&mut self) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn FramePresenterPort>;
    fn resize(&mut self, width: u32, height: u32);
}
