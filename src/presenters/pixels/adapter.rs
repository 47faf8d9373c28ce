use std::sync::{Mutex, MutexGuard, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::render_loop::{FrameData, FramePresenterPort};
use crate::input::gui::events::GuiEvent;

/// Hands frames from the render worker to the UI thread.
///
/// Holds at most one frame; a newer generation replaces an older one that
/// has not been drawn yet.
pub struct PixelsAdapter {
    frame: Mutex<Option<FrameData>>,
    event_loop_proxy: Mutex<EventLoopProxy<GuiEvent>>,
}

impl FramePresenterPort for PixelsAdapter {
    fn present(&self, frame: FrameData) {
        {
            let mut slot = self.lock_frame();
            if slot.as_ref().is_some_and(|pending| pending.generation > frame.generation) {
                return;
            }
            *slot = Some(frame);
        }

        // The event loop may already be gone during shutdown.
        let proxy = self
            .event_loop_proxy
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame: Mutex::new(None),
            event_loop_proxy: Mutex::new(event_loop_proxy),
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.lock_frame().take()
    }

    fn lock_frame(&self) -> MutexGuard<'_, Option<FrameData>> {
        self.frame.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
