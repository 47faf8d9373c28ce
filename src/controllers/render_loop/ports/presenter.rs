use crate::controllers::render_loop::data::frame_data::FrameData;

/// Receives finished frames from the render worker thread.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
