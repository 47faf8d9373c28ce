use crate::core::data::pixel_size::PixelSize;
use crate::core::data::view_state::ViewState;

/// Immutable snapshot of everything one frame depends on.
///
/// `PartialEq` lets callers skip resubmitting an unchanged frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub view: ViewState,
    pub render_size: PixelSize,
}
