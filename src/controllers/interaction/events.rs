use crate::core::data::point::PixelPosition;

/// Raw input from the windowing system, in window pixels with the origin at
/// the top-left and Y increasing downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Resize { width: u32, height: u32 },
    PointerPress(PixelPosition),
    PointerRelease(PixelPosition),
    PointerMove(PixelPosition),
    /// Positive is forward (away from the user).
    Scroll { delta_y: f64 },
}

/// Whether handling an event changed what should be on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum Redraw {
    Request,
    Skip,
}

impl Redraw {
    #[must_use]
    pub fn is_requested(self) -> bool {
        self == Self::Request
    }
}
