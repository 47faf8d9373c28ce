/// Custom user events for the GUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// A finished frame is waiting in the presenter adapter.
    ///
    /// The handler requests a redraw; the presenter decides on redraw whether
    /// the frame is newer than the one on screen.
    Wake,
}
