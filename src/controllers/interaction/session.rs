use crate::core::data::point::PixelPosition;

/// One mouse-drag gesture. Exists only between press and release.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { anchor: PixelPosition },
}

impl DragSession {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn anchor(&self) -> Option<PixelPosition> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(*anchor),
        }
    }

    pub fn begin(&mut self, position: PixelPosition) {
        *self = Self::Dragging { anchor: position };
    }

    /// Moves the anchor to `position`, returning the previous anchor when a
    /// drag is in progress.
    pub fn advance(&mut self, position: PixelPosition) -> Option<PixelPosition> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(std::mem::replace(anchor, position)),
        }
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }
}
