use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::controllers::interaction::InputEvent;
use crate::core::data::point::PixelPosition;

/// Vertical scroll amount, positive when scrolling forward.
///
/// Line and pixel deltas are returned as-is; only the sign is used for zooming.
pub fn scroll_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

/// Tracks the cursor so button presses can be reported with a position.
///
/// winit reports button state without coordinates, so the last
/// `CursorMoved` position is remembered here.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    position: Option<PixelPosition>,
}

impl PointerTracker {
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        let position = PixelPosition::new(x, y);
        self.position = Some(position);

        InputEvent::PointerMove(position)
    }

    /// Maps a left-button transition to a press or release at the cursor.
    pub fn button(&self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        if button != MouseButton::Left {
            return None;
        }

        let position = self.position?;

        Some(match state {
            ElementState::Pressed => InputEvent::PointerPress(position),
            ElementState::Released => InputEvent::PointerRelease(position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_line_delta_uses_vertical_component() {
        assert_eq!(scroll_delta_y(MouseScrollDelta::LineDelta(3.0, 1.0)), 1.0);
        assert_eq!(scroll_delta_y(MouseScrollDelta::LineDelta(0.0, -2.0)), -2.0);
    }

    #[test]
    fn test_pixel_delta_uses_vertical_component() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(5.0, -12.5));

        assert_eq!(scroll_delta_y(delta), -12.5);
    }

    #[test]
    fn test_cursor_moved_reports_move() {
        let mut tracker = PointerTracker::default();

        let event = tracker.cursor_moved(10.0, 20.0);

        assert_eq!(event, InputEvent::PointerMove(PixelPosition::new(10.0, 20.0)));
    }

    #[test]
    fn test_button_without_known_position_is_ignored() {
        let tracker = PointerTracker::default();

        assert_eq!(tracker.button(ElementState::Pressed, MouseButton::Left), None);
    }

    #[test]
    fn test_left_press_and_release_use_last_position() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(400.0, 300.0);

        assert_eq!(
            tracker.button(ElementState::Pressed, MouseButton::Left),
            Some(InputEvent::PointerPress(PixelPosition::new(400.0, 300.0)))
        );
        assert_eq!(
            tracker.button(ElementState::Released, MouseButton::Left),
            Some(InputEvent::PointerRelease(PixelPosition::new(400.0, 300.0)))
        );
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(1.0, 1.0);

        assert_eq!(tracker.button(ElementState::Pressed, MouseButton::Right), None);
        assert_eq!(tracker.button(ElementState::Pressed, MouseButton::Middle), None);
    }
}
