use std::error::Error;
use std::fmt;
use std::io;

use winit::error::{EventLoopError, OsError};

use crate::core::data::view_state::ViewStateError;

/// Failures that stop the windowed viewer from starting or running.
#[derive(Debug)]
pub enum GuiError {
    InvalidConfig(ViewStateError),
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    RenderWorker(io::Error),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuiError::InvalidConfig(err) => write!(f, "invalid viewer configuration: {}", err),
            GuiError::EventLoop(err) => write!(f, "event loop error: {}", err),
            GuiError::Window(err) => write!(f, "failed to create window: {}", err),
            GuiError::Surface(err) => write!(f, "failed to create pixels surface: {}", err),
            GuiError::RenderWorker(err) => write!(f, "failed to start render worker: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GuiError::InvalidConfig(err) => Some(err),
            GuiError::EventLoop(err) => Some(err),
            GuiError::Window(err) => Some(err),
            GuiError::Surface(err) => Some(err),
            GuiError::RenderWorker(err) => Some(err),
        }
    }
}

impl From<ViewStateError> for GuiError {
    fn from(err: ViewStateError) -> Self {
        GuiError::InvalidConfig(err)
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        GuiError::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        GuiError::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        GuiError::Surface(err)
    }
}

impl From<io::Error> for GuiError {
    fn from(err: io::Error) -> Self {
        GuiError::RenderWorker(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_worker_error_display_and_source() {
        let err = GuiError::from(io::Error::new(io::ErrorKind::OutOfMemory, "no threads left"));

        assert_eq!(err.to_string(), "failed to start render worker: no threads left");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_config_converts() {
        let err = GuiError::from(ViewStateError::ZeroMaxIterations);

        assert!(matches!(err, GuiError::InvalidConfig(ViewStateError::ZeroMaxIterations)));
    }
}
