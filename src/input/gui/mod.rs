//! Windowed viewer built on winit for window management and pixels for
//! framebuffer presentation.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;

pub use errors::GuiError;
pub use events::GuiEvent;
