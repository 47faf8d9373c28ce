//! Translation of pointer and window input into view changes.

mod controller;
pub mod events;
pub mod session;

pub use controller::InteractionController;
pub use events::{InputEvent, Redraw};
pub use session::DragSession;
