//! Input adapters for the viewer.
//!
//! Adapters here receive input from a windowing system and translate it into
//! controller events.

#[cfg(feature = "gui")]
pub mod gui;
