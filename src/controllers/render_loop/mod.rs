//! Background rendering of view snapshots.
//!
//! The render loop owns one worker thread. Requests carry a snapshot of the
//! view and the render grid size; finished frames leave through
//! [`FramePresenterPort`]. Only the newest request is ever rendered to
//! completion.

mod controller;
pub mod data;
pub mod ports;
pub mod render;

pub use controller::RenderLoop;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use ports::presenter::FramePresenterPort;
