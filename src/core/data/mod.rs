pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_size;
pub mod point;
pub mod view_state;
