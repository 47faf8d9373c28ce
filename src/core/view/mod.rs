pub mod resolution;
pub mod transform;
