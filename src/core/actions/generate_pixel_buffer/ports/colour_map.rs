use crate::core::data::colour::Colour;

/// Maps one evaluated grid value to its display colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;
}
