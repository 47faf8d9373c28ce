#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Converts channels in `[0, 1]` to 8-bit, clamping anything outside.
    #[must_use]
    pub fn from_unit_rgb(rgb: [f64; 3]) -> Self {
        Self {
            r: unit_to_byte(rgb[0]),
            g: unit_to_byte(rgb[1]),
            b: unit_to_byte(rgb[2]),
        }
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
