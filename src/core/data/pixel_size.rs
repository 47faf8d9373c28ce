#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(PixelSize::new(0, 600).is_empty());
        assert!(PixelSize::new(800, 0).is_empty());
        assert!(!PixelSize::new(1, 1).is_empty());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(PixelSize::new(800, 600).pixel_count(), 480_000);
    }

    #[test]
    fn test_contains_is_exclusive_of_extent() {
        let size = PixelSize::new(4, 3);

        assert!(size.contains(0, 0));
        assert!(size.contains(3, 2));
        assert!(!size.contains(4, 2));
        assert!(!size.contains(3, 3));
    }
}
