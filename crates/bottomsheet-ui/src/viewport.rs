//! Screen metrics the sheet lays itself out against.

use bottomsheet_core::geometry::{EdgeInsets, Rect, Size};

/// Screen size plus the system-reserved safe-area insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Full screen size in logical units.
    pub size: Size<f32>,
    /// Insets reserved by the system (notch, home indicator, ...).
    pub safe_area: EdgeInsets,
}

impl Viewport {
    pub const fn new(size: Size<f32>, safe_area: EdgeInsets) -> Self {
        Self { size, safe_area }
    }

    /// Viewport described by the safe-area height and bottom inset alone,
    /// with no top or side insets.
    pub const fn from_safe_area(width: f32, safe_area_height: f32, bottom_inset: f32) -> Self {
        Self {
            size: Size::new(width, safe_area_height + bottom_inset),
            safe_area: EdgeInsets::new(0.0, 0.0, bottom_inset, 0.0),
        }
    }

    /// Height of the safe area.
    pub fn safe_area_height(&self) -> f32 {
        (self.size.height - self.safe_area.vertical()).max(0.0)
    }

    /// Bottom safe-area inset.
    pub fn bottom_inset(&self) -> f32 {
        self.safe_area.bottom
    }

    /// Full screen rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Safe-area rectangle in screen coordinates.
    pub fn safe_area_rect(&self) -> Rect {
        self.safe_area.inset(self.bounds())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(390.0, 844.0), EdgeInsets::new(47.0, 0.0, 34.0, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_safe_area() {
        let viewport = Viewport::from_safe_area(400.0, 800.0, 20.0);
        assert_eq!(viewport.size.height, 820.0);
        assert_eq!(viewport.safe_area_height(), 800.0);
        assert_eq!(viewport.bottom_inset(), 20.0);
    }

    #[test]
    fn test_safe_area_rect_excludes_insets() {
        let viewport = Viewport::new(Size::new(390.0, 844.0), EdgeInsets::new(47.0, 10.0, 34.0, 10.0));
        let safe = viewport.safe_area_rect();
        assert_eq!(safe.x, 10.0);
        assert_eq!(safe.y, 47.0);
        assert_eq!(safe.width, 370.0);
        assert_eq!(safe.height, 763.0);
        assert_eq!(viewport.safe_area_height(), 763.0);
    }
}
