use glam::Vec2;

/// Size of the render target in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height, or 1 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Convert to NDC (-1 to 1), y flipped for screen coordinates
    #[must_use]
    pub fn to_ndc(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        let width = self.width.max(1.0);
        let height = self.height.max(1.0);
        Vec2::new(
            (screen_x / width) * 2.0 - 1.0,
            1.0 - (screen_y / height) * 2.0,
        )
    }

    /// Convert to the label system's space: pixels, origin at the viewport
    /// center, y up.
    #[must_use]
    pub fn to_label_space(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        Vec2::new(
            screen_x - self.width * 0.5,
            self.height * 0.5 - screen_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_and_center() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn label_space_is_centered_y_up() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_label_space(400.0, 300.0), Vec2::ZERO);
        assert_eq!(vp.to_label_space(500.0, 200.0), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn degenerate_viewport_aspect() {
        assert_eq!(Viewport::new(100.0, 0.0).aspect(), 1.0);
        assert_eq!(Viewport::new(200.0, 100.0).aspect(), 2.0);
    }
}
