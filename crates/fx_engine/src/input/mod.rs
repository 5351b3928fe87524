//! Pointer input state
//!
//! The driver reads pointer state every frame and never resets it; the last
//! known position keeps influencing particle rotation until the pointer moves
//! again.

/// Normalized pointer coordinates in `[-1, 1]` on both axes
///
/// `(0, 0)` is the viewport center. Positive y points up, matching the
/// renderable coordinate convention rather than window coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    x: f32,
    y: f32,
}

impl PointerState {
    /// Create a centered pointer state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from window coordinates against the current viewport size
    ///
    /// Degenerate viewport dimensions (zero width or height) leave the state
    /// unchanged rather than producing non-finite coordinates.
    pub fn update_from_window(&mut self, window_x: f32, window_y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.x = (window_x / width) * 2.0 - 1.0;
        self.y = -((window_y / height) * 2.0 - 1.0);
    }

    /// Normalized horizontal offset in `[-1, 1]`
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Normalized vertical offset in `[-1, 1]`
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let mut pointer = PointerState::new();
        pointer.update_from_window(400.0, 300.0, 800.0, 600.0);
        assert_eq!(pointer.x(), 0.0);
        assert_eq!(pointer.y(), 0.0);
    }

    #[test]
    fn test_corners_map_to_unit_range() {
        let mut pointer = PointerState::new();
        pointer.update_from_window(0.0, 0.0, 800.0, 600.0);
        assert_eq!(pointer.x(), -1.0);
        assert_eq!(pointer.y(), 1.0);

        pointer.update_from_window(800.0, 600.0, 800.0, 600.0);
        assert_eq!(pointer.x(), 1.0);
        assert_eq!(pointer.y(), -1.0);
    }

    #[test]
    fn test_zero_viewport_is_ignored() {
        let mut pointer = PointerState::new();
        pointer.update_from_window(100.0, 100.0, 800.0, 600.0);
        let before = pointer;
        pointer.update_from_window(50.0, 50.0, 0.0, 0.0);
        assert_eq!(pointer, before);
    }
}
