use crate::math::{self, MatrixError};
use glam::{Mat4, Vec3};

/// Pixels-to-world scale applied to the cursor offset.
pub const CURSOR_SENSITIVITY: f32 = 0.005;

/// Fixed distance from the camera to the cube along +Z.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Camera whose position is driven by the absolute cursor position.
///
/// The eye is placed at `((center.x - x) * 0.005, (center.y - y) * 0.005, 5)`
/// looking at the origin. The horizontal term is the negation of the raw
/// cursor-minus-center offset, which inverts left/right control, and the raw
/// pixel offset is used as a position rather than an orientation. Both are
/// quirks of the control scheme, kept as-is rather than remapped to an orbit
/// camera.
///
/// Motion is positional, not velocity-based: only the current cursor position
/// matters, never frame timing.
#[derive(Debug, Clone, Copy)]
pub struct CursorCamera {
    cursor: (f32, f32),
    window_size: (u32, u32),
}

impl CursorCamera {
    /// Camera for a window of the given size, cursor starting at the center
    /// so the first frame shows the baseline head-on view.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cursor: (width as f32 / 2.0, height as f32 / 2.0),
            window_size: (width, height),
        }
    }

    /// Record the latest cursor position in window pixel coordinates.
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = (x as f32, y as f32);
    }

    /// Track a window resize so offsets stay relative to the new center.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Current camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let center_x = self.window_size.0 as f32 / 2.0;
        let center_y = self.window_size.1 as f32 / 2.0;
        // Horizontal sign flip: the raw offset is cursor-minus-center, and
        // the x term is its negation.
        let dx = center_x - self.cursor.0;
        let dy = center_y - self.cursor.1;
        Vec3::new(
            dx * CURSOR_SENSITIVITY,
            dy * CURSOR_SENSITIVITY,
            CAMERA_DISTANCE,
        )
    }

    /// View matrix looking from the cursor-driven eye at the origin, +Y up.
    ///
    /// Infallible in practice: the eye's fixed Z keeps it away from the
    /// origin, so the look-at guards never trip here.
    pub fn view_matrix(&self) -> Result<Mat4, MatrixError> {
        math::look_at(self.eye(), Vec3::ZERO, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_baseline_view() {
        let camera = CursorCamera::new(800, 600);
        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn view_matrix_is_always_valid() {
        let mut camera = CursorCamera::new(800, 600);
        camera.set_cursor(0.0, 0.0);
        assert!(camera.view_matrix().is_ok());
        camera.set_cursor(800.0, 600.0);
        assert!(camera.view_matrix().is_ok());
    }
}
