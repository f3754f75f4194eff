/// In-plane rotation and the scene-to-pixel remap
use nalgebra::{Point2, Point3, Rotation2};

/// Spin angle in degrees, kept in `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    degrees: f32,
}

impl RotationState {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn radians(&self) -> f32 {
        self.degrees.to_radians()
    }

    /// Advance by `delta` degrees, wrapping back to zero at a full turn
    pub fn rotate(&mut self, delta: f32) {
        self.degrees = wrap_angle(self.degrees + delta);
    }
}

/// Any angle at or past a full turn restarts at zero, it does not carry the
/// remainder. Negative and NaN input also reset to zero.
pub fn wrap_angle(degrees: f32) -> f32 {
    if !(0.0..360.0).contains(&degrees) {
        0.0
    } else {
        degrees
    }
}

/// Rotate the xy components of `point` about the origin. Depth is untouched.
pub fn rotate_xy(point: &Point3<f32>, rotation: &RotationState) -> Point3<f32> {
    let rotated = Rotation2::new(rotation.radians()) * Point2::new(point.x, point.y);
    Point3::new(rotated.x, rotated.y, point.z)
}

/// Map a coordinate from the nominal `[-1, 1]` square into pixel space.
///
/// Scene coordinates well outside that square are normal here: they land far
/// off screen until the camera follows them.
pub fn scale_to_screen(point: Point2<f32>, width: u32, height: u32) -> Point2<f32> {
    Point2::new(
        (point.x + 1.0) * 0.5 * width as f32,
        (point.y + 1.0) * 0.5 * height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.degrees(), 0.0);

        state.rotate(5.0);
        assert!((state.degrees() - 5.0).abs() < 1e-6);
        assert!((state.radians() - 5.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_full_turn_wraps_to_zero() {
        let mut state = RotationState::zero();
        state.rotate(359.0);
        state.rotate(3.0);
        assert_eq!(state.degrees(), 0.0);
    }

    #[test]
    fn test_wrap_angle_range() {
        assert_eq!(wrap_angle(359.9), 359.9);
        assert_eq!(wrap_angle(360.0), 0.0);
        assert_eq!(wrap_angle(725.0), 0.0);
        assert_eq!(wrap_angle(-1.0), 0.0);
        assert_eq!(wrap_angle(f32::NAN), 0.0);
    }

    #[test]
    fn test_quarter_turn() {
        let mut rotation = RotationState::zero();
        rotation.rotate(90.0);

        let rotated = rotate_xy(&Point3::new(1.0, 0.0, 4.0), &rotation);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
        assert_eq!(rotated.z, 4.0);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let point = Point3::new(3.0, 17.0, 2.0);
        assert_eq!(rotate_xy(&point, &RotationState::zero()), point);
    }

    #[test]
    fn test_scale_to_screen() {
        let corner = scale_to_screen(Point2::new(-1.0, 1.0), 640, 480);
        assert_eq!(corner, Point2::new(0.0, 480.0));

        let center = scale_to_screen(Point2::origin(), 640, 480);
        assert_eq!(center, Point2::new(320.0, 240.0));
    }
}
