/// Camera offset and the pseudo-perspective world-to-screen mapping
use nalgebra::{Point2, Vector2};

/// Lowest depth accepted by the perspective divide. Keeps `depth + 1` positive.
pub const MIN_DEPTH: f32 = -0.999;

/// Projects scene coordinates onto a fixed-size viewport.
///
/// The camera is a 2D offset subtracted from every point before the divide,
/// so points further away (larger depth) follow the camera less.
#[derive(Debug, Clone)]
pub struct Projection {
    camera: Vector2<f32>,
    width: u32,
    height: u32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Vector2::zeros(),
            width,
            height,
        }
    }

    /// Place the camera at an absolute offset
    pub fn adjust_camera(&mut self, x: f32, y: f32) {
        self.camera = Vector2::new(x, y);
    }

    pub fn camera_offset(&self) -> Vector2<f32> {
        self.camera
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Project `point` at `depth` to integer pixel coordinates.
    ///
    /// Coordinates are truncated toward zero, not rounded.
    pub fn world_to_screen(&self, point: Point2<f32>, depth: f32) -> (i32, i32) {
        let divisor = depth.max(MIN_DEPTH) + 1.0;
        let half_w = (self.width / 2) as f32;
        let half_h = (self.height / 2) as f32;

        let x = point.x / divisor - self.camera.x / divisor + half_w;
        let y = point.y / divisor - self.camera.y / divisor + half_h;

        (x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_center() {
        let projection = Projection::new(640, 480);
        assert_eq!(projection.world_to_screen(Point2::origin(), 0.0), (320, 240));
        assert_eq!(projection.world_to_screen(Point2::origin(), 3.0), (320, 240));
    }

    #[test]
    fn test_depth_divides_distance_from_camera() {
        let mut projection = Projection::new(640, 640);
        projection.adjust_camera(100.0, -60.0);

        // depth 1 halves everything
        let (x, y) = projection.world_to_screen(Point2::new(300.0, 40.0), 1.0);
        assert_eq!((x, y), (100 + 320, 50 + 320));
    }

    #[test]
    fn test_adjust_camera_is_absolute() {
        let mut projection = Projection::new(640, 640);
        projection.adjust_camera(10.0, 10.0);
        projection.adjust_camera(-4.0, 2.0);
        assert_eq!(projection.camera_offset(), Vector2::new(-4.0, 2.0));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let projection = Projection::new(0, 0);
        assert_eq!(projection.world_to_screen(Point2::new(2.9, -2.9), 0.0), (2, -2));
    }

    #[test]
    fn test_depth_floor_keeps_output_finite() {
        let mut projection = Projection::new(640, 640);
        projection.adjust_camera(1.0e4, -1.0e4);

        // saturating float-to-int casts would hide an infinity, so check the
        // divisor path directly with the extreme depths
        for depth in [-1.0, -5.0, f32::MIN] {
            let (x, y) = projection.world_to_screen(Point2::new(1.0, 1.0), depth);
            assert!(x != i32::MIN && x != i32::MAX);
            assert!(y != i32::MIN && y != i32::MAX);
        }
    }

    #[test]
    fn test_nonnegative_depths_stay_bounded() {
        let mut projection = Projection::new(640, 640);
        projection.adjust_camera(-2500.0, 7300.0);

        let point = Point2::new(3520.0, 9920.0);
        let mut depth = 0.0;
        while depth < 50.0 {
            let (x, y) = projection.world_to_screen(point, depth);
            assert!(x.abs() < 20_000 && y.abs() < 20_000);
            depth += 0.25;
        }
    }
}
