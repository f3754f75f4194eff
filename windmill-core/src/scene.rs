/// The Windmill scene: seeded cube field, spin animation and pointer-driven camera
use nalgebra::{Point2, Vector2, Vector3};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::color::{blend_color, clamp, solid_color, Color};
use crate::config::{ConfigError, WindmillConfig};
use crate::geometry::Mesh;
use crate::projection::Projection;
use crate::surface::Surface;
use crate::transform::{rotate_xy, scale_to_screen, RotationState};

/// Depth at which a point reaches the dimmest tint
const DEPTH_FADE: f32 = 4.0;
/// Lower bound of the tint fraction so far points stay visible
const MIN_TINT: f32 = 0.1;

/// Input the frame driver forwards to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// The pointer moved. Its position is read from [`PointerState`].
    PointerMotion,
}

/// Current pointer position query, in window pixels
pub trait PointerState {
    fn pointer_position(&self) -> (i32, i32);
}

impl PointerState for (i32, i32) {
    fn pointer_position(&self) -> (i32, i32) {
        *self
    }
}

/// A scene driven by the frame loop
pub trait Game {
    fn display_name(&self) -> &str;

    /// Window size in pixels the scene projects onto
    fn screen_size(&self) -> (u32, u32);

    fn init(&mut self) {}

    fn load(&mut self) {}

    fn handle_event(&mut self, _event: &InputEvent, _pointer: &dyn PointerState) {}

    /// Advance by `delta` seconds and draw the frame
    fn update(&mut self, delta: f32, surface: &mut dyn Surface);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Ready,
}

/// Cubes scattered on an integer grid, spinning about the world origin.
///
/// The camera drifts toward whichever screen quadrant the pointer is in, but
/// only on frames that saw pointer motion.
pub struct Windmill {
    config: WindmillConfig,
    display_name: &'static str,
    shade: Color,
    tint: Color,
    meshes: Vec<Mesh>,
    projection: Projection,
    rotation: RotationState,
    camera: Vector2<f32>,
    velocity: Vector2<f32>,
    phase: Phase,
}

impl Windmill {
    /// Rejects configurations that `load` or the projection cannot use
    pub fn new(config: WindmillConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let projection = Projection::new(config.screen_width, config.screen_height);
        Ok(Self {
            config,
            display_name: "",
            shade: Color::BLACK,
            tint: Color::BLACK,
            meshes: Vec::new(),
            projection,
            rotation: RotationState::zero(),
            camera: Vector2::zeros(),
            velocity: Vector2::zeros(),
            phase: Phase::Uninitialized,
        })
    }

    pub fn config(&self) -> &WindmillConfig {
        &self.config
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Spin angle in degrees
    pub fn angle(&self) -> f32 {
        self.rotation.degrees()
    }

    pub fn camera(&self) -> Vector2<f32> {
        self.camera
    }

    /// Velocity queued by input for the next update
    pub fn pending_velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn palette(&self) -> (Color, Color) {
        (self.shade, self.tint)
    }

    /// Integrate camera and spin, then consume the pending velocity
    pub fn advance(&mut self, delta: f32) {
        self.camera += self.velocity * delta;
        self.rotation.rotate(self.config.spin_rate * delta);
        self.velocity = Vector2::zeros();
        self.projection.adjust_camera(self.camera.x, self.camera.y);
    }

    /// Draw the background and every vertex as a tinted square.
    ///
    /// Meshes are drawn in load order with no depth test.
    pub fn render(&self, surface: &mut dyn Surface) {
        let (width, height) = self.projection.viewport();
        let [r, g, b] = self.config.background;
        surface.set_draw_color(solid_color(r, g, b));
        surface.fill_rect(0, 0, width, height);

        for mesh in &self.meshes {
            for vertex in mesh.vertices() {
                let rotated = rotate_xy(vertex, &self.rotation);
                let scaled = scale_to_screen(Point2::new(rotated.x, rotated.y), width, height);
                let (x, y) = self.projection.world_to_screen(scaled, rotated.z);

                let fraction = clamp(1.0 - vertex.z / DEPTH_FADE, MIN_TINT, 1.0);
                self.draw_point(surface, x, y, blend_color(self.shade, self.tint, fraction));
            }
        }
    }

    /// Square of `point_size` centered on `(x, y)`, skipped when the center is off screen
    fn draw_point(&self, surface: &mut dyn Surface, x: i32, y: i32, color: Color) {
        let (width, height) = self.projection.viewport();
        let on_screen = x >= 0 && (x as i64) < width as i64 && y >= 0 && (y as i64) < height as i64;
        if !on_screen {
            return;
        }

        let size = self.config.point_size;
        let half = (size / 2) as i32;
        surface.set_draw_color(color);
        surface.fill_rect(x - half, y - half, size, size);
    }
}

impl Game for Windmill {
    fn display_name(&self) -> &str {
        self.display_name
    }

    fn screen_size(&self) -> (u32, u32) {
        self.projection.viewport()
    }

    fn init(&mut self) {
        self.display_name = "Windmill";
        self.shade = self.config.shade;
        self.tint = self.config.tint;
    }

    /// Rebuild the cube field from the configured seed
    fn load(&mut self) {
        let mut rng = Xoshiro256StarStar::seed_from_u64(self.config.seed);
        let spread = self.config.spread_vector();

        self.meshes.clear();
        self.meshes.reserve(self.config.cube_count);
        for _ in 0..self.config.cube_count {
            let mut cube = Mesh::unit_cube();
            let x = rng.gen_range(0..spread.x) as f32;
            let y = rng.gen_range(0..spread.y) as f32;
            let z = rng.gen_range(0..spread.z) as f32;
            cube.translate(&Vector3::new(x, y, z));
            self.meshes.push(cube);
        }

        self.phase = Phase::Ready;
        tracing::debug!(
            cubes = self.meshes.len(),
            seed = self.config.seed,
            "windmill scene loaded"
        );
    }

    fn handle_event(&mut self, event: &InputEvent, pointer: &dyn PointerState) {
        if *event != InputEvent::PointerMotion {
            return;
        }

        let (px, py) = pointer.pointer_position();
        let (width, height) = self.projection.viewport();
        let speed = self.config.pointer_speed;
        let toward = |pos: i32, extent: u32| {
            if pos as i64 > (extent / 2) as i64 {
                speed
            } else {
                -speed
            }
        };

        self.velocity = Vector2::new(toward(px, width), toward(py, height));
        tracing::trace!(px, py, vx = self.velocity.x, vy = self.velocity.y, "pointer motion");
    }

    fn update(&mut self, delta: f32, surface: &mut dyn Surface) {
        self.advance(delta);
        self.render(surface);
    }
}
