/// Windmill Core Library - Projection and animation for the Windmill point demo
///
/// This library holds everything that runs without a window: the scalar and
/// color helpers, the mesh model, the camera projection, and the Windmill scene
/// that draws through the [`Surface`] trait.

pub mod color;
pub mod config;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use color::{blend_color, clamp, solid_color, Color};
pub use config::{ConfigError, WindmillConfig};
pub use geometry::Mesh;
pub use projection::Projection;
pub use scene::{Game, InputEvent, PointerState, Windmill};
pub use surface::{FrameBuffer, Surface};
pub use transform::RotationState;
