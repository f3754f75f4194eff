/// Frame driver configuration
use crate::clock::ClockScale;
use crate::error::DesktopError;

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopConfig {
    pub target_fps: usize,
    pub clock_scale: ClockScale,
    /// Longest delta handed to the scene, in scene time units
    pub max_frame_delta: Option<f32>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            clock_scale: ClockScale::Seconds,
            max_frame_delta: Some(0.1),
        }
    }
}

impl DesktopConfig {
    pub fn validate(&self) -> Result<(), DesktopError> {
        if self.target_fps == 0 {
            return Err(DesktopError::FrameRate);
        }
        if let Some(max) = self.max_frame_delta {
            if !(max.is_finite() && max > 0.0) {
                return Err(DesktopError::FrameCap(max));
            }
        }
        Ok(())
    }
}
